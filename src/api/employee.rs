use std::sync::Arc;

use poem::Request;
use poem::web::{CsrfToken, CsrfVerifier};
use poem_openapi::param::{Header, Query};
use poem_openapi::payload::Json;
use poem_openapi::OpenApi;

use crate::api::ApiTags;
use crate::api::helpers::{echo_form, verify_csrf};
use crate::coordinators::EmployeeCoordinator;
use crate::errors::{InternalError, MasterFileError};
use crate::grid::GridRequest;
use crate::providers::TokenProvider;
use crate::types::dto::common::SaveResponse;
use crate::types::dto::employee::{
    EmployeeEditRequest, EmployeeForm, EmployeeFormView, EmployeeGridResponse, EmployeeRow,
};
use crate::types::dto::grid::GridPayload;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{CancelSignal, EmployeeFields};

/// Employee master-file endpoints
pub struct EmployeeApi {
    employee_coordinator: Arc<EmployeeCoordinator>,
    token_provider: Arc<TokenProvider>,
    shutdown: CancelSignal,
}

impl EmployeeApi {
    pub fn new(
        employee_coordinator: Arc<EmployeeCoordinator>,
        token_provider: Arc<TokenProvider>,
        shutdown: CancelSignal,
    ) -> Self {
        Self {
            employee_coordinator,
            token_provider,
            shutdown,
        }
    }
}

#[OpenApi]
impl EmployeeApi {
    /// List active employees
    #[oai(path = "/Employee", method = "get", tag = "ApiTags::Employee")]
    async fn index(&self) -> Result<Json<Vec<EmployeeRow>>, MasterFileError> {
        let employees = self
            .employee_coordinator
            .list()
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(employees.iter().map(EmployeeRow::from).collect()))
    }

    /// Empty create form and anti-forgery token
    #[oai(path = "/Employee/Create", method = "get", tag = "ApiTags::Employee")]
    async fn create_form(&self, csrf_token: &CsrfToken) -> Json<EmployeeFormView> {
        Json(EmployeeFormView {
            id: None,
            csrf_token: csrf_token.0.clone(),
            employee: EmployeeForm {
                is_active: Some(true),
                ..Default::default()
            },
        })
    }

    /// Create an employee
    ///
    /// Requires the `X-CSRF-Token` header. A rejected form is echoed back.
    #[oai(path = "/Employee/Create", method = "post", tag = "ApiTags::Employee")]
    async fn create(
        &self,
        req: &Request,
        verifier: &CsrfVerifier,
        #[oai(name = "X-CSRF-Token")] csrf: Header<Option<String>>,
        body: Json<EmployeeForm>,
    ) -> Result<Json<SaveResponse>, MasterFileError> {
        verify_csrf(verifier, csrf.0.as_deref())?;

        let form = body.0;
        let echo = echo_form(&form);
        let fields = EmployeeFields::try_from(form)
            .map_err(|e| MasterFileError::from_internal_error(InternalError::from(e), echo.clone()))?;

        let ctx = RequestContext::validate_request(req, &self.token_provider);
        let created = self
            .employee_coordinator
            .create(&ctx, &self.shutdown, fields)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, echo))?;

        Ok(Json(SaveResponse {
            id: created.id,
            message: format!("Employee {} created", created.employee_number),
            redirect_to: "/Employee".to_string(),
        }))
    }

    /// Grid data for the employee listing
    ///
    /// Accepts a JSON body or DataTables form fields.
    #[oai(path = "/Employee/GetEmployeesList", method = "post", tag = "ApiTags::Employee")]
    async fn grid(&self, body: GridPayload) -> Result<Json<EmployeeGridResponse>, MasterFileError> {
        let request = GridRequest::from(body);
        let page = self
            .employee_coordinator
            .grid(&request)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(page.into()))
    }

    /// Edit form for an existing employee
    #[oai(path = "/Employee/Edit", method = "get", tag = "ApiTags::Employee")]
    async fn edit_form(
        &self,
        csrf_token: &CsrfToken,
        id: Query<i32>,
    ) -> Result<Json<EmployeeFormView>, MasterFileError> {
        let employee = self
            .employee_coordinator
            .find(id.0)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(EmployeeFormView {
            id: Some(employee.id),
            csrf_token: csrf_token.0.clone(),
            employee: EmployeeForm::from(&employee),
        }))
    }

    /// Overwrite an employee's editable fields
    #[oai(path = "/Employee/Edit", method = "post", tag = "ApiTags::Employee")]
    async fn edit(
        &self,
        req: &Request,
        verifier: &CsrfVerifier,
        #[oai(name = "X-CSRF-Token")] csrf: Header<Option<String>>,
        body: Json<EmployeeEditRequest>,
    ) -> Result<Json<SaveResponse>, MasterFileError> {
        verify_csrf(verifier, csrf.0.as_deref())?;

        let EmployeeEditRequest { id, form } = body.0;
        let echo = echo_form(&form);
        let fields = EmployeeFields::try_from(form)
            .map_err(|e| MasterFileError::from_internal_error(InternalError::from(e), echo.clone()))?;

        let ctx = RequestContext::validate_request(req, &self.token_provider);
        let updated = self
            .employee_coordinator
            .edit(&ctx, &self.shutdown, id, fields)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, echo))?;

        Ok(Json(SaveResponse {
            id: updated.id,
            message: format!("Employee {} updated", updated.employee_number),
            redirect_to: "/Employee".to_string(),
        }))
    }
}
