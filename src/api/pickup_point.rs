use std::sync::Arc;

use poem::Request;
use poem::web::{CsrfToken, CsrfVerifier};
use poem_openapi::param::{Header, Query};
use poem_openapi::payload::Json;
use poem_openapi::OpenApi;

use crate::api::ApiTags;
use crate::api::helpers::{echo_form, verify_csrf};
use crate::coordinators::PickupPointCoordinator;
use crate::errors::{InternalError, MasterFileError};
use crate::grid::GridRequest;
use crate::providers::TokenProvider;
use crate::types::dto::common::SaveResponse;
use crate::types::dto::grid::GridPayload;
use crate::types::dto::pickup_point::{
    PickupPointEditRequest, PickupPointForm, PickupPointFormView, PickupPointGridResponse,
    PickupPointRow,
};
use crate::types::internal::context::RequestContext;
use crate::types::internal::{CancelSignal, PickupPointFields};

/// Tenant-scoped pickup point endpoints
pub struct PickupPointApi {
    pickup_point_coordinator: Arc<PickupPointCoordinator>,
    token_provider: Arc<TokenProvider>,
    shutdown: CancelSignal,
}

impl PickupPointApi {
    pub fn new(
        pickup_point_coordinator: Arc<PickupPointCoordinator>,
        token_provider: Arc<TokenProvider>,
        shutdown: CancelSignal,
    ) -> Self {
        Self {
            pickup_point_coordinator,
            token_provider,
            shutdown,
        }
    }

    fn context(&self, req: &Request) -> RequestContext {
        RequestContext::validate_request(req, &self.token_provider)
    }
}

#[OpenApi]
impl PickupPointApi {
    /// List the caller's active pickup points
    #[oai(path = "/PickupPoint", method = "get", tag = "ApiTags::PickupPoint")]
    async fn index(&self, req: &Request) -> Result<Json<Vec<PickupPointRow>>, MasterFileError> {
        let ctx = self.context(req);
        let pickup_points = self
            .pickup_point_coordinator
            .list(&ctx)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(pickup_points.iter().map(PickupPointRow::from).collect()))
    }

    /// Empty create form with the trade supplier dropdown
    #[oai(path = "/PickupPoint/Create", method = "get", tag = "ApiTags::PickupPoint")]
    async fn create_form(
        &self,
        req: &Request,
        csrf_token: &CsrfToken,
    ) -> Result<Json<PickupPointFormView>, MasterFileError> {
        let ctx = self.context(req);
        let trade_suppliers = self
            .pickup_point_coordinator
            .supplier_options(&ctx)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(PickupPointFormView {
            id: None,
            csrf_token: csrf_token.0.clone(),
            pickup_point: PickupPointForm {
                is_active: Some(true),
                ..Default::default()
            },
            trade_suppliers,
        }))
    }

    /// Create a pickup point for the caller's tenant
    #[oai(path = "/PickupPoint/Create", method = "post", tag = "ApiTags::PickupPoint")]
    async fn create(
        &self,
        req: &Request,
        verifier: &CsrfVerifier,
        #[oai(name = "X-CSRF-Token")] csrf: Header<Option<String>>,
        body: Json<PickupPointForm>,
    ) -> Result<Json<SaveResponse>, MasterFileError> {
        verify_csrf(verifier, csrf.0.as_deref())?;

        let form = body.0;
        let echo = echo_form(&form);
        let fields = PickupPointFields::try_from(form)
            .map_err(|e| MasterFileError::from_internal_error(InternalError::from(e), echo.clone()))?;

        let ctx = self.context(req);
        let created = self
            .pickup_point_coordinator
            .create(&ctx, &self.shutdown, fields)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, echo))?;

        Ok(Json(SaveResponse {
            id: created.id,
            message: format!("Pickup point {} created", created.code),
            redirect_to: "/PickupPoint".to_string(),
        }))
    }

    /// Grid data for the caller's pickup points
    #[oai(path = "/PickupPoint/GetPickupPointsList", method = "post", tag = "ApiTags::PickupPoint")]
    async fn grid(
        &self,
        req: &Request,
        body: GridPayload,
    ) -> Result<Json<PickupPointGridResponse>, MasterFileError> {
        let ctx = self.context(req);
        let request = GridRequest::from(body);
        let page = self
            .pickup_point_coordinator
            .grid(&ctx, &request)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(page.into()))
    }

    /// Edit form for one of the caller's pickup points
    #[oai(path = "/PickupPoint/Edit", method = "get", tag = "ApiTags::PickupPoint")]
    async fn edit_form(
        &self,
        req: &Request,
        csrf_token: &CsrfToken,
        id: Query<i32>,
    ) -> Result<Json<PickupPointFormView>, MasterFileError> {
        let ctx = self.context(req);
        let pickup_point = self
            .pickup_point_coordinator
            .find(&ctx, id.0)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;
        let trade_suppliers = self
            .pickup_point_coordinator
            .supplier_options(&ctx)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, None))?;

        Ok(Json(PickupPointFormView {
            id: Some(pickup_point.id),
            csrf_token: csrf_token.0.clone(),
            pickup_point: PickupPointForm::from(&pickup_point),
            trade_suppliers,
        }))
    }

    /// Overwrite a pickup point's editable fields
    #[oai(path = "/PickupPoint/Edit", method = "post", tag = "ApiTags::PickupPoint")]
    async fn edit(
        &self,
        req: &Request,
        verifier: &CsrfVerifier,
        #[oai(name = "X-CSRF-Token")] csrf: Header<Option<String>>,
        body: Json<PickupPointEditRequest>,
    ) -> Result<Json<SaveResponse>, MasterFileError> {
        verify_csrf(verifier, csrf.0.as_deref())?;

        let PickupPointEditRequest { id, form } = body.0;
        let echo = echo_form(&form);
        let fields = PickupPointFields::try_from(form)
            .map_err(|e| MasterFileError::from_internal_error(InternalError::from(e), echo.clone()))?;

        let ctx = self.context(req);
        let updated = self
            .pickup_point_coordinator
            .edit(&ctx, &self.shutdown, id, fields)
            .await
            .map_err(|e| MasterFileError::from_internal_error(e, echo))?;

        Ok(Json(SaveResponse {
            id: updated.id,
            message: format!("Pickup point {} updated", updated.code),
            redirect_to: "/PickupPoint".to_string(),
        }))
    }
}
