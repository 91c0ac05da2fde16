use chrono::NaiveDate;
use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::grid::GridPage;
use crate::errors::internal::RecordError;
use crate::types::db::employee;
use crate::types::internal::EmployeeFields;
use crate::types::internal::records::optional_text;

/// Employee create/edit form as submitted by the client
///
/// Every field is optional on the wire; required-field checks run when the form
/// is converted to [`EmployeeFields`] so failures can echo the form back.
#[derive(Object, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct EmployeeForm {
    pub employee_number: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,

    /// ISO 8601 date (`YYYY-MM-DD`)
    pub hire_date: Option<String>,

    pub monthly_salary: Option<f64>,

    /// Defaults to active when omitted
    pub is_active: Option<bool>,
}

/// Employee edit submission: the record id plus the full form
#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEditRequest {
    pub id: i32,

    #[oai(flatten)]
    #[serde(flatten)]
    pub form: EmployeeForm,
}

/// Form view model for the create and edit screens
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct EmployeeFormView {
    /// Present when editing an existing record
    pub id: Option<i32>,

    /// Token to send back in the `X-CSRF-Token` header
    pub csrf_token: String,

    pub employee: EmployeeForm,
}

/// Listing and grid row
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct EmployeeRow {
    pub id: i32,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub hire_date: Option<String>,
    pub is_active: bool,
}

/// Grid response for the employee listing
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct EmployeeGridResponse {
    pub draw: i64,
    pub records_total: u64,
    pub records_filtered: u64,
    pub data: Vec<EmployeeRow>,
}

impl From<&employee::Model> for EmployeeRow {
    fn from(model: &employee::Model) -> Self {
        Self {
            id: model.id,
            employee_number: model.employee_number.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            phone: model.phone.clone(),
            job_title: model.job_title.clone(),
            department: model.department.clone(),
            hire_date: model.hire_date.map(|d| d.format("%Y-%m-%d").to_string()),
            is_active: model.is_active,
        }
    }
}

impl From<&employee::Model> for EmployeeForm {
    fn from(model: &employee::Model) -> Self {
        Self {
            employee_number: Some(model.employee_number.clone()),
            first_name: Some(model.first_name.clone()),
            last_name: Some(model.last_name.clone()),
            email: model.email.clone(),
            phone: model.phone.clone(),
            job_title: model.job_title.clone(),
            department: model.department.clone(),
            hire_date: model.hire_date.map(|d| d.format("%Y-%m-%d").to_string()),
            monthly_salary: model.monthly_salary,
            is_active: Some(model.is_active),
        }
    }
}

impl TryFrom<EmployeeForm> for EmployeeFields {
    type Error = RecordError;

    fn try_from(form: EmployeeForm) -> Result<Self, Self::Error> {
        let hire_date = match optional_text(form.hire_date) {
            Some(raw) => Some(
                NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
                    .map_err(|_| RecordError::validation("hireDate", "must be a date (YYYY-MM-DD)"))?,
            ),
            None => None,
        };

        if let Some(salary) = form.monthly_salary {
            if !salary.is_finite() || salary < 0.0 {
                return Err(RecordError::validation(
                    "monthlySalary",
                    "must be a non-negative amount",
                ));
            }
        }

        Ok(EmployeeFields {
            employee_number: required("employeeNumber", form.employee_number)?,
            first_name: required("firstName", form.first_name)?,
            last_name: required("lastName", form.last_name)?,
            email: optional_text(form.email),
            phone: optional_text(form.phone),
            job_title: optional_text(form.job_title),
            department: optional_text(form.department),
            hire_date,
            monthly_salary: form.monthly_salary,
            is_active: form.is_active.unwrap_or(true),
        })
    }
}

pub(super) fn required(field: &str, value: Option<String>) -> Result<String, RecordError> {
    optional_text(value).ok_or_else(|| RecordError::validation(field, "is required"))
}

impl From<GridPage<EmployeeRow>> for EmployeeGridResponse {
    fn from(page: GridPage<EmployeeRow>) -> Self {
        Self {
            draw: page.draw,
            records_total: page.records_total,
            records_filtered: page.records_filtered,
            data: page.data,
        }
    }
}
