use chrono::NaiveDate;

/// Validated employee field values, shared by create and edit
///
/// Optional text fields are trimmed and blank values collapse to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeFields {
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub job_title: Option<String>,
    pub department: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub monthly_salary: Option<f64>,
    pub is_active: bool,
}

/// Validated pickup point field values, shared by create and edit
#[derive(Debug, Clone, PartialEq)]
pub struct PickupPointFields {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub trade_supplier_id: Option<i32>,
    pub is_active: bool,
}

/// Trim an optional text value, dropping it when blank
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}
