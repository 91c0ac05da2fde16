use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use super::common::SelectOption;
use super::employee::required;
use crate::grid::GridPage;
use crate::errors::internal::RecordError;
use crate::types::db::pickup_point;
use crate::types::internal::PickupPointFields;
use crate::types::internal::records::optional_text;

/// Pickup point create/edit form as submitted by the client
#[derive(Object, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct PickupPointForm {
    pub code: Option<String>,
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,

    /// Must be one of the tenant's active trade suppliers when set
    pub trade_supplier_id: Option<i32>,

    pub is_active: Option<bool>,
}

#[derive(Object, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[oai(rename_all = "camelCase")]
#[serde(rename_all = "camelCase")]
pub struct PickupPointEditRequest {
    pub id: i32,

    #[oai(flatten)]
    #[serde(flatten)]
    pub form: PickupPointForm,
}

/// Form view model, including the trade supplier dropdown
#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct PickupPointFormView {
    pub id: Option<i32>,
    pub csrf_token: String,
    pub pickup_point: PickupPointForm,
    pub trade_suppliers: Vec<SelectOption>,
}

#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct PickupPointRow {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub contact_person: Option<String>,
    pub phone: Option<String>,
    pub trade_supplier_id: Option<i32>,
    pub is_active: bool,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct PickupPointGridResponse {
    pub draw: i64,
    pub records_total: u64,
    pub records_filtered: u64,
    pub data: Vec<PickupPointRow>,
}

impl From<&pickup_point::Model> for PickupPointRow {
    fn from(model: &pickup_point::Model) -> Self {
        Self {
            id: model.id,
            code: model.code.clone(),
            name: model.name.clone(),
            address: model.address.clone(),
            city: model.city.clone(),
            contact_person: model.contact_person.clone(),
            phone: model.phone.clone(),
            trade_supplier_id: model.trade_supplier_id,
            is_active: model.is_active,
        }
    }
}

impl From<&pickup_point::Model> for PickupPointForm {
    fn from(model: &pickup_point::Model) -> Self {
        Self {
            code: Some(model.code.clone()),
            name: Some(model.name.clone()),
            address: model.address.clone(),
            city: model.city.clone(),
            contact_person: model.contact_person.clone(),
            phone: model.phone.clone(),
            trade_supplier_id: model.trade_supplier_id,
            is_active: Some(model.is_active),
        }
    }
}

impl TryFrom<PickupPointForm> for PickupPointFields {
    type Error = RecordError;

    fn try_from(form: PickupPointForm) -> Result<Self, Self::Error> {
        Ok(PickupPointFields {
            code: required("code", form.code)?,
            name: required("name", form.name)?,
            address: optional_text(form.address),
            city: optional_text(form.city),
            contact_person: optional_text(form.contact_person),
            phone: optional_text(form.phone),
            trade_supplier_id: form.trade_supplier_id,
            is_active: form.is_active.unwrap_or(true),
        })
    }
}

impl From<GridPage<PickupPointRow>> for PickupPointGridResponse {
    fn from(page: GridPage<PickupPointRow>) -> Self {
        Self {
            draw: page.draw,
            records_total: page.records_total,
            records_filtered: page.records_filtered,
            data: page.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_code_is_rejected() {
        let form = PickupPointForm {
            code: Some("   ".to_string()),
            name: Some("North depot".to_string()),
            ..Default::default()
        };

        match PickupPointFields::try_from(form) {
            Err(RecordError::Validation { field, .. }) => assert_eq!(field, "code"),
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_form_converts() {
        let form = PickupPointForm {
            code: Some("PP-1".to_string()),
            name: Some("North depot".to_string()),
            city: Some(" Leeds ".to_string()),
            trade_supplier_id: Some(3),
            is_active: Some(false),
            ..Default::default()
        };

        let fields = PickupPointFields::try_from(form).unwrap();

        assert_eq!(fields.code, "PP-1");
        assert_eq!(fields.city.as_deref(), Some("Leeds"));
        assert_eq!(fields.trade_supplier_id, Some(3));
        assert!(!fields.is_active);
    }
}
