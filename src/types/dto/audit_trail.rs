use poem_openapi::Object;

use crate::grid::GridPage;
use crate::types::db::audit_entry;

/// One row of the audit trail grid
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct AuditTrailRow {
    pub id: i64,
    pub timestamp: String,
    pub actor: String,
    pub description: String,
    pub entity_type: String,
}

#[derive(Object, Debug, Clone)]
#[oai(rename_all = "camelCase")]
pub struct AuditTrailGridResponse {
    pub draw: i64,
    pub records_total: u64,
    pub records_filtered: u64,
    pub data: Vec<AuditTrailRow>,
}

impl From<&audit_entry::Model> for AuditTrailRow {
    fn from(model: &audit_entry::Model) -> Self {
        Self {
            id: model.id,
            timestamp: model.timestamp.clone(),
            actor: model.actor.clone(),
            description: model.description.clone(),
            entity_type: model.entity_type.clone(),
        }
    }
}

impl From<GridPage<AuditTrailRow>> for AuditTrailGridResponse {
    fn from(page: GridPage<AuditTrailRow>) -> Self {
        Self {
            draw: page.draw,
            records_total: page.records_total,
            records_filtered: page.records_filtered,
            data: page.data,
        }
    }
}
