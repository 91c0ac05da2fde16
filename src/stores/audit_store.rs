use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::errors::internal::AuditError;
use crate::types::db::audit_entry::{self, Entity as AuditEntry};
use crate::types::internal::TenantId;

/// Fields of an audit entry prior to insertion
#[derive(Debug, Clone)]
pub struct NewAuditEntry {
    pub actor: String,
    pub description: String,
    pub entity_type: String,
    pub company: TenantId,
    pub request_id: Option<String>,
}

/// Repository for the append-only audit trail
///
/// Entries are never updated or deleted.
#[derive(Debug, Default)]
pub struct AuditStore;

impl AuditStore {
    pub fn new() -> Self {
        Self
    }

    /// Insert one audit entry on the given connection
    ///
    /// # Errors
    ///
    /// Returns `InternalError` if the insert fails
    pub async fn write_entry(
        &self,
        conn: &impl ConnectionTrait,
        entry: NewAuditEntry,
    ) -> Result<audit_entry::Model, InternalError> {
        let model = audit_entry::ActiveModel {
            id: sea_orm::ActiveValue::NotSet, // Let auto-increment handle this
            timestamp: Set(Utc::now().to_rfc3339()),
            actor: Set(entry.actor),
            description: Set(entry.description),
            entity_type: Set(entry.entity_type),
            company: Set(entry.company.as_str().to_owned()),
            request_id: Set(entry.request_id),
        };

        model
            .insert(conn)
            .await
            .map_err(|e| InternalError::from(AuditError::LogWriteFailed(e.to_string())))
    }

    /// All audit entries for a tenant, newest first
    pub async fn list_for_company(
        &self,
        conn: &impl ConnectionTrait,
        company: &TenantId,
    ) -> Result<Vec<audit_entry::Model>, InternalError> {
        AuditEntry::find()
            .filter(audit_entry::Column::Company.eq(company.as_str()))
            .order_by_desc(audit_entry::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_audit_entries", e))
    }
}
