use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::errors::InternalError;
use crate::errors::internal::AuditError;
use crate::stores::{AuditStore, NewAuditEntry};
use crate::types::internal::TenantId;

/// One audit record as produced by a write workflow
#[derive(Debug, Clone)]
pub struct AuditRecord<'a> {
    pub actor: &'a str,
    pub description: &'a str,
    pub entity_type: &'a str,
    pub tenant: &'a TenantId,
    pub request_id: Option<String>,
}

/// Persists "who did what to which record type" entries
///
/// The recorder writes on whatever connection it is handed. Inside a write
/// transaction the entry therefore commits or rolls back with the entity change.
pub struct AuditRecorder {
    audit_store: Arc<AuditStore>,
}

impl AuditRecorder {
    pub fn new(audit_store: Arc<AuditStore>) -> Self {
        Self { audit_store }
    }

    /// Append one audit entry
    ///
    /// # Errors
    ///
    /// * `AuditError::MissingField` - actor, description or entity type is blank
    /// * `AuditError::LogWriteFailed` - the store rejected the write
    pub async fn record(
        &self,
        conn: &impl ConnectionTrait,
        record: AuditRecord<'_>,
    ) -> Result<(), InternalError> {
        let actor = required("actor", record.actor)?;
        let description = required("description", record.description)?;
        let entity_type = required("entity_type", record.entity_type)?;

        let entry = self
            .audit_store
            .write_entry(
                conn,
                NewAuditEntry {
                    actor: actor.to_owned(),
                    description: description.to_owned(),
                    entity_type: entity_type.to_owned(),
                    company: record.tenant.clone(),
                    request_id: record.request_id,
                },
            )
            .await?;

        tracing::debug!(
            audit_id = entry.id,
            entity_type = %entry.entity_type,
            company = %entry.company,
            "Audit entry recorded: {}",
            entry.description
        );

        Ok(())
    }
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, InternalError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuditError::MissingField(field).into());
    }
    Ok(value)
}
