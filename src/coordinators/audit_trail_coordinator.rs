use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::app_data::AppData;
use crate::errors::InternalError;
use crate::errors::internal::TenantError;
use crate::grid::{GridEngine, GridPage, GridRecord, GridRequest, SortColumn, SortColumns};
use crate::providers::TenantResolver;
use crate::stores::AuditStore;
use crate::types::db::audit_entry;
use crate::types::dto::audit_trail::AuditTrailRow;
use crate::types::internal::context::RequestContext;

impl GridRecord for audit_entry::Model {
    fn search_values(&self) -> Vec<Option<String>> {
        vec![
            Some(self.timestamp.clone()),
            Some(self.actor.clone()),
            Some(self.description.clone()),
            Some(self.entity_type.clone()),
        ]
    }
}

pub fn audit_trail_columns() -> Result<SortColumns<audit_entry::Model>, InternalError> {
    type M = audit_entry::Model;
    let columns = SortColumns::new(
        "AuditTrail",
        vec![
            SortColumn::new("Id", |a: &M, b: &M| a.id.cmp(&b.id)),
            SortColumn::new("Timestamp", |a: &M, b: &M| a.timestamp.cmp(&b.timestamp)),
            SortColumn::new("Actor", |a: &M, b: &M| a.actor.cmp(&b.actor)),
            SortColumn::new("Description", |a: &M, b: &M| a.description.cmp(&b.description)),
            SortColumn::new("EntityType", |a: &M, b: &M| a.entity_type.cmp(&b.entity_type)),
        ],
    )?;
    Ok(columns)
}

/// Read-only grid over the caller's tenant audit trail, newest first
pub struct AuditTrailCoordinator {
    db: DatabaseConnection,
    audit_store: Arc<AuditStore>,
    tenant_resolver: Arc<dyn TenantResolver>,
    grid: GridEngine<audit_entry::Model>,
}

impl AuditTrailCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Result<Self, InternalError> {
        Ok(Self {
            db: app_data.db.clone(),
            audit_store: app_data.audit_store.clone(),
            tenant_resolver: app_data.tenant_resolver.clone(),
            grid: GridEngine::new(audit_trail_columns()?, app_data.grid_max_page_length),
        })
    }

    pub async fn grid(
        &self,
        ctx: &RequestContext,
        request: &GridRequest,
    ) -> Result<GridPage<AuditTrailRow>, InternalError> {
        let tenant = self
            .tenant_resolver
            .resolve_tenant(ctx)
            .ok_or(TenantError::MissingTenantClaim)?;

        let entries = self.audit_store.list_for_company(&self.db, &tenant).await?;
        Ok(self.grid.query(entries, request, |e| AuditTrailRow::from(e)))
    }
}
