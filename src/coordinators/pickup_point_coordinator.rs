use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::app_data::AppData;
use crate::coordinators::write_coordinator::{Mutation, WriteCoordinator, WriteScope};
use crate::errors::InternalError;
use crate::errors::internal::{RecordError, TenantError};
use crate::grid::{GridEngine, GridPage, GridRecord, GridRequest, SortColumn, SortColumns};
use crate::providers::TenantResolver;
use crate::stores::{PickupPointStore, TradeSupplierStore};
use crate::types::MutationResult;
use crate::types::db::pickup_point;
use crate::types::dto::common::SelectOption;
use crate::types::dto::pickup_point::PickupPointRow;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{ActionOutcome, AuditIntent, CancelSignal, PickupPointFields, TenantId};

const ENTITY: &str = "PickupPoint";

impl GridRecord for pickup_point::Model {
    fn search_values(&self) -> Vec<Option<String>> {
        vec![
            Some(self.code.clone()),
            Some(self.name.clone()),
            self.address.clone(),
            self.city.clone(),
            self.contact_person.clone(),
            self.phone.clone(),
        ]
    }
}

/// Sortable pickup point grid columns
pub fn pickup_point_columns() -> Result<SortColumns<pickup_point::Model>, InternalError> {
    type M = pickup_point::Model;
    let columns = SortColumns::new(
        ENTITY,
        vec![
            SortColumn::new("Id", |a: &M, b: &M| a.id.cmp(&b.id)),
            SortColumn::new("Code", |a: &M, b: &M| a.code.cmp(&b.code)),
            SortColumn::new("Name", |a: &M, b: &M| a.name.cmp(&b.name)),
            SortColumn::new("Address", |a: &M, b: &M| a.address.cmp(&b.address)),
            SortColumn::new("City", |a: &M, b: &M| a.city.cmp(&b.city)),
            SortColumn::new("ContactPerson", |a: &M, b: &M| a.contact_person.cmp(&b.contact_person)),
            SortColumn::new("Phone", |a: &M, b: &M| a.phone.cmp(&b.phone)),
        ],
    )?;
    Ok(columns)
}

struct CreatePickupPoint {
    store: Arc<PickupPointStore>,
    tenant: TenantId,
    fields: PickupPointFields,
}

#[async_trait]
impl Mutation for CreatePickupPoint {
    type Output = pickup_point::Model;

    fn operation(&self) -> &'static str {
        "create_pickup_point"
    }

    async fn apply(self, txn: &DatabaseTransaction) -> MutationResult<pickup_point::Model> {
        let created = self.store.insert(txn, &self.tenant, &self.fields).await?;
        let description = format!("Created pickup point {}", created.code);
        Ok(ActionOutcome::new(created, AuditIntent::new(ENTITY, description)))
    }
}

struct EditPickupPoint {
    store: Arc<PickupPointStore>,
    existing: pickup_point::Model,
    fields: PickupPointFields,
}

#[async_trait]
impl Mutation for EditPickupPoint {
    type Output = pickup_point::Model;

    fn operation(&self) -> &'static str {
        "edit_pickup_point"
    }

    async fn apply(self, txn: &DatabaseTransaction) -> MutationResult<pickup_point::Model> {
        let previous_code = self.existing.code.clone();
        let updated = self.store.update(txn, self.existing, &self.fields).await?;
        let description = format!("Edited pickup point {} => {}", previous_code, updated.code);
        Ok(ActionOutcome::new(updated, AuditIntent::new(ENTITY, description)))
    }
}

/// Tenant-scoped pickup point workflows
///
/// Every operation requires a resolvable tenant. Records of other tenants are
/// reported as not found.
pub struct PickupPointCoordinator {
    db: DatabaseConnection,
    pickup_point_store: Arc<PickupPointStore>,
    trade_supplier_store: Arc<TradeSupplierStore>,
    tenant_resolver: Arc<dyn TenantResolver>,
    write_coordinator: Arc<WriteCoordinator>,
    grid: GridEngine<pickup_point::Model>,
}

impl PickupPointCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Result<Self, InternalError> {
        Ok(Self {
            db: app_data.db.clone(),
            pickup_point_store: app_data.pickup_point_store.clone(),
            trade_supplier_store: app_data.trade_supplier_store.clone(),
            tenant_resolver: app_data.tenant_resolver.clone(),
            write_coordinator: app_data.write_coordinator.clone(),
            grid: GridEngine::new(pickup_point_columns()?, app_data.grid_max_page_length),
        })
    }

    fn tenant(&self, ctx: &RequestContext) -> Result<TenantId, InternalError> {
        self.tenant_resolver
            .resolve_tenant(ctx)
            .ok_or_else(|| TenantError::MissingTenantClaim.into())
    }

    pub async fn list(&self, ctx: &RequestContext) -> Result<Vec<pickup_point::Model>, InternalError> {
        let tenant = self.tenant(ctx)?;
        self.pickup_point_store
            .list_active_for_company(&self.db, &tenant)
            .await
    }

    pub async fn grid(
        &self,
        ctx: &RequestContext,
        request: &GridRequest,
    ) -> Result<GridPage<PickupPointRow>, InternalError> {
        let pickup_points = self.list(ctx).await?;
        Ok(self.grid.query(pickup_points, request, |p| PickupPointRow::from(p)))
    }

    pub async fn find(&self, ctx: &RequestContext, id: i32) -> Result<pickup_point::Model, InternalError> {
        let tenant = self.tenant(ctx)?;
        self.find_for_tenant(&tenant, id).await
    }

    async fn find_for_tenant(&self, tenant: &TenantId, id: i32) -> Result<pickup_point::Model, InternalError> {
        self.pickup_point_store
            .find_by_id_for_company(&self.db, id, tenant)
            .await?
            .ok_or_else(|| RecordError::not_found(ENTITY, id).into())
    }

    /// Dropdown entries for the tenant's active trade suppliers
    pub async fn supplier_options(&self, ctx: &RequestContext) -> Result<Vec<SelectOption>, InternalError> {
        let tenant = self.tenant(ctx)?;
        let suppliers = self
            .trade_supplier_store
            .list_active_for_company(&self.db, &tenant)
            .await?;

        Ok(suppliers
            .into_iter()
            .map(|s| SelectOption {
                value: s.id,
                text: s.name,
            })
            .collect())
    }

    /// A selected supplier must be one of the tenant's active suppliers
    async fn check_supplier(&self, tenant: &TenantId, fields: &PickupPointFields) -> Result<(), InternalError> {
        let Some(supplier_id) = fields.trade_supplier_id else {
            return Ok(());
        };

        match self
            .trade_supplier_store
            .find_active_for_company(&self.db, supplier_id, tenant)
            .await?
        {
            Some(_) => Ok(()),
            None => Err(RecordError::validation(
                "tradeSupplierId",
                format!("unknown trade supplier {}", supplier_id),
            )
            .into()),
        }
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        cancel: &CancelSignal,
        fields: PickupPointFields,
    ) -> Result<pickup_point::Model, InternalError> {
        let scope = WriteScope::resolve(ctx, self.tenant_resolver.as_ref())?;
        self.check_supplier(&scope.tenant, &fields).await?;

        let created = self
            .write_coordinator
            .run_transactional(
                &scope,
                cancel,
                CreatePickupPoint {
                    store: self.pickup_point_store.clone(),
                    tenant: scope.tenant.clone(),
                    fields,
                },
            )
            .await?;

        tracing::info!(
            pickup_point_id = created.id,
            company = %scope.tenant,
            "Pickup point {} created by {}",
            created.code,
            scope.actor
        );

        Ok(created)
    }

    pub async fn edit(
        &self,
        ctx: &RequestContext,
        cancel: &CancelSignal,
        id: i32,
        fields: PickupPointFields,
    ) -> Result<pickup_point::Model, InternalError> {
        let scope = WriteScope::resolve(ctx, self.tenant_resolver.as_ref())?;
        let existing = self.find_for_tenant(&scope.tenant, id).await?;
        self.check_supplier(&scope.tenant, &fields).await?;

        let updated = self
            .write_coordinator
            .run_transactional(
                &scope,
                cancel,
                EditPickupPoint {
                    store: self.pickup_point_store.clone(),
                    existing,
                    fields,
                },
            )
            .await?;

        tracing::info!(
            pickup_point_id = updated.id,
            company = %scope.tenant,
            "Pickup point {} edited by {}",
            updated.code,
            scope.actor
        );

        Ok(updated)
    }
}
