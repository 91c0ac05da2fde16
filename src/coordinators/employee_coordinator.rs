use std::cmp::Ordering;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction};

use crate::app_data::AppData;
use crate::coordinators::write_coordinator::{Mutation, WriteCoordinator, WriteScope};
use crate::errors::InternalError;
use crate::errors::internal::RecordError;
use crate::grid::{GridEngine, GridPage, GridRecord, GridRequest, SortColumn, SortColumns};
use crate::providers::TenantResolver;
use crate::stores::EmployeeStore;
use crate::types::MutationResult;
use crate::types::db::employee;
use crate::types::dto::employee::EmployeeRow;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{ActionOutcome, AuditIntent, CancelSignal, EmployeeFields, TenantId};

const ENTITY: &str = "Employee";

impl GridRecord for employee::Model {
    fn search_values(&self) -> Vec<Option<String>> {
        vec![
            Some(self.employee_number.clone()),
            Some(self.first_name.clone()),
            Some(self.last_name.clone()),
            self.email.clone(),
            self.phone.clone(),
            self.job_title.clone(),
            self.department.clone(),
            self.hire_date.map(|d| d.format("%Y-%m-%d").to_string()),
        ]
    }
}

/// Sortable employee grid columns
pub fn employee_columns() -> Result<SortColumns<employee::Model>, InternalError> {
    type M = employee::Model;
    let columns = SortColumns::new(
        ENTITY,
        vec![
            SortColumn::new("Id", |a: &M, b: &M| a.id.cmp(&b.id)),
            SortColumn::new("EmployeeNumber", |a: &M, b: &M| a.employee_number.cmp(&b.employee_number)),
            SortColumn::new("FirstName", |a: &M, b: &M| a.first_name.cmp(&b.first_name)),
            SortColumn::new("LastName", |a: &M, b: &M| a.last_name.cmp(&b.last_name)),
            SortColumn::new("Email", |a: &M, b: &M| a.email.cmp(&b.email)),
            SortColumn::new("JobTitle", |a: &M, b: &M| a.job_title.cmp(&b.job_title)),
            SortColumn::new("Department", |a: &M, b: &M| a.department.cmp(&b.department)),
            SortColumn::new("HireDate", |a: &M, b: &M| a.hire_date.cmp(&b.hire_date)),
            SortColumn::new("MonthlySalary", |a: &M, b: &M| {
                a.monthly_salary
                    .partial_cmp(&b.monthly_salary)
                    .unwrap_or(Ordering::Equal)
            }),
        ],
    )?;
    Ok(columns)
}

struct CreateEmployee {
    store: Arc<EmployeeStore>,
    tenant: TenantId,
    fields: EmployeeFields,
}

#[async_trait]
impl Mutation for CreateEmployee {
    type Output = employee::Model;

    fn operation(&self) -> &'static str {
        "create_employee"
    }

    async fn apply(self, txn: &DatabaseTransaction) -> MutationResult<employee::Model> {
        let created = self.store.insert(txn, &self.tenant, &self.fields).await?;
        let description = format!("Created employee {}", created.employee_number);
        Ok(ActionOutcome::new(created, AuditIntent::new(ENTITY, description)))
    }
}

struct EditEmployee {
    store: Arc<EmployeeStore>,
    existing: employee::Model,
    fields: EmployeeFields,
}

#[async_trait]
impl Mutation for EditEmployee {
    type Output = employee::Model;

    fn operation(&self) -> &'static str {
        "edit_employee"
    }

    async fn apply(self, txn: &DatabaseTransaction) -> MutationResult<employee::Model> {
        let previous_number = self.existing.employee_number.clone();
        let updated = self.store.update(txn, self.existing, &self.fields).await?;
        let description = format!(
            "Edited employee {} => {}",
            previous_number, updated.employee_number
        );
        Ok(ActionOutcome::new(updated, AuditIntent::new(ENTITY, description)))
    }
}

/// Employee list, grid, create and edit workflows
///
/// Listing and lookup are not tenant-scoped; every active employee is visible.
/// Writes still require a tenant so the audit entry has an owner.
pub struct EmployeeCoordinator {
    db: DatabaseConnection,
    employee_store: Arc<EmployeeStore>,
    tenant_resolver: Arc<dyn TenantResolver>,
    write_coordinator: Arc<WriteCoordinator>,
    grid: GridEngine<employee::Model>,
}

impl EmployeeCoordinator {
    /// Create EmployeeCoordinator from AppData
    ///
    /// # Errors
    ///
    /// Returns `InternalError::Grid` if the column table is invalid
    pub fn new(app_data: Arc<AppData>) -> Result<Self, InternalError> {
        Ok(Self {
            db: app_data.db.clone(),
            employee_store: app_data.employee_store.clone(),
            tenant_resolver: app_data.tenant_resolver.clone(),
            write_coordinator: app_data.write_coordinator.clone(),
            grid: GridEngine::new(employee_columns()?, app_data.grid_max_page_length),
        })
    }

    pub async fn list(&self) -> Result<Vec<employee::Model>, InternalError> {
        self.employee_store.list_active(&self.db).await
    }

    pub async fn grid(&self, request: &GridRequest) -> Result<GridPage<EmployeeRow>, InternalError> {
        let employees = self.employee_store.list_active(&self.db).await?;
        Ok(self.grid.query(employees, request, |e| EmployeeRow::from(e)))
    }

    /// # Errors
    ///
    /// `RecordError::NotFound` when no employee has this id
    pub async fn find(&self, id: i32) -> Result<employee::Model, InternalError> {
        self.employee_store
            .find_by_id(&self.db, id)
            .await?
            .ok_or_else(|| RecordError::not_found(ENTITY, id).into())
    }

    /// Insert an employee for the caller's tenant and audit it
    ///
    /// The tenant is resolved before any transaction is opened.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        cancel: &CancelSignal,
        fields: EmployeeFields,
    ) -> Result<employee::Model, InternalError> {
        let scope = WriteScope::resolve(ctx, self.tenant_resolver.as_ref())?;

        let created = self
            .write_coordinator
            .run_transactional(
                &scope,
                cancel,
                CreateEmployee {
                    store: self.employee_store.clone(),
                    tenant: scope.tenant.clone(),
                    fields,
                },
            )
            .await?;

        tracing::info!(
            employee_id = created.id,
            company = %scope.tenant,
            "Employee {} created by {}",
            created.employee_number,
            scope.actor
        );

        Ok(created)
    }

    /// Overwrite an employee's editable fields and audit the change
    ///
    /// The target is looked up before the tenant is resolved and before any
    /// transaction is opened, so a missing id is not-found for every caller and
    /// produces no audit entry.
    pub async fn edit(
        &self,
        ctx: &RequestContext,
        cancel: &CancelSignal,
        id: i32,
        fields: EmployeeFields,
    ) -> Result<employee::Model, InternalError> {
        let existing = self.find(id).await?;
        let scope = WriteScope::resolve(ctx, self.tenant_resolver.as_ref())?;

        let updated = self
            .write_coordinator
            .run_transactional(
                &scope,
                cancel,
                EditEmployee {
                    store: self.employee_store.clone(),
                    existing,
                    fields,
                },
            )
            .await?;

        tracing::info!(
            employee_id = updated.id,
            company = %scope.tenant,
            "Employee {} edited by {}",
            updated.employee_number,
            scope.actor
        );

        Ok(updated)
    }
}
