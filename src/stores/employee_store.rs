use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::employee::{self, ActiveModel, Entity as Employee};
use crate::types::internal::{EmployeeFields, TenantId};

#[derive(Debug, Default)]
pub struct EmployeeStore;

impl EmployeeStore {
    pub fn new() -> Self {
        Self
    }

    /// Active employees across every company, in id order
    pub async fn list_active(
        &self,
        conn: &impl ConnectionTrait,
    ) -> Result<Vec<employee::Model>, InternalError> {
        Employee::find()
            .filter(employee::Column::IsActive.eq(true))
            .order_by_asc(employee::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_active_employees", e))
    }

    pub async fn find_by_id(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
    ) -> Result<Option<employee::Model>, InternalError> {
        Employee::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_employee", e))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        company: &TenantId,
        fields: &EmployeeFields,
    ) -> Result<employee::Model, InternalError> {
        let now = Utc::now().timestamp();

        let new_employee = ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            employee_number: Set(fields.employee_number.clone()),
            first_name: Set(fields.first_name.clone()),
            last_name: Set(fields.last_name.clone()),
            email: Set(fields.email.clone()),
            phone: Set(fields.phone.clone()),
            job_title: Set(fields.job_title.clone()),
            department: Set(fields.department.clone()),
            hire_date: Set(fields.hire_date),
            monthly_salary: Set(fields.monthly_salary),
            is_active: Set(fields.is_active),
            company: Set(company.as_str().to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_employee
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_employee", e))
    }

    /// Overwrite the editable field list on an existing employee
    ///
    /// `company` and `created_at` are never touched by an edit.
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        existing: employee::Model,
        fields: &EmployeeFields,
    ) -> Result<employee::Model, InternalError> {
        let mut active: ActiveModel = existing.into();
        active.employee_number = Set(fields.employee_number.clone());
        active.first_name = Set(fields.first_name.clone());
        active.last_name = Set(fields.last_name.clone());
        active.email = Set(fields.email.clone());
        active.phone = Set(fields.phone.clone());
        active.job_title = Set(fields.job_title.clone());
        active.department = Set(fields.department.clone());
        active.hire_date = Set(fields.hire_date);
        active.monthly_salary = Set(fields.monthly_salary);
        active.is_active = Set(fields.is_active);
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_employee", e))
    }
}
