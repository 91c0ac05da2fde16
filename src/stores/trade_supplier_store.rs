use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::trade_supplier::{self, ActiveModel, Entity as TradeSupplier};
use crate::types::internal::TenantId;

/// Read access to the supplier reference list behind the pickup point dropdown
#[derive(Debug, Default)]
pub struct TradeSupplierStore;

impl TradeSupplierStore {
    pub fn new() -> Self {
        Self
    }

    pub async fn list_active_for_company(
        &self,
        conn: &impl ConnectionTrait,
        company: &TenantId,
    ) -> Result<Vec<trade_supplier::Model>, InternalError> {
        TradeSupplier::find()
            .filter(trade_supplier::Column::Company.eq(company.as_str()))
            .filter(trade_supplier::Column::IsActive.eq(true))
            .order_by_asc(trade_supplier::Column::Name)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_trade_suppliers", e))
    }

    pub async fn find_active_for_company(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        company: &TenantId,
    ) -> Result<Option<trade_supplier::Model>, InternalError> {
        TradeSupplier::find_by_id(id)
            .filter(trade_supplier::Column::Company.eq(company.as_str()))
            .filter(trade_supplier::Column::IsActive.eq(true))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_trade_supplier", e))
    }

    /// Suppliers are maintained by the purchasing module; this is used for seeding
    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        company: &TenantId,
        name: &str,
    ) -> Result<trade_supplier::Model, InternalError> {
        let supplier = ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            name: Set(name.to_owned()),
            is_active: Set(true),
            company: Set(company.as_str().to_owned()),
        };

        supplier
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_trade_supplier", e))
    }
}
