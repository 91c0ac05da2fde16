use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::pickup_point::{self, ActiveModel, Entity as PickupPoint};
use crate::types::internal::{PickupPointFields, TenantId};

#[derive(Debug, Default)]
pub struct PickupPointStore;

impl PickupPointStore {
    pub fn new() -> Self {
        Self
    }

    /// Active pickup points owned by `company`, in id order
    pub async fn list_active_for_company(
        &self,
        conn: &impl ConnectionTrait,
        company: &TenantId,
    ) -> Result<Vec<pickup_point::Model>, InternalError> {
        PickupPoint::find()
            .filter(pickup_point::Column::Company.eq(company.as_str()))
            .filter(pickup_point::Column::IsActive.eq(true))
            .order_by_asc(pickup_point::Column::Id)
            .all(conn)
            .await
            .map_err(|e| InternalError::database("list_pickup_points", e))
    }

    /// Look up by primary key; a row owned by another company is reported as absent
    pub async fn find_by_id_for_company(
        &self,
        conn: &impl ConnectionTrait,
        id: i32,
        company: &TenantId,
    ) -> Result<Option<pickup_point::Model>, InternalError> {
        PickupPoint::find_by_id(id)
            .filter(pickup_point::Column::Company.eq(company.as_str()))
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_pickup_point", e))
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        company: &TenantId,
        fields: &PickupPointFields,
    ) -> Result<pickup_point::Model, InternalError> {
        let now = Utc::now().timestamp();

        let new_pickup_point = ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            code: Set(fields.code.clone()),
            name: Set(fields.name.clone()),
            address: Set(fields.address.clone()),
            city: Set(fields.city.clone()),
            contact_person: Set(fields.contact_person.clone()),
            phone: Set(fields.phone.clone()),
            trade_supplier_id: Set(fields.trade_supplier_id),
            is_active: Set(fields.is_active),
            company: Set(company.as_str().to_owned()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_pickup_point
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_pickup_point", e))
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        existing: pickup_point::Model,
        fields: &PickupPointFields,
    ) -> Result<pickup_point::Model, InternalError> {
        let mut active: ActiveModel = existing.into();
        active.code = Set(fields.code.clone());
        active.name = Set(fields.name.clone());
        active.address = Set(fields.address.clone());
        active.city = Set(fields.city.clone());
        active.contact_person = Set(fields.contact_person.clone());
        active.phone = Set(fields.phone.clone());
        active.trade_supplier_id = Set(fields.trade_supplier_id);
        active.is_active = Set(fields.is_active);
        active.updated_at = Set(Utc::now().timestamp());

        active
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_pickup_point", e))
    }
}
