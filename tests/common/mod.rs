// Common test utilities for integration tests
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use masterfile_backend::app_data::AppData;
use masterfile_backend::grid::DEFAULT_MAX_PAGE_LENGTH;
use masterfile_backend::providers::TokenProvider;
use masterfile_backend::types::internal::context::RequestContext;
use masterfile_backend::types::internal::{
    CancelSignal, Claims, EmployeeFields, PickupPointFields, TenantId,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

pub const TEST_JWT_SECRET: &str = "integration-secret-key-at-least-32-chars";

/// Creates an in-memory database with migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Fully wired AppData whose writes observe `shutdown`
pub async fn setup_app_data(shutdown: CancelSignal) -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::new(
        db,
        Arc::new(TokenProvider::new(TEST_JWT_SECRET.to_string())),
        DEFAULT_MAX_PAGE_LENGTH,
        shutdown,
    ))
}

pub fn claims(sub: &str, given_name: &str, company: Option<&str>) -> Claims {
    let now = Utc::now();
    Claims {
        sub: sub.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
        name: None,
        given_name: Some(given_name.to_string()),
        company: company.map(str::to_string),
    }
}

/// Signed bearer token for a user of `company`
pub fn bearer_token(app_data: &AppData, company: Option<&str>) -> String {
    app_data
        .token_provider
        .generate_jwt(&claims("user-1", "Jane", company))
        .expect("Failed to sign test token")
}

pub fn context(given_name: &str, company: Option<&str>) -> RequestContext {
    RequestContext::new()
        .with_auth(claims("user-1", given_name, company))
        .with_actor_id("user-1")
}

pub fn tenant(company: &str) -> TenantId {
    TenantId::parse(company).expect("test tenant must not be blank")
}

pub fn employee_fields(employee_number: &str, last_name: &str) -> EmployeeFields {
    EmployeeFields {
        employee_number: employee_number.to_string(),
        first_name: "Sam".to_string(),
        last_name: last_name.to_string(),
        email: None,
        phone: None,
        job_title: None,
        department: Some("Logistics".to_string()),
        hire_date: None,
        monthly_salary: None,
        is_active: true,
    }
}

pub fn pickup_point_fields(code: &str, trade_supplier_id: Option<i32>) -> PickupPointFields {
    PickupPointFields {
        code: code.to_string(),
        name: format!("Pickup {}", code),
        address: None,
        city: Some("Hull".to_string()),
        contact_person: None,
        phone: None,
        trade_supplier_id,
        is_active: true,
    }
}
