// Test utilities shared across unit tests
// Only compiled when running tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{Database, DatabaseConnection};

use crate::app_data::AppData;
use crate::grid::DEFAULT_MAX_PAGE_LENGTH;
use crate::providers::TokenProvider;
use crate::types::internal::context::RequestContext;
use crate::types::internal::{CancelSignal, Claims, EmployeeFields, PickupPointFields, TenantId};

pub const TEST_JWT_SECRET: &str = "test-secret-key-minimum-32-characters-long";

/// Creates an in-memory database with all migrations applied
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// Creates a fully wired AppData over a fresh in-memory database
pub async fn setup_test_app_data() -> Arc<AppData> {
    let db = setup_test_db().await;
    Arc::new(AppData::new(
        db,
        Arc::new(test_token_provider()),
        DEFAULT_MAX_PAGE_LENGTH,
        CancelSignal::none(),
    ))
}

pub fn test_token_provider() -> TokenProvider {
    TokenProvider::new(TEST_JWT_SECRET.to_string())
}

/// Claims valid for one hour, with an optional Company claim
pub fn test_claims(sub: &str, company: Option<&str>) -> Claims {
    let now = Utc::now();
    Claims {
        sub: sub.to_string(),
        exp: (now + Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
        name: None,
        given_name: None,
        company: company.map(str::to_string),
    }
}

/// Authenticated context for `company`, with a given name for audit display
pub fn test_context(company: Option<&str>) -> RequestContext {
    let mut claims = test_claims("user-1", company);
    claims.given_name = Some("Jane".to_string());
    RequestContext::new().with_auth(claims).with_actor_id("user-1")
}

pub fn test_tenant(company: &str) -> TenantId {
    TenantId::parse(company).expect("test tenant must not be blank")
}

pub fn employee_fields(employee_number: &str) -> EmployeeFields {
    EmployeeFields {
        employee_number: employee_number.to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: Some("jane.doe@acme.test".to_string()),
        phone: None,
        job_title: Some("Clerk".to_string()),
        department: Some("Accounts".to_string()),
        hire_date: None,
        monthly_salary: Some(3500.0),
        is_active: true,
    }
}

pub fn pickup_point_fields(code: &str) -> PickupPointFields {
    PickupPointFields {
        code: code.to_string(),
        name: format!("Depot {}", code),
        address: Some("1 Dock Road".to_string()),
        city: Some("Leeds".to_string()),
        contact_person: None,
        phone: None,
        trade_supplier_id: None,
        is_active: true,
    }
}
