// API layer - HTTP endpoints
pub mod audit_trail;
pub mod employee;
pub mod health;
pub mod helpers;
pub mod pickup_point;

use std::sync::Arc;

use poem::middleware::{Csrf, Tracing};
use poem::{Endpoint, EndpointExt, Route};
use poem_openapi::{OpenApiService, Tags};

pub use audit_trail::AuditTrailApi;
pub use employee::EmployeeApi;
pub use health::HealthApi;
pub use pickup_point::PickupPointApi;

use crate::app_data::AppData;
use crate::coordinators::{AuditTrailCoordinator, EmployeeCoordinator, PickupPointCoordinator};
use crate::errors::InternalError;

/// API tags for grouping endpoints in Swagger UI
#[derive(Tags)]
pub enum ApiTags {
    /// Health check endpoints
    Health,
    /// Employee master file
    Employee,
    /// Tenant-scoped pickup points
    PickupPoint,
    /// Per-tenant audit trail
    AuditTrail,
}

/// Compose every API and the Swagger UI into one endpoint
///
/// Coordinators are created here once and shared by the APIs. Anti-forgery
/// cookies are issued by the `Csrf` middleware and checked on every POST
/// that mutates data.
pub fn build_app(app_data: Arc<AppData>) -> Result<impl Endpoint, InternalError> {
    let employee_coordinator = Arc::new(EmployeeCoordinator::new(app_data.clone())?);
    let pickup_point_coordinator = Arc::new(PickupPointCoordinator::new(app_data.clone())?);
    let audit_trail_coordinator = Arc::new(AuditTrailCoordinator::new(app_data.clone())?);

    let employee_api = EmployeeApi::new(
        employee_coordinator,
        app_data.token_provider.clone(),
        app_data.shutdown.clone(),
    );
    let pickup_point_api = PickupPointApi::new(
        pickup_point_coordinator,
        app_data.token_provider.clone(),
        app_data.shutdown.clone(),
    );
    let audit_trail_api = AuditTrailApi::new(audit_trail_coordinator, app_data.token_provider.clone());

    let api_service = OpenApiService::new(
        (HealthApi, employee_api, pickup_point_api, audit_trail_api),
        "Master File API",
        "1.0.0",
    );
    let ui = api_service.swagger_ui();

    Ok(Route::new()
        .nest("/swagger", ui)
        .nest("/", api_service)
        .with(Csrf::new())
        .with(Tracing))
}
