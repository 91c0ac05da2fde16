use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::audit::AuditRecorder;
use crate::config::BootstrapSettings;
use crate::coordinators::WriteCoordinator;
use crate::providers::{ClaimsTenantResolver, TenantResolver, TokenProvider};
use crate::stores::{AuditStore, EmployeeStore, PickupPointStore, TradeSupplierStore};
use crate::types::internal::CancelSignal;

/// Centralized application data following the main-owned stores pattern
///
/// All dependencies are created once in main.rs and shared across coordinators.
///
/// ```text
/// main.rs
///   ↓
/// AppData::init()
///   ↓ creates once
///   ├─ db (DatabaseConnection)
///   ├─ token_provider, tenant_resolver
///   ├─ audit_store, employee_store, pickup_point_store, trade_supplier_store
///   ├─ audit_recorder (Arc<AuditRecorder>)
///   └─ write_coordinator (Arc<WriteCoordinator>)
///   ↓ wrapped in Arc<AppData>
///   ↓ passed to coordinators
///   ├─ EmployeeCoordinator::new(app_data)
///   ├─ PickupPointCoordinator::new(app_data)
///   └─ AuditTrailCoordinator::new(app_data)
/// ```
pub struct AppData {
    pub db: DatabaseConnection,
    pub grid_max_page_length: usize,
    pub token_provider: Arc<TokenProvider>,
    pub tenant_resolver: Arc<dyn TenantResolver>,
    pub audit_store: Arc<AuditStore>,
    pub employee_store: Arc<EmployeeStore>,
    pub pickup_point_store: Arc<PickupPointStore>,
    pub trade_supplier_store: Arc<TradeSupplierStore>,
    pub audit_recorder: Arc<AuditRecorder>,
    pub write_coordinator: Arc<WriteCoordinator>,

    /// Fires on server shutdown; in-flight writes roll back
    pub shutdown: CancelSignal,
}

impl AppData {
    /// Initialize all application data
    ///
    /// The database should be connected and migrated before calling this.
    pub fn init(
        db: DatabaseConnection,
        bootstrap_settings: &BootstrapSettings,
        shutdown: CancelSignal,
    ) -> Self {
        tracing::info!("Initializing AppData...");

        let token_provider = Arc::new(TokenProvider::new(
            bootstrap_settings.jwt_secret().to_string(),
        ));

        let app_data = Self::new(
            db,
            token_provider,
            bootstrap_settings.grid_max_page_length(),
            shutdown,
        );

        tracing::info!("AppData initialization complete");

        app_data
    }

    /// Wire stores, recorder and write coordinator around an existing connection
    pub fn new(
        db: DatabaseConnection,
        token_provider: Arc<TokenProvider>,
        grid_max_page_length: usize,
        shutdown: CancelSignal,
    ) -> Self {
        let tenant_resolver: Arc<dyn TenantResolver> = Arc::new(ClaimsTenantResolver);

        let audit_store = Arc::new(AuditStore::new());
        let employee_store = Arc::new(EmployeeStore::new());
        let pickup_point_store = Arc::new(PickupPointStore::new());
        let trade_supplier_store = Arc::new(TradeSupplierStore::new());

        let audit_recorder = Arc::new(AuditRecorder::new(audit_store.clone()));
        let write_coordinator = Arc::new(WriteCoordinator::new(
            db.clone(),
            audit_recorder.clone(),
        ));

        Self {
            db,
            grid_max_page_length,
            token_provider,
            tenant_resolver,
            audit_store,
            employee_store,
            pickup_point_store,
            trade_supplier_store,
            audit_recorder,
            write_coordinator,
            shutdown,
        }
    }
}
