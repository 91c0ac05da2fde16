// Stores layer - Data access and repository pattern
//
// Stores are stateless: every method takes the connection to run on, so the same
// call works against the pool or inside a write transaction.
pub mod audit_store;
pub mod employee_store;
pub mod pickup_point_store;
pub mod trade_supplier_store;

pub use audit_store::{AuditStore, NewAuditEntry};
pub use employee_store::EmployeeStore;
pub use pickup_point_store::PickupPointStore;
pub use trade_supplier_store::TradeSupplierStore;
