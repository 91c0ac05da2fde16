// Coordinators layer - Workflow orchestration
//
// Coordinators compose stores, the tenant resolver and the write coordinator into
// the workflows behind each API endpoint.

pub mod audit_trail_coordinator;
pub mod employee_coordinator;
pub mod pickup_point_coordinator;
pub mod write_coordinator;

pub use audit_trail_coordinator::AuditTrailCoordinator;
pub use employee_coordinator::EmployeeCoordinator;
pub use pickup_point_coordinator::PickupPointCoordinator;
pub use write_coordinator::{Mutation, WriteCoordinator, WriteScope};
