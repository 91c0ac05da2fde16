pub mod action_outcome;
pub mod audit_intent;
pub mod auth;
pub mod cancel;
pub mod context;
pub mod records;
pub mod tenant;

pub use action_outcome::ActionOutcome;
pub use audit_intent::AuditIntent;
pub use auth::Claims;
pub use cancel::{CancelHandle, CancelSignal};
pub use records::{EmployeeFields, PickupPointFields};
pub use tenant::TenantId;
