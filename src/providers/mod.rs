// Providers layer - Capabilities injected into coordinators and the API layer
//
// Providers wrap the identity source: token validation and the tenant/display-name
// lookups derived from validated claims.

pub mod tenant_provider;
pub mod token_provider;

// Re-export providers for clean imports
pub use tenant_provider::{ClaimsTenantResolver, TenantResolver};
pub use token_provider::TokenProvider;
