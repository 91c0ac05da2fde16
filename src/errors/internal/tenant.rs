use thiserror::Error;

#[derive(Error, Debug)]
pub enum TenantError {
    /// No principal, or the principal carries no usable Company claim
    #[error("Company claim is missing from the request identity")]
    MissingTenantClaim,
}
