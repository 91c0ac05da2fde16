use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Failed to write audit entry: {0}")]
    LogWriteFailed(String),

    #[error("Audit entry is missing required field: {0}")]
    MissingField(&'static str),
}
