use thiserror::Error;

pub mod audit;
pub mod database;
pub mod grid;
pub mod record;
pub mod tenant;
pub mod token;

pub use audit::AuditError;
pub use database::DatabaseError;
pub use grid::GridError;
pub use record::RecordError;
pub use tenant::TenantError;
pub use token::TokenError;

/// Internal error type for store, coordinator and grid operations
///
/// Infrastructure errors (Database, Parse) are shared by every layer; domain errors
/// are grouped per concern. Not exposed via API - endpoints must convert through
/// `MasterFileError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("Parse error: failed to parse {value_type}: {message}")]
    Parse {
        value_type: String,
        message: String,
    },

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Tenant(#[from] TenantError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Token(#[from] TokenError),

    /// The caller's cancellation signal fired before the write committed
    #[error("Operation cancelled: {operation}")]
    Cancelled { operation: String },
}

impl InternalError {
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    pub fn parse(value_type: impl Into<String>, message: impl Into<String>) -> InternalError {
        InternalError::Parse {
            value_type: value_type.into(),
            message: message.into(),
        }
    }

    pub fn cancelled(operation: impl Into<String>) -> InternalError {
        InternalError::Cancelled {
            operation: operation.into(),
        }
    }
}
