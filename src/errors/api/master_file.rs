use crate::errors::internal::{InternalError, RecordError, TenantError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::fmt;

/// Standardized error response for master-file endpoints
#[derive(Object, Debug)]
pub struct MasterFileErrorResponse {
    /// Error code identifier
    pub error: String,

    /// Human-readable notice shown to the user
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Submitted form, echoed back so the client can redisplay it for correction
    #[oai(skip_serializing_if_is_none)]
    pub form: Option<serde_json::Value>,
}

/// Master-file operation error types
#[derive(ApiResponse, Debug)]
pub enum MasterFileError {
    /// The request carries no resolvable company scope
    #[oai(status = 400)]
    TenantRequired(Json<MasterFileErrorResponse>),

    /// Anti-forgery token missing or invalid
    #[oai(status = 403)]
    AntiForgeryFailed(Json<MasterFileErrorResponse>),

    /// Referenced record does not exist
    #[oai(status = 404)]
    NotFound(Json<MasterFileErrorResponse>),

    /// Submitted form failed validation
    #[oai(status = 422)]
    ValidationFailed(Json<MasterFileErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<MasterFileErrorResponse>),

    /// Request was cancelled before the write committed
    #[oai(status = 503)]
    Cancelled(Json<MasterFileErrorResponse>),
}

impl MasterFileError {
    /// Create a TenantRequired error
    pub fn tenant_required() -> Self {
        MasterFileError::TenantRequired(Json(MasterFileErrorResponse {
            error: "tenant_required".to_string(),
            message: "A Company claim is required for this operation".to_string(),
            status_code: 400,
            form: None,
        }))
    }

    /// Create an AntiForgeryFailed error
    pub fn anti_forgery_failed() -> Self {
        MasterFileError::AntiForgeryFailed(Json(MasterFileErrorResponse {
            error: "anti_forgery_failed".to_string(),
            message: "Anti-forgery token is missing or invalid".to_string(),
            status_code: 403,
            form: None,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(entity: &str, id: i32) -> Self {
        MasterFileError::NotFound(Json(MasterFileErrorResponse {
            error: "not_found".to_string(),
            message: format!("{} not found: {}", entity, id),
            status_code: 404,
            form: None,
        }))
    }

    /// Create a ValidationFailed error carrying the submitted form
    pub fn validation_failed(reason: String, form: Option<serde_json::Value>) -> Self {
        MasterFileError::ValidationFailed(Json(MasterFileErrorResponse {
            error: "validation_failed".to_string(),
            message: format!("Please correct the form: {}", reason),
            status_code: 422,
            form,
        }))
    }

    /// Create a Cancelled error
    pub fn cancelled(form: Option<serde_json::Value>) -> Self {
        MasterFileError::Cancelled(Json(MasterFileErrorResponse {
            error: "cancelled".to_string(),
            message: "The request was cancelled before it completed; nothing was saved".to_string(),
            status_code: 503,
            form,
        }))
    }

    /// Convert InternalError to MasterFileError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients. `form` is the
    /// submitted payload for write endpoints, echoed back on validation and
    /// persistence failures so the user can correct and resubmit.
    pub fn from_internal_error(err: InternalError, form: Option<serde_json::Value>) -> Self {
        match &err {
            InternalError::Tenant(TenantError::MissingTenantClaim) => Self::tenant_required(),

            InternalError::Record(RecordError::NotFound { entity, id }) => {
                Self::not_found(entity, *id)
            }
            InternalError::Record(RecordError::Validation { .. }) => {
                Self::validation_failed(err.to_string(), form)
            }

            InternalError::Cancelled { operation } => {
                tracing::warn!("Write cancelled during {}", operation);
                Self::cancelled(form)
            }

            // Infrastructure errors - always log and return generic error
            InternalError::Database(_) | InternalError::Audit(_) => {
                tracing::error!("Persistence failure: {}", err);
                Self::internal_server_error(form)
            }
            _ => {
                tracing::error!("Unexpected error in master-file operation: {}", err);
                Self::internal_server_error(form)
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error(form: Option<serde_json::Value>) -> Self {
        MasterFileError::InternalError(Json(MasterFileErrorResponse {
            error: "internal_error".to_string(),
            message: "An error occurred while saving. Please review the form and try again".to_string(),
            status_code: 500,
            form,
        }))
    }

    fn response(&self) -> &MasterFileErrorResponse {
        match self {
            MasterFileError::TenantRequired(json) => &json.0,
            MasterFileError::AntiForgeryFailed(json) => &json.0,
            MasterFileError::NotFound(json) => &json.0,
            MasterFileError::ValidationFailed(json) => &json.0,
            MasterFileError::InternalError(json) => &json.0,
            MasterFileError::Cancelled(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.response().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.response().status_code
    }

    /// Get the echoed form, if any
    pub fn form(&self) -> Option<&serde_json::Value> {
        self.response().form.as_ref()
    }
}

impl fmt::Display for MasterFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
