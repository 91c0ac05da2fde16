use poem::web::CsrfVerifier;
use serde::Serialize;

use crate::errors::MasterFileError;

/// Header carrying the anti-forgery token on state-changing requests
pub const CSRF_HEADER: &str = "X-CSRF-Token";

/// Check the submitted anti-forgery token against the request's CSRF cookie
pub fn verify_csrf(verifier: &CsrfVerifier, token: Option<&str>) -> Result<(), MasterFileError> {
    match token {
        Some(token) if verifier.is_valid(token) => Ok(()),
        _ => {
            tracing::warn!("Rejected write with missing or invalid anti-forgery token");
            Err(MasterFileError::anti_forgery_failed())
        }
    }
}

/// Serialize a submitted form so error responses can echo it back
pub fn echo_form<T: Serialize>(form: &T) -> Option<serde_json::Value> {
    serde_json::to_value(form).ok()
}
