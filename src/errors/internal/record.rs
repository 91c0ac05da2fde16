use thiserror::Error;

/// Master-file record errors (employees, pickup points)
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },
}

impl RecordError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
