use crate::{errors::InternalError, types::internal::ActionOutcome};

// Types layer - All data structures
pub mod db;
pub mod dto;
pub mod internal;

/// What a mutation returns: its value paired with the audit intent describing it
pub type MutationResult<T> = Result<ActionOutcome<T>, InternalError>;
