// API-facing error types
pub mod master_file;

pub use master_file::{MasterFileError, MasterFileErrorResponse};
