use thiserror::Error;

/// Errors raised while building grid column tables at startup
#[derive(Error, Debug)]
pub enum GridError {
    #[error("Grid column table for {table} contains a blank column name")]
    BlankColumnName { table: &'static str },

    #[error("Grid column table for {table} declares column '{column}' more than once")]
    DuplicateColumn { table: &'static str, column: String },
}
