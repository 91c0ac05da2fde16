use crate::errors::internal::{AuditError, GridError, InternalError, RecordError};
use sea_orm::DbErr;

#[test]
fn test_database_error_includes_operation() {
    let db_err = DbErr::RecordNotFound("test record".to_string());
    let error = InternalError::database("insert_employee", db_err);

    let error_string = error.to_string();
    assert!(error_string.contains("insert_employee"));
    assert!(error_string.contains("Database error"));
}

#[test]
fn test_parse_error_includes_value_type() {
    let error = InternalError::parse("GRID_MAX_PAGE_LENGTH", "invalid digit");

    let error_string = error.to_string();
    assert!(error_string.contains("GRID_MAX_PAGE_LENGTH"));
    assert!(error_string.contains("Parse error"));
}

#[test]
fn test_record_not_found_is_transparent() {
    let error = InternalError::from(RecordError::not_found("PickupPoint", 7));

    assert_eq!(error.to_string(), "PickupPoint not found: 7");
}

#[test]
fn test_audit_missing_field_names_field() {
    let error = InternalError::from(AuditError::MissingField("actor"));

    assert!(error.to_string().contains("actor"));
}

#[test]
fn test_grid_duplicate_column_names_table_and_column() {
    let error = InternalError::from(GridError::DuplicateColumn {
        table: "employees",
        column: "LastName".to_string(),
    });

    let error_string = error.to_string();
    assert!(error_string.contains("employees"));
    assert!(error_string.contains("LastName"));
}

#[test]
fn test_cancelled_names_operation() {
    let error = InternalError::cancelled("edit_employee");

    assert_eq!(error.to_string(), "Operation cancelled: edit_employee");
}
