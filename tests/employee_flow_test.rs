mod common;

use masterfile_backend::coordinators::{AuditTrailCoordinator, EmployeeCoordinator};
use masterfile_backend::errors::InternalError;
use masterfile_backend::grid::{GridRequest, SortDirection, SortOrder};
use masterfile_backend::types::dto::employee::EmployeeForm;
use masterfile_backend::types::internal::{CancelSignal, EmployeeFields};

fn page(start: i64, length: i64) -> GridRequest {
    GridRequest {
        draw: 1,
        start,
        length,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_grid_pages_through_employees_in_requested_order() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let coordinator = EmployeeCoordinator::new(app_data).unwrap();
    let ctx = common::context("Jane", Some("ACME"));
    let cancel = CancelSignal::none();

    for i in 0..12 {
        let last_name = format!("Name{:02}", i);
        coordinator
            .create(&ctx, &cancel, common::employee_fields(&format!("E-{:02}", i), &last_name))
            .await
            .unwrap();
    }

    let mut request = page(10, 5);
    request.order = vec![SortOrder {
        column: "LastName".to_string(),
        direction: SortDirection::Desc,
    }];
    let result = coordinator.grid(&request).await.unwrap();

    assert_eq!(result.records_total, 12);
    assert_eq!(result.records_filtered, 12);
    let names: Vec<&str> = result.data.iter().map(|r| r.last_name.as_str()).collect();
    assert_eq!(names, vec!["Name01", "Name00"]);
}

#[tokio::test]
async fn test_search_reports_filtered_count_as_total() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let coordinator = EmployeeCoordinator::new(app_data).unwrap();
    let ctx = common::context("Jane", Some("ACME"));
    let cancel = CancelSignal::none();

    coordinator.create(&ctx, &cancel, common::employee_fields("E-1", "Archer")).await.unwrap();
    coordinator.create(&ctx, &cancel, common::employee_fields("E-2", "Baker")).await.unwrap();
    coordinator.create(&ctx, &cancel, common::employee_fields("E-3", "Carter")).await.unwrap();

    let mut request = page(0, 10);
    request.search = Some("BAK".to_string());
    let result = coordinator.grid(&request).await.unwrap();

    assert_eq!(result.records_filtered, 1);
    assert_eq!(result.records_total, result.records_filtered);
    assert_eq!(result.data[0].employee_number, "E-2");
}

#[tokio::test]
async fn test_form_submission_flows_into_audit_trail() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let employees = EmployeeCoordinator::new(app_data.clone()).unwrap();
    let audit_trail = AuditTrailCoordinator::new(app_data).unwrap();
    let ctx = common::context("Priya", Some("ACME"));

    let form = EmployeeForm {
        employee_number: Some(" E-77 ".to_string()),
        first_name: Some("Ola".to_string()),
        last_name: Some("Nordmann".to_string()),
        hire_date: Some("2024-02-29".to_string()),
        ..Default::default()
    };
    let fields = EmployeeFields::try_from(form).unwrap();
    let created = employees.create(&ctx, &CancelSignal::none(), fields).await.unwrap();

    assert_eq!(created.employee_number, "E-77");
    assert!(created.is_active);

    let trail = audit_trail.grid(&ctx, &page(0, 10)).await.unwrap();
    assert_eq!(trail.records_total, 1);
    assert_eq!(trail.data[0].actor, "Priya");
    assert_eq!(trail.data[0].description, "Created employee E-77");
    assert_eq!(trail.data[0].entity_type, "Employee");

    let other_tenant = common::context("Priya", Some("GLOBEX"));
    assert_eq!(audit_trail.grid(&other_tenant, &page(0, 10)).await.unwrap().records_total, 0);
}

#[tokio::test]
async fn test_cancelled_write_leaves_no_trace() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let coordinator = EmployeeCoordinator::new(app_data.clone()).unwrap();
    let ctx = common::context("Jane", Some("ACME"));
    let (handle, cancel) = CancelSignal::pair();
    handle.cancel();

    let result = coordinator
        .create(&ctx, &cancel, common::employee_fields("E-9", "Gone"))
        .await;

    assert!(matches!(result, Err(InternalError::Cancelled { .. })));
    assert!(coordinator.list().await.unwrap().is_empty());
    let audits = app_data
        .audit_store
        .list_for_company(&app_data.db, &common::tenant("ACME"))
        .await
        .unwrap();
    assert!(audits.is_empty());
}
