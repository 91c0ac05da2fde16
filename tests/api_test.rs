mod common;

use std::sync::Arc;

use masterfile_backend::api::build_app;
use masterfile_backend::api::helpers::CSRF_HEADER;
use masterfile_backend::app_data::AppData;
use masterfile_backend::types::internal::CancelSignal;
use poem::http::{header, StatusCode};
use poem::test::TestClient;
use poem::Endpoint;
use serde_json::json;

/// Fetch an anti-forgery token and the cookie it is bound to
async fn csrf_pair<E: Endpoint>(client: &TestClient<E>) -> (String, String) {
    let resp = client.get("/Employee/Create").send().await;
    resp.assert_status_is_ok();

    let cookie = resp
        .0
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .expect("csrf cookie should be set")
        .to_string();
    let token = resp
        .json()
        .await
        .value()
        .object()
        .get("csrfToken")
        .string()
        .to_string();

    (token, cookie)
}

fn employee_body(number: &str) -> serde_json::Value {
    json!({
        "employeeNumber": number,
        "firstName": "Sam",
        "lastName": "Jones",
        "hireDate": "2023-06-01"
    })
}

fn client_for(app_data: Arc<AppData>) -> TestClient<impl Endpoint> {
    TestClient::new(build_app(app_data).unwrap())
}

#[tokio::test]
async fn test_health_endpoint() {
    let client = client_for(common::setup_app_data(CancelSignal::none()).await);

    let resp = client.get("/health").send().await;

    resp.assert_status_is_ok();
    resp.json().await.value().object().get("status").assert_string("healthy");
}

#[tokio::test]
async fn test_create_without_anti_forgery_token_is_rejected() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let token = common::bearer_token(&app_data, Some("ACME"));
    let client = client_for(app_data);

    let resp = client
        .post("/Employee/Create")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body_json(&employee_body("E-1"))
        .send()
        .await;

    resp.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_then_list_through_grid() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let token = common::bearer_token(&app_data, Some("ACME"));
    let client = client_for(app_data);
    let (csrf_token, cookie) = csrf_pair(&client).await;

    let resp = client
        .post("/Employee/Create")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::COOKIE, cookie)
        .header(CSRF_HEADER, csrf_token)
        .body_json(&employee_body("E-1"))
        .send()
        .await;
    resp.assert_status_is_ok();
    resp.json().await.value().object().get("redirectTo").assert_string("/Employee");

    let resp = client
        .post("/Employee/GetEmployeesList")
        .body_json(&json!({ "draw": 4, "start": 0, "length": 10 }))
        .send()
        .await;
    resp.assert_status_is_ok();
    let json = resp.json().await;
    let page = json.value().object();
    page.get("draw").assert_i64(4);
    page.get("recordsTotal").assert_i64(1);
    page.get("recordsFiltered").assert_i64(1);
    page.get("data").array().get(0).object().get("employeeNumber").assert_string("E-1");
}

#[tokio::test]
async fn test_grid_accepts_form_encoded_requests() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let client = client_for(app_data);

    let resp = client
        .post("/Employee/GetEmployeesList")
        .form(&[
            ("draw", "2"),
            ("start", "0"),
            ("length", "25"),
            ("search[value]", "nobody"),
            ("order[0][column]", "0"),
            ("order[0][dir]", "asc"),
            ("columns[0][data]", "lastName"),
        ])
        .send()
        .await;

    resp.assert_status_is_ok();
    let json = resp.json().await;
    let page = json.value().object();
    page.get("draw").assert_i64(2);
    page.get("recordsTotal").assert_i64(0);
}

#[tokio::test]
async fn test_invalid_submission_echoes_form() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let token = common::bearer_token(&app_data, Some("ACME"));
    let client = client_for(app_data);
    let (csrf_token, cookie) = csrf_pair(&client).await;

    let resp = client
        .post("/Employee/Create")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::COOKIE, cookie)
        .header(CSRF_HEADER, csrf_token)
        .body_json(&json!({ "employeeNumber": "E-5", "firstName": "Sam" }))
        .send()
        .await;

    resp.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let json = resp.json().await;
    let body = json.value().object();
    body.get("error").assert_string("validation_failed");
    body.get("form").object().get("employeeNumber").assert_string("E-5");
}

#[tokio::test]
async fn test_pickup_points_require_a_tenant() {
    let app_data = common::setup_app_data(CancelSignal::none()).await;
    let token = common::bearer_token(&app_data, None);
    let client = client_for(app_data);

    client.get("/PickupPoint").send().await.assert_status(StatusCode::BAD_REQUEST);

    let resp = client
        .get("/PickupPoint")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .send()
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    resp.json().await.value().object().get("error").assert_string("tenant_required");
}

#[tokio::test]
async fn test_edit_form_for_missing_employee_is_not_found() {
    let client = client_for(common::setup_app_data(CancelSignal::none()).await);

    let resp = client.get("/Employee/Edit").query("id", &999).send().await;

    resp.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_of_missing_employee_without_token_is_not_found() {
    let client = client_for(common::setup_app_data(CancelSignal::none()).await);
    let (csrf_token, cookie) = csrf_pair(&client).await;

    let mut body = employee_body("E-1");
    body["id"] = json!(999);
    let resp = client
        .post("/Employee/Edit")
        .header(header::COOKIE, cookie)
        .header(CSRF_HEADER, csrf_token)
        .body_json(&body)
        .send()
        .await;

    resp.assert_status(StatusCode::NOT_FOUND);
    resp.json().await.value().object().get("error").assert_string("not_found");
}

#[tokio::test]
async fn test_writes_after_shutdown_are_refused() {
    let (handle, shutdown) = CancelSignal::pair();
    let app_data = common::setup_app_data(shutdown).await;
    let token = common::bearer_token(&app_data, Some("ACME"));
    let client = client_for(app_data.clone());
    let (csrf_token, cookie) = csrf_pair(&client).await;
    handle.cancel();

    let resp = client
        .post("/Employee/Create")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::COOKIE, cookie)
        .header(CSRF_HEADER, csrf_token)
        .body_json(&employee_body("E-1"))
        .send()
        .await;

    resp.assert_status(StatusCode::SERVICE_UNAVAILABLE);
    let audits = app_data
        .audit_store
        .list_for_company(&app_data.db, &common::tenant("ACME"))
        .await
        .unwrap();
    assert!(audits.is_empty());
}
