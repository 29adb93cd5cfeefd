use axum::http::StatusCode;
use axum_test::TestServer;
use jsend::{Compat, JSendConfig, ValidationMode};
use jsend_demo::{create_app, AppState};
use serde_json::{json, Value};

fn setup_test_server(config: JSendConfig) -> TestServer {
    let app = create_app(AppState::new(config));
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn given_server_when_healthz_requested_then_returns_ok() {
    let server = setup_test_server(JSendConfig::lenient());

    let response = server.get("/healthz").await;

    response.assert_status(StatusCode::OK);
    response.assert_text("OK");
}

#[tokio::test]
async fn given_numeric_id_when_get_user_then_returns_success_envelope() {
    let server = setup_test_server(JSendConfig::lenient());

    let response = server.get("/users/17").await;

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "success", "data": {"id": 17}})
    );
}

#[tokio::test]
async fn given_non_numeric_id_when_get_user_then_returns_422_fail_envelope() {
    let server = setup_test_server(JSendConfig::lenient());

    let response = server.get("/users/abc").await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "fail", "data": {"id": "must be numeric"}})
    );
}

#[tokio::test]
async fn given_extra_keys_when_validating_in_lenient_mode_then_reports_valid() {
    let server = setup_test_server(JSendConfig::lenient());

    let response = server
        .post("/envelopes/validate")
        .json(&json!({"status": "success", "data": 1, "extra": true}))
        .await;

    response.assert_status(StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["data"]["valid"], true);
    assert_eq!(body["data"]["status"], "success");
}

#[tokio::test]
async fn given_extra_keys_when_validating_in_strict_mode_then_reports_invalid() {
    let server = setup_test_server(JSendConfig::strict());

    let response = server
        .post("/envelopes/validate")
        .json(&json!({"status": "success", "data": 1, "extra": true}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "fail");
    assert_eq!(body["data"]["valid"], false);
    assert_eq!(
        body["data"]["reason"],
        "success envelope has unexpected keys: extra"
    );
}

#[tokio::test]
async fn given_error_with_code_when_validating_with_legacy_check_then_reports_invalid() {
    let server = setup_test_server(JSendConfig {
        mode: ValidationMode::Lenient,
        compat: Compat::legacy(),
    });

    let response = server
        .post("/envelopes/validate")
        .json(&json!({"status": "error", "message": "m", "code": 5}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["data"]["valid"], false);
}

#[tokio::test]
async fn given_success_envelope_when_forwarded_then_returns_200_with_same_body() {
    let server = setup_test_server(JSendConfig::lenient());
    let envelope = json!({"status": "success", "data": {"id": 1}});

    let response = server.post("/envelopes/forward").json(&envelope).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.json::<Value>(), envelope);
}

#[tokio::test]
async fn given_bogus_envelope_when_forwarded_then_returns_500_error_envelope() {
    let server = setup_test_server(JSendConfig::lenient());

    let response = server
        .post("/envelopes/forward")
        .json(&json!({"status": "bogus"}))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "error");
    assert!(body.get("code").is_none());
}

#[tokio::test]
async fn given_boom_route_when_requested_then_returns_error_envelope_with_code() {
    let server = setup_test_server(JSendConfig::lenient());

    let response = server.get("/boom").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({"status": "error", "message": "boom", "code": 42})
    );
}
