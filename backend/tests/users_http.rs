//! End-to-end tests for the HTTP surface assembled by `server::build_app`.

use actix_http::Request;
use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::{Method, StatusCode, header},
    test::{self, TestRequest},
    web,
};
use roster::config::AppConfig;
use roster::inbound::http::state::HttpState;
use roster::middleware::trace::REQUEST_ID_HEADER;
use roster::server::build_app;
use rstest::{fixture, rstest};
use serde_json::Value;

#[fixture]
fn config() -> AppConfig {
    AppConfig::default()
}

async fn init_app(
    config: &AppConfig,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(build_app(config.debug, web::Data::new(HttpState::default()))).await
}

async fn body_text(res: ServiceResponse<BoxBody>) -> String {
    let body = test::read_body(res).await;
    String::from_utf8(body.to_vec()).expect("utf8 body")
}

#[rstest]
#[actix_web::test]
async fn get_users_returns_ids_one_and_two(config: AppConfig) {
    let app = init_app(&config).await;

    let res = test::call_service(&app, TestRequest::get().uri("/users").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);

    let users: Vec<Value> = test::read_body_json(res).await;
    let ids: Vec<i64> = users
        .iter()
        .filter_map(|user| user.get("id").and_then(Value::as_i64))
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

#[rstest]
#[actix_web::test]
async fn post_users_acknowledges_name(config: AppConfig) {
    let app = init_app(&config).await;

    let req = TestRequest::post()
        .uri("/users")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"name":"Ann","email":"a@x.com"}"#)
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "Created user: Ann");
}

#[rstest]
#[actix_web::test]
async fn post_users_does_not_change_listing(config: AppConfig) {
    let app = init_app(&config).await;

    let req = TestRequest::post()
        .uri("/users")
        .set_payload(r#"{"id":3,"name":"Ann","email":"a@x.com"}"#)
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = test::call_service(&app, TestRequest::get().uri("/users").to_request()).await;
    let users: Vec<Value> = test::read_body_json(res).await;
    assert_eq!(users.len(), 2);
}

#[rstest]
#[actix_web::test]
async fn delete_users_is_method_not_allowed(config: AppConfig) {
    let app = init_app(&config).await;

    let req = TestRequest::default()
        .method(Method::DELETE)
        .uri("/users")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_text(res).await, "Method not allowed");
}

#[rstest]
#[case(Method::GET)]
#[case(Method::POST)]
#[actix_web::test]
async fn health_reports_ok(config: AppConfig, #[case] method: Method) {
    let app = init_app(&config).await;

    let req = TestRequest::default()
        .method(method)
        .uri("/health")
        .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "OK");
}

#[rstest]
#[case("/users")]
#[case("/health")]
#[case("/missing")]
#[actix_web::test]
async fn every_response_carries_request_id(config: AppConfig, #[case] path: &str) {
    let app = init_app(&config).await;

    let res = test::call_service(&app, TestRequest::get().uri(path).to_request()).await;

    let request_id = res
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .expect("request id header");
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[rstest]
#[actix_web::test]
async fn malformed_post_reports_request_id_in_error_body(config: AppConfig) {
    let app = init_app(&config).await;

    let req = TestRequest::post()
        .uri("/users")
        .set_payload("{not json")
        .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let header_id = res
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("request id header");
    let body: Value = test::read_body_json(res).await;
    assert_eq!(
        body.get("requestId").and_then(Value::as_str),
        Some(header_id.as_str())
    );
}
