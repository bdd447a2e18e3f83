use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use configs::CorsConfig;
use serde_json::{json, Value};
use service::solicitacao::repository::mock::MockSolicitacaoRepository;
use tower::ServiceExt;

use server::{routes, state::AppState};

const ALLOWED: &str = "https://painel.example.com";

fn app_with(repo: Arc<MockSolicitacaoRepository>) -> Router {
    let cors = CorsConfig { allowed_origins: vec![ALLOWED.to_string()] };
    routes::build_router(AppState::new(repo), &cors).unwrap()
}

fn app() -> (Arc<MockSolicitacaoRepository>, Router) {
    let repo = Arc::new(MockSolicitacaoRepository::default());
    (repo.clone(), app_with(repo))
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, body)
}

fn ana() -> Value {
    json!({
        "requester": "Ana",
        "branch": "SP",
        "serviceType": "Manutenção",
        "service": "Troca de óleo"
    })
}

#[tokio::test]
async fn create_returns_201_with_id_and_echoed_fields() {
    let (_, app) = app();
    let (status, body) = send(&app, json_request(Method::POST, "/solicitacao", &ana())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(uuid::Uuid::parse_str(body["id"].as_str().unwrap()).is_ok());
    assert_eq!(body["requester"], "Ana");
    assert_eq!(body["branch"], "SP");
    assert_eq!(body["serviceType"], "Manutenção");
    assert_eq!(body["service"], "Troca de óleo");
    assert!(body["status"].is_null());
}

#[tokio::test]
async fn create_accepts_portuguese_field_names() {
    let (_, app) = app();
    let legacy = json!({
        "Solicitante": "João",
        "Filial": "RJ",
        "TipoServ": "Elétrica",
        "Servico": "Troca de lâmpada",
        "Urgencia": "baixa",
        "DataEmissao": "2024-02-01"
    });
    let (status, body) = send(&app, json_request(Method::POST, "/solicitacao", &legacy)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["requester"], "João");
    assert_eq!(body["urgency"], "baixa");
    assert!(body["issuedAt"].as_str().unwrap().starts_with("2024-02-01T00:00:00"));
}

#[tokio::test]
async fn create_with_missing_field_is_400_and_stores_nothing() {
    let (repo, app) = app();
    for field in ["requester", "branch", "serviceType", "service"] {
        let mut body = ana();
        body.as_object_mut().unwrap().remove(field);
        let (status, err) = send(&app, json_request(Method::POST, "/solicitacao", &body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "field {field}");
        assert_eq!(err["message"], "missing required fields");
        assert_eq!(err["detail"], field);
    }
    let mut blank = ana();
    blank["branch"] = json!("   ");
    let (status, _) = send(&app, json_request(Method::POST, "/solicitacao", &blank)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(repo.is_empty().await);
    let (_, list) = send(&app, empty_request(Method::GET, "/solicitacao")).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn malformed_json_is_400_with_json_body() {
    let (_, app) = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/solicitacao")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"requester\": "))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "invalid request body");
}

#[tokio::test]
async fn wrongly_typed_field_is_400() {
    let (_, app) = app();
    let mut body = ana();
    body["requester"] = json!(42);
    let (status, err) = send(&app, json_request(Method::POST, "/solicitacao", &body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "invalid request body");
}

#[tokio::test]
async fn list_returns_every_created_record() {
    let (_, app) = app();
    let mut ids = Vec::new();
    for name in ["Ana", "Bia", "Caio"] {
        let mut body = ana();
        body["requester"] = json!(name);
        let (_, created) = send(&app, json_request(Method::POST, "/solicitacao", &body)).await;
        ids.push(created["id"].clone());
    }
    let (status, list) = send(&app, empty_request(Method::GET, "/solicitacao")).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 3);
    let listed: Vec<Value> = list.iter().map(|r| r["id"].clone()).collect();
    assert_eq!(listed, ids);
    assert_eq!(list[1]["requester"], "Bia");
}

#[tokio::test]
async fn get_by_id_and_unknown_id() {
    let (_, app) = app();
    let (_, created) = send(&app, json_request(Method::POST, "/solicitacao", &ana())).await;
    let id = created["id"].as_str().unwrap();

    let (status, found) = send(&app, empty_request(Method::GET, &format!("/solicitacao/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found, created);

    let (status, err) = send(&app, empty_request(Method::GET, &format!("/solicitacao/{}", uuid::Uuid::new_v4()))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "record not found");
}

#[tokio::test]
async fn put_replaces_record_and_get_reflects_it() {
    let (_, app) = app();
    let mut first = ana();
    first["urgency"] = json!("alta");
    let (_, created) = send(&app, json_request(Method::POST, "/solicitacao", &first)).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut replacement = ana();
    replacement["status"] = json!("closed");
    replacement["closedAt"] = json!("2024-01-01");
    let (status, updated) = send(&app, json_request(Method::PUT, &format!("/solicitacao/{id}"), &replacement)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["status"], "closed");
    assert!(updated["closedAt"].as_str().unwrap().starts_with("2024-01-01"));
    // full replacement: omitted optional fields are cleared
    assert!(updated["urgency"].is_null());

    let (_, list) = send(&app, empty_request(Method::GET, "/solicitacao")).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["status"], "closed");
}

#[tokio::test]
async fn put_unknown_id_is_404_and_leaves_collection_unchanged() {
    let (_, app) = app();
    send(&app, json_request(Method::POST, "/solicitacao", &ana())).await;
    let (_, before) = send(&app, empty_request(Method::GET, "/solicitacao")).await;

    let uri = format!("/solicitacao/{}", uuid::Uuid::new_v4());
    let (status, err) = send(&app, json_request(Method::PUT, &uri, &ana())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "record not found");

    let (status, _) = send(&app, json_request(Method::PUT, "/solicitacao/not-a-uuid", &ana())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, after) = send(&app, empty_request(Method::GET, "/solicitacao")).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn put_with_missing_fields_is_400() {
    let (_, app) = app();
    let (_, created) = send(&app, json_request(Method::POST, "/solicitacao", &ana())).await;
    let id = created["id"].as_str().unwrap();
    let (status, err) = send(&app, json_request(Method::PUT, &format!("/solicitacao/{id}"), &json!({"status": "closed"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["detail"], "requester, branch, serviceType, service");
}

#[tokio::test]
async fn delete_then_delete_again_is_404() {
    let (_, app) = app();
    let (_, created) = send(&app, json_request(Method::POST, "/solicitacao", &ana())).await;
    let uri = format!("/solicitacao/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "record deleted");
    assert_eq!(body["id"], created["id"]);

    let (_, list) = send(&app, empty_request(Method::GET, "/solicitacao")).await;
    assert_eq!(list, json!([]));

    let (status, err) = send(&app, empty_request(Method::DELETE, &uri)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "record not found");
}

#[tokio::test]
async fn persistence_failure_is_500_json() {
    let (repo, app) = app();
    repo.set_unavailable(true);

    let (status, body) = send(&app, empty_request(Method::GET, "/solicitacao")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "persistence error");

    let (status, body) = send(&app, json_request(Method::POST, "/solicitacao", &ana())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].is_string());

    let (status, health) = send(&app, empty_request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(health["database"], "down");
}

#[tokio::test]
async fn health_reports_database_up() {
    let (_, app) = app();
    let (status, body) = send(&app, empty_request(Method::GET, "/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok", "database": "up"}));
}

#[tokio::test]
async fn openapi_document_lists_routes() {
    let (_, app) = app();
    let (status, doc) = send(&app, empty_request(Method::GET, "/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/solicitacao"].is_object());
    assert!(doc["paths"]["/solicitacao/{id}"]["delete"].is_object());
}

#[tokio::test]
async fn request_without_origin_is_allowed() {
    let (_, app) = app();
    let response = app.oneshot(empty_request(Method::GET, "/solicitacao")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn allowed_origin_gets_cors_headers() {
    let (_, app) = app();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/solicitacao")
        .header(header::ORIGIN, ALLOWED)
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED);
}

#[tokio::test]
async fn disallowed_origin_is_rejected_before_handler() {
    let (repo, app) = app();
    let req = Request::builder()
        .method(Method::POST)
        .uri("/solicitacao")
        .header(header::ORIGIN, "https://evil.example")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(&ana()).unwrap()))
        .unwrap();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "origin not allowed");
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn preflight_from_allowed_origin_lists_methods() {
    let (_, app) = app();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/solicitacao/abc")
        .header(header::ORIGIN, ALLOWED)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert!(response.status().is_success());
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap().to_string();
    for m in ["GET", "POST", "PUT", "DELETE"] {
        assert!(methods.contains(m), "{methods}");
    }
}

#[tokio::test]
async fn preflight_from_disallowed_origin_is_rejected() {
    let (_, app) = app();
    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/solicitacao")
        .header(header::ORIGIN, "https://evil.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn put_partial_body_to_unknown_id_is_404() {
    let (_, app) = app();
    let uri = format!("/solicitacao/{}", uuid::Uuid::new_v4());
    let (status, err) = send(&app, json_request(Method::PUT, &uri, &json!({"status": "closed"}))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "record not found");
}

#[tokio::test]
async fn unknown_route_is_404_json() {
    let (_, app) = app();
    let (status, body) = send(&app, empty_request(Method::GET, "/solicitacoes")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "route not found");
    assert_eq!(body["detail"], "/solicitacoes");
}

#[tokio::test]
async fn unsupported_method_is_405_json() {
    let (_, app) = app();
    let (status, body) = send(&app, json_request(Method::PATCH, "/solicitacao", &ana())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["message"], "method not allowed");

    let uri = format!("/solicitacao/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, empty_request(Method::POST, &uri)).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["detail"], format!("POST {uri}"));
}

#[tokio::test]
async fn offsets_in_dates_are_stored_as_utc() {
    let (_, app) = app();
    let mut body = ana();
    body["requestedAt"] = json!("2024-03-10T09:00:00-03:00");
    let (status, created) = send(&app, json_request(Method::POST, "/solicitacao", &body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let stored = created["requestedAt"].as_str().unwrap();
    assert!(stored.starts_with("2024-03-10T12:00:00"), "{stored}");
    assert!(stored.ends_with('Z') || stored.ends_with("+00:00"), "{stored}");
}
