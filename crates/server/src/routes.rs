pub mod solicitacao;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    middleware,
    routing::get,
    Json, Router,
};
use common::types::HealthReport;
use configs::CorsConfig;
use tower_http::trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{warn, Level};
use utoipa::OpenApi;

use crate::{cors, errors::JsonApiError, openapi::ApiDoc, state::AppState};

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = crate::openapi::HealthDoc),
        (status = 503, description = "Database unreachable", body = crate::openapi::HealthDoc)
    )
)]
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    match state.solicitacoes.health().await {
        Ok(()) => (StatusCode::OK, Json(HealthReport::up())),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (StatusCode::SERVICE_UNAVAILABLE, Json(HealthReport::down()))
        }
    }
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn route_not_found(uri: Uri) -> JsonApiError {
    JsonApiError::new(StatusCode::NOT_FOUND, "route not found", Some(uri.path().to_string()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> JsonApiError {
    JsonApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "method not allowed",
        Some(format!("{method} {}", uri.path())),
    )
}

/// Build the full application router: CRUD routes, health, OpenAPI document,
/// wrapped in the origin guard, CORS and request tracing.
pub fn build_router(state: AppState, cors_cfg: &CorsConfig) -> anyhow::Result<Router> {
    let allow = cors::OriginAllowList::from_config(cors_cfg);
    let cors = cors::build_cors(&allow)?;

    let router = Router::new()
        .route(
            "/solicitacao",
            get(solicitacao::list).post(solicitacao::create).fallback(method_not_allowed),
        )
        .route(
            "/solicitacao/:id",
            get(solicitacao::get)
                .put(solicitacao::update)
                .delete(solicitacao::delete)
                .fallback(method_not_allowed),
        )
        .route("/health", get(health).fallback(method_not_allowed))
        .route("/openapi.json", get(openapi_json).fallback(method_not_allowed))
        // 未匹配的路径与方法同样返回 JSON 错误体
        .fallback(route_not_found)
        .with_state(state)
        .layer(cors)
        // 白名单检查在 CORS 之外，预检请求同样会被拦截
        .layer(middleware::from_fn_with_state(allow, cors::require_allowed_origin))
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        );
    Ok(router)
}
