//! Cross-origin policy.
//!
//! `CorsLayer` answers preflights and decorates responses; the origin guard in
//! front of it turns away requests whose `Origin` is not on the allow-list
//! before any handler runs. Requests without `Origin` always pass.

use std::{collections::HashSet, sync::Arc};

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use configs::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

use crate::errors::JsonApiError;

#[derive(Clone, Debug)]
pub struct OriginAllowList {
    any: bool,
    origins: Arc<HashSet<String>>,
}

impl OriginAllowList {
    pub fn from_config(cfg: &CorsConfig) -> Self {
        let origins = cfg
            .allowed_origins
            .iter()
            .filter(|o| o.as_str() != "*")
            .map(|o| o.trim_end_matches('/').to_string())
            .collect();
        Self { any: cfg.allows_any(), origins: Arc::new(origins) }
    }

    /// `None` (no `Origin` header) is always permitted.
    pub fn permits(&self, origin: Option<&str>) -> bool {
        match origin {
            None => true,
            Some(_) if self.any => true,
            Some(o) => self.origins.contains(o.trim_end_matches('/')),
        }
    }
}

pub fn build_cors(allow: &OriginAllowList) -> anyhow::Result<CorsLayer> {
    let origin = if allow.any {
        AllowOrigin::any()
    } else {
        let values = allow
            .origins
            .iter()
            .map(|o| HeaderValue::from_str(o))
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(values)
    };
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

pub async fn require_allowed_origin(
    State(allow): State<OriginAllowList>,
    req: Request,
    next: Next,
) -> Response {
    // 非 UTF-8 的 Origin 视为不在白名单内
    let origin = req
        .headers()
        .get(header::ORIGIN)
        .map(|v| v.to_str().unwrap_or_default().to_string());
    if allow.permits(origin.as_deref()) {
        return next.run(req).await;
    }
    warn!(origin = ?origin, method = %req.method(), path = %req.uri().path(), "cross-origin request rejected");
    JsonApiError::new(StatusCode::FORBIDDEN, "origin not allowed", None).into_response()
}
