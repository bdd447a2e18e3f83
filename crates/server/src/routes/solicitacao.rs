use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use serde_json::json;
use service::solicitacao::domain::SolicitacaoInput;
use tracing::info;
use uuid::Uuid;

use models::solicitacao::Model;
use crate::{errors::JsonApiError, state::AppState};

/// A path segment that is not a UUID cannot name a stored record.
fn parse_id(raw: &str) -> Result<Uuid, JsonApiError> {
    Uuid::parse_str(raw).map_err(|_| JsonApiError::not_found())
}

#[utoipa::path(
    get, path = "/solicitacao", tag = "solicitacao",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::SolicitacaoDoc]),
        (status = 500, description = "Persistence error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Model>>, JsonApiError> {
    let list = state.solicitacoes.list().await?;
    info!(count = list.len(), "list solicitacoes");
    Ok(Json(list))
}

#[utoipa::path(
    post, path = "/solicitacao", tag = "solicitacao",
    request_body = crate::openapi::SolicitacaoInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::SolicitacaoDoc),
        (status = 400, description = "Missing required fields", body = crate::openapi::MessageDoc),
        (status = 500, description = "Persistence error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<SolicitacaoInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Model>), JsonApiError> {
    let Json(input) = payload?;
    let created = state.solicitacoes.create(input).await?;
    info!(id = %created.id, requester = %created.requester, "created solicitacao");
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get, path = "/solicitacao/{id}", tag = "solicitacao",
    params(("id" = String, Path, description = "Solicitação ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SolicitacaoDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Model>, JsonApiError> {
    let id = parse_id(&id)?;
    let found = state.solicitacoes.get(id).await?;
    Ok(Json(found))
}

#[utoipa::path(
    put, path = "/solicitacao/{id}", tag = "solicitacao",
    params(("id" = String, Path, description = "Solicitação ID")),
    request_body = crate::openapi::SolicitacaoInputDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SolicitacaoDoc),
        (status = 400, description = "Missing required fields", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Persistence error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SolicitacaoInput>, JsonRejection>,
) -> Result<Json<Model>, JsonApiError> {
    let id = parse_id(&id)?;
    let Json(input) = payload?;
    let updated = state.solicitacoes.update(id, input).await?;
    info!(id = %updated.id, "updated solicitacao");
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/solicitacao/{id}", tag = "solicitacao",
    params(("id" = String, Path, description = "Solicitação ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "Not Found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Persistence error", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<serde_json::Value>, JsonApiError> {
    let id = parse_id(&id)?;
    state.solicitacoes.delete(id).await?;
    info!(id = %id, "deleted solicitacao");
    Ok(Json(json!({ "message": "record deleted", "id": id })))
}
