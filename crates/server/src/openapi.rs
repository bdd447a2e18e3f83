use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthDoc {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "up")]
    pub database: String,
}

#[derive(Serialize, ToSchema)]
pub struct MessageDoc {
    #[schema(example = "record not found")]
    pub message: String,
    pub detail: Option<String>,
}

/// Request body for create/update. Dates accept RFC 3339 or `YYYY-MM-DD`.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolicitacaoInputDoc {
    #[schema(example = "Ana")]
    pub requester: String,
    #[schema(example = "SP")]
    pub branch: String,
    #[schema(example = "Manutenção")]
    pub service_type: String,
    #[schema(example = "Troca de óleo")]
    pub service: String,
    pub equipment: Option<String>,
    pub urgency: Option<String>,
    pub description: Option<String>,
    #[schema(example = "2024-01-01")]
    pub requested_at: Option<String>,
    pub issued_at: Option<String>,
    #[schema(example = "closed")]
    pub status: Option<String>,
    pub closed_at: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SolicitacaoDoc {
    pub id: Uuid,
    pub requester: String,
    pub branch: String,
    pub service_type: String,
    pub service: String,
    pub equipment: Option<String>,
    pub urgency: Option<String>,
    pub description: Option<String>,
    pub requested_at: Option<String>,
    pub issued_at: Option<String>,
    pub status: Option<String>,
    pub closed_at: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::solicitacao::list,
        crate::routes::solicitacao::create,
        crate::routes::solicitacao::get,
        crate::routes::solicitacao::update,
        crate::routes::solicitacao::delete,
    ),
    components(
        schemas(
            HealthDoc,
            MessageDoc,
            SolicitacaoInputDoc,
            SolicitacaoDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "solicitacao")
    )
)]
pub struct ApiDoc;
