use std::sync::Arc;

use service::solicitacao::{repository::SolicitacaoRepository, SolicitacaoService};

/// Shared handler state; the repository (and its pool) is built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub solicitacoes: Arc<SolicitacaoService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn SolicitacaoRepository>) -> Self {
        Self { solicitacoes: Arc::new(SolicitacaoService::new(repo)) }
    }
}
