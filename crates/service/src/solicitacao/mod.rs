//! Solicitação module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod repo;
pub mod service;

pub use service::SolicitacaoService;
