//! Free functions over a SeaORM connection, wrapped by the repository layer.

pub mod solicitacao_service;
