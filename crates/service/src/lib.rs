//! Service layer for solicitações (service requests).
//! - Separates business rules (validation, existence checks) from data access.
//! - Reuses entity definitions and column validation from the `models` crate.
//! - Exposes a repository trait so the HTTP layer can run on PostgreSQL or in memory.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod db;
pub mod solicitacao;
