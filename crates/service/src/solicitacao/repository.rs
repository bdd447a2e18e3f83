use async_trait::async_trait;
use uuid::Uuid;

use models::solicitacao::{Model, SolicitacaoFields};

use crate::errors::ServiceError;

/// Persistence collaborator for solicitações.
///
/// `replace` and `delete` report a missing row as `None` / `false` rather than
/// an error; the service turns that into `NotFound`.
#[async_trait]
pub trait SolicitacaoRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Model>, ServiceError>;
    async fn create(&self, fields: SolicitacaoFields) -> Result<Model, ServiceError>;
    async fn get(&self, id: Uuid) -> Result<Option<Model>, ServiceError>;
    async fn replace(&self, id: Uuid, fields: SolicitacaoFields) -> Result<Option<Model>, ServiceError>;
    async fn delete(&self, id: Uuid) -> Result<bool, ServiceError>;
    async fn ping(&self) -> Result<(), ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tokio::sync::RwLock;

    #[derive(Default)]
    pub struct MockSolicitacaoRepository {
        rows: RwLock<Vec<Model>>, // insertion order == list order
        unavailable: AtomicBool,
    }

    impl MockSolicitacaoRepository {
        /// Make every call fail as if the database were unreachable.
        pub fn set_unavailable(&self, unavailable: bool) {
            self.unavailable.store(unavailable, Ordering::SeqCst);
        }

        pub async fn len(&self) -> usize {
            self.rows.read().await.len()
        }

        pub async fn is_empty(&self) -> bool {
            self.len().await == 0
        }

        fn check(&self) -> Result<(), ServiceError> {
            if self.unavailable.load(Ordering::SeqCst) {
                return Err(ServiceError::Db("connection refused".into()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SolicitacaoRepository for MockSolicitacaoRepository {
        async fn list(&self) -> Result<Vec<Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.read().await.clone())
        }

        async fn create(&self, fields: SolicitacaoFields) -> Result<Model, ServiceError> {
            self.check()?;
            fields.validate()?;
            let now = Utc::now().into();
            let model = fields.into_model(Uuid::new_v4(), now, now);
            self.rows.write().await.push(model.clone());
            Ok(model)
        }

        async fn get(&self, id: Uuid) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            Ok(self.rows.read().await.iter().find(|m| m.id == id).cloned())
        }

        async fn replace(&self, id: Uuid, fields: SolicitacaoFields) -> Result<Option<Model>, ServiceError> {
            self.check()?;
            fields.validate()?;
            let mut rows = self.rows.write().await;
            let Some(slot) = rows.iter_mut().find(|m| m.id == id) else {
                return Ok(None);
            };
            let updated = fields.into_model(id, slot.created_at, Utc::now().into());
            *slot = updated.clone();
            Ok(Some(updated))
        }

        async fn delete(&self, id: Uuid) -> Result<bool, ServiceError> {
            self.check()?;
            let mut rows = self.rows.write().await;
            let before = rows.len();
            rows.retain(|m| m.id != id);
            Ok(rows.len() < before)
        }

        async fn ping(&self) -> Result<(), ServiceError> {
            self.check()
        }
    }
}
