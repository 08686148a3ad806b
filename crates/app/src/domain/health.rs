//! Health

use async_trait::async_trait;
use mockall::automock;
use sqlx::Connection;
use thiserror::Error;

use crate::database::Db;

#[derive(Debug, Error)]
pub enum HealthError {
    #[error("database ping failed: {0}")]
    Ping(#[source] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct PgHealthService {
    db: Db,
}

impl PgHealthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl HealthService for PgHealthService {
    async fn check(&self) -> Result<(), HealthError> {
        let mut conn = self.db.pool().acquire().await.map_err(HealthError::Ping)?;

        conn.ping().await.map_err(HealthError::Ping)
    }
}

#[automock]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Round-trip the store, failing when it cannot be reached.
    async fn check(&self) -> Result<(), HealthError>;
}
