use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use once_cell::sync::Lazy;
use std::{env, time::Duration};
use tracing::info;

pub static DATABASE_URL: Lazy<String> = Lazy::new(|| {
    // Load .env if present
    let _ = dotenvy::dotenv();
    env::var("DATABASE_URL").unwrap_or_else(|_| configs::DEFAULT_DATABASE_URL.to_string())
});

/// Pool settings handed to SeaORM.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub acquire_timeout: Duration,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::from(&configs::DatabaseConfig::default())
    }
}

impl From<&configs::DatabaseConfig> for DatabaseConfig {
    fn from(c: &configs::DatabaseConfig) -> Self {
        Self {
            url: c.url.clone(),
            max_connections: c.max_connections,
            min_connections: c.min_connections,
            connect_timeout: Duration::from_secs(c.connect_timeout_secs),
            acquire_timeout: Duration::from_secs(c.acquire_timeout_secs),
            idle_timeout: Duration::from_secs(c.idle_timeout_secs),
            max_lifetime: Duration::from_secs(c.max_lifetime_secs),
            sqlx_logging: c.sqlx_logging,
        }
    }
}

impl DatabaseConfig {
    /// Defaults with the URL taken from `DATABASE_URL`.
    pub fn from_env() -> Self {
        Self { url: DATABASE_URL.clone(), ..Self::default() }
    }

    /// `[database]` section of the config file (see `configs::load_default`).
    pub fn from_file() -> anyhow::Result<Self> {
        let mut cfg = configs::load_default()?;
        cfg.database.normalize_from_env();
        cfg.database.validate()?;
        Ok(Self::from(&cfg.database))
    }
}

pub async fn connect() -> anyhow::Result<DatabaseConnection> {
    let db = Database::connect(DATABASE_URL.as_str()).await?;
    Ok(db)
}

pub async fn connect_with_config(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(cfg.url.clone());
    opt.max_connections(cfg.max_connections)
        .min_connections(cfg.min_connections)
        .connect_timeout(cfg.connect_timeout)
        .acquire_timeout(cfg.acquire_timeout)
        .idle_timeout(cfg.idle_timeout)
        .max_lifetime(cfg.max_lifetime)
        .sqlx_logging(cfg.sqlx_logging);
    let db = Database::connect(opt).await?;
    info!(max_connections = cfg.max_connections, min_connections = cfg.min_connections, "database pool ready");
    Ok(db)
}

/// Round-trip to the server; used by the startup check and `GET /health`.
pub async fn test_connection(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.ping().await
}
