//! Database connection management

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    time::Duration,
};

use clap::Args;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use tracing::info;

/// `PostgreSQL` connection and pool settings.
#[derive(Clone, Args)]
pub struct ConnectionSettings {
    /// `PostgreSQL` connection string; overrides the discrete settings below
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Database host
    #[arg(id = "db_host", long = "db-host", env = "DB_HOST", default_value = "localhost")]
    pub host: String,

    /// Database port
    #[arg(id = "db_port", long = "db-port", env = "DB_PORT", default_value_t = 5432)]
    pub port: u16,

    /// Database name
    #[arg(long = "db-name", env = "DB_NAME", default_value = "bookstore")]
    pub name: String,

    /// Database user
    #[arg(long = "db-user", env = "DB_USER", default_value = "bookstore_user")]
    pub user: String,

    /// Database password
    #[arg(
        long = "db-password",
        env = "DB_PASSWORD",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    pub password: String,

    /// Maximum open connections
    #[arg(long = "db-max-connections", env = "DB_MAX_CONNECTIONS", default_value_t = 25)]
    pub max_connections: u32,

    /// Minimum idle connections
    #[arg(long = "db-min-connections", env = "DB_MIN_CONNECTIONS", default_value_t = 0)]
    pub min_connections: u32,

    /// Maximum connection lifetime in seconds
    #[arg(
        long = "db-max-lifetime-seconds",
        env = "DB_MAX_LIFETIME_SECONDS",
        default_value_t = 300
    )]
    pub max_lifetime_seconds: u64,
}

impl Debug for ConnectionSettings {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ConnectionSettings")
            .field("database_url", &self.database_url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("max_lifetime_seconds", &self.max_lifetime_seconds)
            .finish()
    }
}

impl ConnectionSettings {
    /// Resolve connect options, preferring `database_url` when set.
    ///
    /// # Errors
    ///
    /// Returns an error when `database_url` cannot be parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = self.database_url.as_deref().filter(|url| !url.is_empty()) {
            return url.parse();
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.name)
            .username(&self.user)
            .password(&self.password))
    }

    #[must_use]
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .max_lifetime(Duration::from_secs(self.max_lifetime_seconds))
    }
}

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Open a pool from connection settings and verify it with one connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings are invalid or the store is unreachable.
    pub async fn connect(settings: &ConnectionSettings) -> Result<Self, sqlx::Error> {
        let options = settings.connect_options()?;

        let pool = settings.pool_options().connect_with(options).await?;

        info!(
            max_connections = settings.max_connections,
            min_connections = settings.min_connections,
            max_lifetime_seconds = settings.max_lifetime_seconds,
            "database pool ready"
        );

        Ok(Self::new(pool))
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;

        info!("database pool closed");
    }
}
