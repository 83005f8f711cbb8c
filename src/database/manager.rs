use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::OnceLock;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Errors from DatabaseManager
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Connection pool for the shared application database. Tenancy is enforced
/// per-row via tenant_id columns, so one pool serves every tenant.
pub struct DatabaseManager;

impl DatabaseManager {
    fn cell() -> &'static OnceLock<PgPool> {
        static POOL: OnceLock<PgPool> = OnceLock::new();
        &POOL
    }

    /// Get the application pool, creating it lazily on first use.
    pub fn pool() -> Result<PgPool, DatabaseError> {
        if let Some(pool) = Self::cell().get() {
            return Ok(pool.clone());
        }

        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| DatabaseError::ConfigMissing("DATABASE_URL"))?;
        url::Url::parse(&database_url).map_err(|_| DatabaseError::InvalidDatabaseUrl)?;

        let db_config = &crate::config::config().database;
        let pool = PgPoolOptions::new()
            .max_connections(db_config.max_connections)
            .acquire_timeout(Duration::from_secs(db_config.acquire_timeout_secs))
            .connect_lazy(&database_url)?;

        // Lost race just returns the winner's pool
        match Self::cell().set(pool.clone()) {
            Ok(()) => {
                info!("Created application database pool");
                Ok(pool)
            }
            Err(_) => Ok(Self::cell().get().expect("pool initialized").clone()),
        }
    }
}
