//! Pooled PostgreSQL connection.

use crate::client::{Connection, Record};
use crate::config::ConnectionConfig;
use crate::error::{SqlError, SqlResult};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use tokio_postgres::NoTls;

/// Create a connection pool from `config`.
///
/// Connections are opened lazily on first checkout, so this does not touch
/// the network.
pub fn create_pool(config: &ConnectionConfig) -> SqlResult<Pool> {
    config.validate()?;
    let pg_config = config.to_pg_config()?;

    let mgr = Manager::from_config(
        pg_config,
        NoTls,
        ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        },
    );
    let pool = Pool::builder(mgr)
        .max_size(config.max_connections)
        .runtime(Runtime::Tokio1)
        .create_timeout(Some(config.connect_timeout()))
        .wait_timeout(Some(config.wait_timeout()))
        .build()
        .map_err(|e| SqlError::Pool(e.to_string()))?;

    tracing::info!(
        target: "fluent_sql.pool",
        host = %config.host,
        database = %config.database,
        from_url = config.url.is_some(),
        max_size = config.max_connections,
        "connection pool created"
    );
    Ok(pool)
}

/// A [`Connection`] backed by a deadpool pool. Cloning shares the pool.
///
/// Each `execute` checks out a client, runs the statement and returns the
/// client to the pool.
#[derive(Clone)]
pub struct PgConnection {
    pool: Pool,
}

impl PgConnection {
    pub fn new(config: &ConnectionConfig) -> SqlResult<Self> {
        Ok(Self::from_pool(create_pool(config)?))
    }

    /// Build from `DATABASE_URL` / `DB_*` environment variables.
    pub fn from_env() -> SqlResult<Self> {
        Self::new(&ConnectionConfig::from_env()?)
    }

    pub fn from_pool(pool: Pool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool {
        &self.pool
    }
}

impl Connection for PgConnection {
    async fn execute(&self, sql: &str) -> SqlResult<Vec<Record>> {
        let client = self.pool.get().await?;
        Connection::execute(&client, sql).await
    }
}
