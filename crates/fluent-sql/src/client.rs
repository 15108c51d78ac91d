//! Execution side: anything that can run statement text and hand back rows.
//!
//! The builder never talks to a database itself. It produces text, and a
//! [`Connection`] runs it. Errors from here are returned to the caller
//! untouched.

use crate::error::{SqlError, SqlResult};
use crate::row::row_to_record;
use std::time::Instant;

/// One result row: column name to value, in column order.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Runs statement text and returns the resulting rows.
///
/// `tokio_postgres::Client` has an inherent `execute` with a different
/// signature; call through the trait there (`Connection::execute(&client, sql)`).
pub trait Connection: Send + Sync {
    /// Execute `sql` with no bound parameters.
    fn execute(&self, sql: &str) -> impl std::future::Future<Output = SqlResult<Vec<Record>>> + Send;
}

impl Connection for tokio_postgres::Client {
    async fn execute(&self, sql: &str) -> SqlResult<Vec<Record>> {
        run(self, sql).await
    }
}

#[cfg(feature = "pool")]
impl Connection for deadpool_postgres::Client {
    async fn execute(&self, sql: &str) -> SqlResult<Vec<Record>> {
        // deadpool Client -> ClientWrapper -> tokio_postgres::Client
        run(self, sql).await
    }
}

async fn run(client: &tokio_postgres::Client, sql: &str) -> SqlResult<Vec<Record>> {
    tracing::debug!(target: "fluent_sql.sql", sql = %sql, "executing statement");
    let start = Instant::now();

    let rows = client
        .query(sql, &[])
        .await
        .map_err(SqlError::from_db_error)?;
    let records = rows
        .iter()
        .map(row_to_record)
        .collect::<SqlResult<Vec<_>>>()?;

    tracing::debug!(
        target: "fluent_sql.sql",
        rows = records.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "statement finished"
    );
    Ok(records)
}
