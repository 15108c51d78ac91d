//! Error types for fluent-sql

use thiserror::Error;

/// Result type alias for fluent-sql operations
pub type SqlResult<T> = Result<T, SqlError>;

/// Errors raised while building statement text or executing it.
#[derive(Debug, Error)]
pub enum SqlError {
    /// Operator outside the whitelist, or a list value paired with an
    /// operator other than `IN`/`BETWEEN`.
    #[error("Invalid operator: {0}")]
    InvalidOperator(String),

    /// Join orientation is not INNER, LEFT, RIGHT or UNION.
    #[error("Invalid join method: {0}")]
    InvalidJoinMethod(String),

    /// LIKE used with a value that has no `%` or `_` wildcard.
    #[error("Invalid value using LIKE operator, missing wildcard: {0}")]
    InvalidLikeValue(String),

    /// ORDER BY orientation other than ASC/DESC.
    #[error("Invalid orientation for ORDER BY: {0}")]
    InvalidOrientation(String),

    /// Database connection error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Statement execution error
    #[error("Query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// Unique constraint violation
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),

    /// Foreign key constraint violation
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Check constraint violation
    #[error("Check constraint violation: {0}")]
    CheckViolation(String),

    /// Row to record conversion error
    #[error("Decode error on column '{column}': {message}")]
    Decode { column: String, message: String },

    /// Pool error
    #[cfg(feature = "pool")]
    #[error("Pool error: {0}")]
    Pool(String),

    /// Invalid or missing configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SqlError {
    /// Create a decode error for a specific column
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// True for the errors raised while assembling statement text.
    ///
    /// These are fatal to the statement being built: the builder that
    /// returned one should be discarded.
    pub fn is_builder_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidOperator(_)
                | Self::InvalidJoinMethod(_)
                | Self::InvalidLikeValue(_)
                | Self::InvalidOrientation(_)
        )
    }

    /// True for errors coming from the execution side (connection, pool,
    /// server-reported failures and row decoding).
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Connection(_)
            | Self::Query(_)
            | Self::UniqueViolation(_)
            | Self::ForeignKeyViolation(_)
            | Self::CheckViolation(_)
            | Self::Decode { .. } => true,
            #[cfg(feature = "pool")]
            Self::Pool(_) => true,
            _ => false,
        }
    }

    /// Parse a tokio_postgres error into a more specific SqlError
    pub fn from_db_error(err: tokio_postgres::Error) -> Self {
        if let Some(db_err) = err.as_db_error() {
            let constraint = db_err.constraint().unwrap_or("unknown");
            let message = db_err.message();

            match db_err.code().code() {
                "23505" => return Self::UniqueViolation(format!("{}: {}", constraint, message)),
                "23503" => {
                    return Self::ForeignKeyViolation(format!("{}: {}", constraint, message));
                }
                "23514" => return Self::CheckViolation(format!("{}: {}", constraint, message)),
                _ => {}
            }
        }
        Self::Query(err)
    }
}

#[cfg(feature = "pool")]
impl From<deadpool_postgres::PoolError> for SqlError {
    fn from(err: deadpool_postgres::PoolError) -> Self {
        Self::Pool(err.to_string())
    }
}
