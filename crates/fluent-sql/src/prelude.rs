//! Common imports:
//!
//! ```
//! use fluent_sql::prelude::*;
//! ```

pub use crate::{
    Assignment, Columns, Connection, ConnectionConfig, Having, Join, Order, Predicate,
    QueryBuilder, Record, SqlError, SqlResult, table,
};

#[cfg(feature = "pool")]
pub use crate::{PgConnection, create_pool};
