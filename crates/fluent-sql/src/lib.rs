//! # fluent-sql
//!
//! A fluent builder that assembles SQL statement text from chained calls,
//! plus a thin PostgreSQL adapter to run it.
//!
//! - **Text first**: the builder only produces a string; nothing is reordered
//!   or re-validated after a call succeeds
//! - **Whitelisted vocabulary**: operators, join kinds and ORDER BY directions
//!   are checked, and a LIKE pattern must carry a wildcard
//! - **Pluggable execution**: anything implementing [`Connection`] can run
//!   the text; a deadpool-backed [`PgConnection`] ships behind the `pool`
//!   feature
//!
//! Values are inlined into the text. Quotes inside values are **not**
//! escaped, so never feed untrusted input through the builder.
//!
//! ```
//! use fluent_sql::{Assignment, Predicate, table};
//!
//! let mut qb = table("users");
//! qb.update([Assignment::new("name", "bob"), Assignment::new("age", 12)])
//!     .where_([Predicate::eq("id", 7)])?;
//! assert_eq!(qb.query(), "UPDATE users SET name = 'bob', age = 12 WHERE id = 7");
//! # Ok::<(), fluent_sql::SqlError>(())
//! ```

pub mod builder;
pub mod clause;
pub mod client;
pub mod config;
pub mod error;
pub mod join;
pub mod operator;
pub mod predicate;
pub mod prelude;
pub mod row;
pub mod value;

pub use builder::{QueryBuilder, table};
pub use clause::{Assignment, Columns, Having, Order, Orientation};
pub use client::{Connection, Record};
pub use config::ConnectionConfig;
pub use error::{SqlError, SqlResult};
pub use join::{Join, JoinOrientation, render_join};
pub use operator::Operator;
pub use predicate::{Predicate, PredicateValue, render_predicate};
pub use row::row_to_record;
pub use value::{Scalar, format_value};

#[cfg(feature = "pool")]
pub mod pool;

#[cfg(feature = "pool")]
pub use pool::{PgConnection, create_pool};
