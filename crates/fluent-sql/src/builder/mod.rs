//! Fluent statement builder.
//!
//! A [`QueryBuilder`] holds the table name and the statement text built so
//! far. `insert`/`select`/`update`/`delete` start a statement and replace the
//! text; every other call appends one fragment. Clauses appear in call order;
//! nothing is reordered or re-validated, so the caller is responsible for a
//! SQL-valid sequence (WHERE before ORDER BY, LIMIT before OFFSET, ...).
//!
//! Calls that validate input return `SqlResult<&mut Self>`. A failing call
//! appends nothing, but the statement it belonged to should be abandoned.
//!
//! One builder is one statement. Mutation needs `&mut self`, so sharing a
//! builder across threads requires external synchronization; build one
//! statement per instance instead.
//!
//! # Example
//! ```
//! use fluent_sql::{Order, Predicate, table};
//!
//! let mut qb = table("users");
//! qb.select(["id", "name"])
//!     .where_([Predicate::gt("age", 30), Predicate::like("name", "Jo%")])?
//!     .order_by([Order::desc("age")])?
//!     .limit(10);
//!
//! assert_eq!(
//!     qb.query(),
//!     "SELECT id,name FROM users WHERE age > 30 AND name LIKE 'Jo%' ORDER BY age DESC LIMIT 10"
//! );
//! # Ok::<(), fluent_sql::SqlError>(())
//! ```

use crate::clause::{Assignment, Columns, Having, Order};
use crate::client::{Connection, Record};
use crate::error::{SqlError, SqlResult};
use crate::join::{Join, render_join};
use crate::predicate::{Predicate, render_predicate};
use crate::value::Scalar;
use std::fmt;

/// Start a builder for `table`.
pub fn table(name: impl Into<String>) -> QueryBuilder {
    let mut qb = QueryBuilder::new();
    qb.table(name);
    qb
}

/// Statement builder; see the [module docs](self).
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    table: String,
    text: String,
}

impl QueryBuilder {
    /// Create an empty builder. Call [`table`](Self::table) before any
    /// clause-producing method.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table the statement targets.
    pub fn table(&mut self, name: impl Into<String>) -> &mut Self {
        self.table = name.into();
        self
    }

    // ==================== Statements ====================

    /// `INSERT INTO <table> (<c1,c2>) VALUES ('<v1>','<v2>')`.
    ///
    /// Columns keep the iteration order of `values`. Every value is quoted,
    /// numbers and NULL (`'null'`) included.
    pub fn insert<I, C, V>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
        C: Into<String>,
        V: Into<Scalar>,
    {
        let (columns, literals): (Vec<String>, Vec<String>) = values
            .into_iter()
            .map(|(col, val)| (col.into(), val.into().quoted()))
            .unzip();
        let text = format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            columns.join(","),
            literals.join(",")
        );
        self.begin_statement(text)
    }

    /// `SELECT <columns> FROM <table>`.
    pub fn select(&mut self, columns: impl Into<Columns>) -> &mut Self {
        let text = format!("SELECT {} FROM {}", columns.into().to_sql(), self.table);
        self.begin_statement(text)
    }

    /// `SELECT * FROM <table>`.
    pub fn select_all(&mut self) -> &mut Self {
        self.select(Columns::All)
    }

    /// `UPDATE <table> SET <c1> = <v1>, <c2> = <v2>`, with number-sniffed values.
    pub fn update<I>(&mut self, assignments: I) -> &mut Self
    where
        I: IntoIterator<Item = Assignment>,
    {
        let sets: Vec<String> = assignments.into_iter().map(|a| a.to_sql()).collect();
        let text = format!("UPDATE {} SET {}", self.table, sets.join(", "));
        self.begin_statement(text)
    }

    /// `DELETE FROM <table>`.
    pub fn delete(&mut self) -> &mut Self {
        let text = format!("DELETE FROM {}", self.table);
        self.begin_statement(text)
    }

    // ==================== Modifiers ====================

    /// Append one ` <KIND> JOIN <t> ON <table>.<c> <op> <t>.<c>` per join.
    pub fn join<I>(&mut self, joins: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = Join>,
    {
        let fragments = joins
            .into_iter()
            .map(|join| render_join(&self.table, &join))
            .collect::<SqlResult<Vec<_>>>()
            .map_err(rejected)?;
        for fragment in fragments {
            self.text.push_str(&fragment);
        }
        Ok(self)
    }

    /// Append ` WHERE <p1> AND <p2> ...`.
    pub fn where_<I>(&mut self, predicates: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = Predicate>,
    {
        let parts = render_predicates(predicates)?;
        self.push(" WHERE ");
        self.push(&parts.join(" AND "));
        Ok(self)
    }

    /// Append ` OR <p1> OR <p2> ...`. Meant to follow [`where_`](Self::where_);
    /// it does not open a WHERE clause of its own.
    pub fn or_where<I>(&mut self, predicates: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = Predicate>,
    {
        let parts = render_predicates(predicates)?;
        self.push(" OR ");
        self.push(&parts.join(" OR "));
        Ok(self)
    }

    /// Append negated predicates: ` WHERE NOT <p1> AND NOT <p2>` when the
    /// text has no `WHERE` yet, otherwise ` NOT <p1> AND NOT <p2>`.
    ///
    /// The check is a plain substring search over the accumulated text.
    pub fn not_where<I>(&mut self, predicates: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = Predicate>,
    {
        let parts = render_predicates(predicates)?;
        if self.text.contains("WHERE") {
            self.push(" NOT ");
        } else {
            self.push(" WHERE NOT ");
        }
        self.push(&parts.join(" AND NOT "));
        Ok(self)
    }

    /// Append ` ORDER BY <c1> <O1>,<c2> <O2>`.
    pub fn order_by<I>(&mut self, orders: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = Order>,
    {
        let parts = orders
            .into_iter()
            .map(|order| order.to_sql())
            .collect::<SqlResult<Vec<_>>>()
            .map_err(rejected)?;
        self.push(" ORDER BY ");
        self.push(&parts.join(","));
        Ok(self)
    }

    /// Append ` HAVING <f1> <op> <v1> AND ...` with bare values.
    pub fn having<I>(&mut self, conditions: I) -> SqlResult<&mut Self>
    where
        I: IntoIterator<Item = Having>,
    {
        let parts = conditions
            .into_iter()
            .map(|having| having.to_sql())
            .collect::<SqlResult<Vec<_>>>()
            .map_err(rejected)?;
        self.push(" HAVING ");
        self.push(&parts.join(" AND "));
        Ok(self)
    }

    /// Append ` LIMIT <n>`.
    pub fn limit(&mut self, n: i64) -> &mut Self {
        self.push(&format!(" LIMIT {n}"))
    }

    /// Append ` OFFSET <n>`.
    pub fn offset(&mut self, n: i64) -> &mut Self {
        self.push(&format!(" OFFSET {n}"))
    }

    /// Append ` GROUP BY <c1,c2>`.
    pub fn group_by<I, S>(&mut self, columns: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        self.push(" GROUP BY ");
        self.push(&columns.join(","))
    }

    // ==================== Accessors ====================

    /// The current table name.
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The statement text built so far.
    pub fn query(&self) -> &str {
        &self.text
    }

    /// Consume the builder, returning the statement text.
    pub fn into_query(self) -> String {
        self.text
    }

    /// Run the statement on `conn` and return its rows.
    pub async fn fetch_all<C>(&self, conn: &C) -> SqlResult<Vec<Record>>
    where
        C: Connection,
    {
        conn.execute(&self.text).await
    }

    fn begin_statement(&mut self, text: String) -> &mut Self {
        tracing::trace!(target: "fluent_sql.builder", table = %self.table, "new statement");
        self.text = text;
        self
    }

    fn push(&mut self, fragment: &str) -> &mut Self {
        self.text.push_str(fragment);
        self
    }
}

impl fmt::Display for QueryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn render_predicates<I>(predicates: I) -> SqlResult<Vec<String>>
where
    I: IntoIterator<Item = Predicate>,
{
    predicates
        .into_iter()
        .map(|p| render_predicate(&p))
        .collect::<SqlResult<Vec<_>>>()
        .map_err(rejected)
}

fn rejected(err: SqlError) -> SqlError {
    tracing::debug!(target: "fluent_sql.builder", error = %err, "builder call rejected");
    err
}
