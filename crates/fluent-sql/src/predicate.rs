//! Filter predicates for WHERE / OR / NOT fragments.
//!
//! A [`Predicate`] is `column`, an optional operator and either a single
//! scalar or a list of scalars. Lists are only meaningful for `IN` (rendered
//! as a parenthesized list) and `BETWEEN` (rendered as `a AND b`).
//!
//! # Example
//! ```
//! use fluent_sql::Predicate;
//!
//! let p = Predicate::new("age", 1).op(">");
//! assert_eq!(fluent_sql::render_predicate(&p).unwrap(), "age > 1");
//!
//! let p = Predicate::new("age", 1);
//! assert_eq!(fluent_sql::render_predicate(&p).unwrap(), "age=1");
//! ```

use crate::error::{SqlError, SqlResult};
use crate::operator::Operator;
use crate::value::{Scalar, format_value};
use chrono::{DateTime, Utc};

/// Right-hand side of a predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl From<Scalar> for PredicateValue {
    fn from(v: Scalar) -> Self {
        PredicateValue::Scalar(v)
    }
}

macro_rules! predicate_value_from_scalar {
    ($($t:ty),*) => {
        $(
            impl From<$t> for PredicateValue {
                fn from(v: $t) -> Self {
                    PredicateValue::Scalar(Scalar::from(v))
                }
            }
        )*
    };
}

predicate_value_from_scalar!(
    i8, i16, i32, i64, u8, u16, u32, u64, usize, isize, f32, f64, bool, &str, String, &String,
    DateTime<Utc>
);

impl<T: Into<Scalar>> From<Vec<T>> for PredicateValue {
    fn from(values: Vec<T>) -> Self {
        PredicateValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Scalar>, const N: usize> From<[T; N]> for PredicateValue {
    fn from(values: [T; N]) -> Self {
        PredicateValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// One filter condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    /// Operator text, validated against the whitelist at render time.
    /// `None` renders as a bare `=`.
    pub operator: Option<String>,
    pub value: PredicateValue,
}

impl Predicate {
    /// Condition using the default (bare `=`) operator.
    pub fn new(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self {
            column: column.into(),
            operator: None,
            value: value.into(),
        }
    }

    /// Condition with an explicit operator.
    pub fn with_op(
        column: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<PredicateValue>,
    ) -> Self {
        Self::new(column, value).op(operator)
    }

    /// Set the operator.
    pub fn op(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// `column = value` with an explicit (padded) `=`.
    pub fn eq(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self::with_op(column, "=", value)
    }

    /// `column <> value`
    pub fn ne(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self::with_op(column, "<>", value)
    }

    /// `column > value`
    pub fn gt(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self::with_op(column, ">", value)
    }

    /// `column >= value`
    pub fn gte(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self::with_op(column, ">=", value)
    }

    /// `column < value`
    pub fn lt(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self::with_op(column, "<", value)
    }

    /// `column <= value`
    pub fn lte(column: impl Into<String>, value: impl Into<PredicateValue>) -> Self {
        Self::with_op(column, "<=", value)
    }

    /// `column LIKE pattern`; the pattern must contain `%` or `_`.
    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        let pattern: String = pattern.into();
        Self::with_op(column, "LIKE", pattern)
    }

    /// `column IN (v1,v2,...)`
    pub fn in_list<T: Into<Scalar>>(column: impl Into<String>, values: Vec<T>) -> Self {
        Self::with_op(column, "IN", values)
    }

    /// `column BETWEEN low AND high`
    pub fn between(
        column: impl Into<String>,
        low: impl Into<Scalar>,
        high: impl Into<Scalar>,
    ) -> Self {
        Self::with_op(column, "BETWEEN", vec![low.into(), high.into()])
    }
}

/// Render one predicate as `<column><operator><value>`.
///
/// List values expand for `IN` and `BETWEEN` only. `BETWEEN` joins every
/// element with `" AND "`; exactly two elements is the only well-formed case.
pub fn render_predicate(predicate: &Predicate) -> SqlResult<String> {
    let op = Operator::parse_opt(predicate.operator.as_deref())?;
    let rendered_op = Operator::render(op);
    let column = &predicate.column;

    match &predicate.value {
        PredicateValue::List(values) => {
            let formatted = values.iter().map(format_value);
            let rendered = match op {
                Some(Operator::In) => format!("({})", formatted.collect::<Vec<_>>().join(",")),
                Some(Operator::Between) => formatted.collect::<Vec<_>>().join(" AND "),
                other => {
                    let name = other.map_or("=", |o| o.as_str());
                    return Err(SqlError::InvalidOperator(format!(
                        "{name} cannot take a list value"
                    )));
                }
            };
            Ok(format!("{column}{rendered_op}{rendered}"))
        }
        PredicateValue::Scalar(value) => {
            if op == Some(Operator::Like) {
                check_like_wildcard(value)?;
            }
            Ok(format!("{column}{rendered_op}{}", format_value(value)))
        }
    }
}

fn check_like_wildcard(value: &Scalar) -> SqlResult<()> {
    let text = value.raw_text();
    if text.contains('%') || text.contains('_') {
        Ok(())
    } else {
        Err(SqlError::InvalidLikeValue(text))
    }
}
