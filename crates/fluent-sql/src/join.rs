//! JOIN descriptors.

use crate::error::{SqlError, SqlResult};
use crate::operator::Operator;
use std::fmt;
use std::str::FromStr;

/// The supported join orientations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOrientation {
    Inner,
    Left,
    Right,
    Union,
}

impl JoinOrientation {
    /// Parse `INNER`, `left join`, ` Right ` etc. The trailing `JOIN` word is
    /// optional and case is ignored.
    pub fn parse(input: &str) -> SqlResult<Self> {
        let normalized = input.trim().to_ascii_uppercase();
        let keyword = normalized
            .strip_suffix("JOIN")
            .map(str::trim_end)
            .unwrap_or(normalized.as_str());
        match keyword {
            "INNER" => Ok(JoinOrientation::Inner),
            "LEFT" => Ok(JoinOrientation::Left),
            "RIGHT" => Ok(JoinOrientation::Right),
            "UNION" => Ok(JoinOrientation::Union),
            _ => Err(SqlError::InvalidJoinMethod(input.to_string())),
        }
    }

    /// SQL keyword, e.g. `LEFT JOIN`.
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinOrientation::Inner => "INNER JOIN",
            JoinOrientation::Left => "LEFT JOIN",
            JoinOrientation::Right => "RIGHT JOIN",
            JoinOrientation::Union => "UNION JOIN",
        }
    }

    /// Keyword with one space on each side, ready to append.
    pub fn padded(&self) -> String {
        format!(" {} ", self.to_sql())
    }
}

impl FromStr for JoinOrientation {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for JoinOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// One join: `<orientation> <table> ON <this>.<this_column> <op> <table>.<other_column>`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub orientation: String,
    pub table: String,
    pub this_column: String,
    pub operator: String,
    pub other_column: String,
}

impl Join {
    pub fn new(
        orientation: impl Into<String>,
        table: impl Into<String>,
        this_column: impl Into<String>,
        operator: impl Into<String>,
        other_column: impl Into<String>,
    ) -> Self {
        Self {
            orientation: orientation.into(),
            table: table.into(),
            this_column: this_column.into(),
            operator: operator.into(),
            other_column: other_column.into(),
        }
    }

    /// INNER JOIN on `this_column = other_column`.
    pub fn inner(
        table: impl Into<String>,
        this_column: impl Into<String>,
        other_column: impl Into<String>,
    ) -> Self {
        Self::new("INNER", table, this_column, "=", other_column)
    }

    /// LEFT JOIN on `this_column = other_column`.
    pub fn left(
        table: impl Into<String>,
        this_column: impl Into<String>,
        other_column: impl Into<String>,
    ) -> Self {
        Self::new("LEFT", table, this_column, "=", other_column)
    }

    /// RIGHT JOIN on `this_column = other_column`.
    pub fn right(
        table: impl Into<String>,
        this_column: impl Into<String>,
        other_column: impl Into<String>,
    ) -> Self {
        Self::new("RIGHT", table, this_column, "=", other_column)
    }

    /// Replace the comparison operator.
    pub fn op(mut self, operator: impl Into<String>) -> Self {
        self.operator = operator.into();
        self
    }
}

/// Render one join against the builder's current table, with its leading space.
pub fn render_join(this_table: &str, join: &Join) -> SqlResult<String> {
    let orientation = JoinOrientation::parse(&join.orientation)?;
    let operator = Operator::parse(&join.operator)?;
    Ok(format!(
        "{}{} ON {}.{} {} {}.{}",
        orientation.padded(),
        join.table,
        this_table,
        join.this_column,
        operator,
        join.table,
        join.other_column
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orientation_accepts_keyword_and_phrase() {
        assert_eq!(JoinOrientation::parse("INNER").unwrap(), JoinOrientation::Inner);
        assert_eq!(JoinOrientation::parse("inner join").unwrap(), JoinOrientation::Inner);
        assert_eq!(JoinOrientation::parse(" Left ").unwrap(), JoinOrientation::Left);
        assert_eq!(JoinOrientation::parse("RIGHT JOIN").unwrap(), JoinOrientation::Right);
        assert_eq!(JoinOrientation::parse("union").unwrap(), JoinOrientation::Union);
    }

    #[test]
    fn orientation_rejects_unknown() {
        for bad in ["BOGUS", "FULL", "CROSS JOIN", "JOIN", ""] {
            let err = JoinOrientation::parse(bad).unwrap_err();
            assert!(matches!(err, SqlError::InvalidJoinMethod(_)), "{bad}");
        }
    }

    #[test]
    fn orientation_to_sql() {
        assert_eq!(JoinOrientation::Inner.to_sql(), "INNER JOIN");
        assert_eq!(JoinOrientation::Left.to_sql(), "LEFT JOIN");
        assert_eq!(JoinOrientation::Right.to_sql(), "RIGHT JOIN");
        assert_eq!(JoinOrientation::Union.to_sql(), "UNION JOIN");
        assert_eq!(JoinOrientation::Left.padded(), " LEFT JOIN ");
    }

    #[test]
    fn renders_on_clause_against_this_table() {
        let join = Join::inner("orders", "id", "user_id");
        assert_eq!(
            render_join("users", &join).unwrap(),
            " INNER JOIN orders ON users.id = orders.user_id"
        );

        let join = Join::new("right join", "t2", "id", ">", "id");
        assert_eq!(
            render_join("t1", &join).unwrap(),
            " RIGHT JOIN t2 ON t1.id > t2.id"
        );
    }

    #[test]
    fn render_validates_operator() {
        let join = Join::left("orders", "id", "user_id").op("~");
        assert!(matches!(
            render_join("users", &join).unwrap_err(),
            SqlError::InvalidOperator(_)
        ));
    }
}
