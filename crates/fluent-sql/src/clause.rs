//! Descriptors for the smaller clauses: projected columns, ORDER BY,
//! HAVING and UPDATE ... SET.

use crate::error::{SqlError, SqlResult};
use crate::operator::Operator;
use crate::value::{Scalar, format_value};
use std::str::FromStr;

/// Projection for `SELECT`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Columns {
    /// `*`
    #[default]
    All,
    /// A caller-written column expression, used verbatim.
    Raw(String),
    /// Column names, comma-joined without spaces.
    List(Vec<String>),
}

impl Columns {
    pub fn to_sql(&self) -> String {
        match self {
            Columns::All => "*".to_string(),
            Columns::Raw(expr) => expr.clone(),
            Columns::List(cols) => cols.join(","),
        }
    }
}

impl From<&str> for Columns {
    fn from(s: &str) -> Self {
        if s.trim() == "*" {
            Columns::All
        } else {
            Columns::Raw(s.to_string())
        }
    }
}

impl From<String> for Columns {
    fn from(s: String) -> Self {
        Columns::from(s.as_str())
    }
}

impl From<Vec<String>> for Columns {
    fn from(cols: Vec<String>) -> Self {
        Columns::List(cols)
    }
}

impl From<Vec<&str>> for Columns {
    fn from(cols: Vec<&str>) -> Self {
        Columns::List(cols.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Columns {
    fn from(cols: &[&str]) -> Self {
        Columns::List(cols.iter().map(|c| c.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Columns {
    fn from(cols: [&str; N]) -> Self {
        Columns::List(cols.iter().map(|c| c.to_string()).collect())
    }
}

/// ORDER BY direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Asc,
    Desc,
}

impl Orientation {
    /// Exact, case-sensitive match: only `ASC` and `DESC` are accepted.
    pub fn parse(input: &str) -> SqlResult<Self> {
        match input {
            "ASC" => Ok(Orientation::Asc),
            "DESC" => Ok(Orientation::Desc),
            _ => Err(SqlError::InvalidOrientation(input.to_string())),
        }
    }

    pub fn to_sql(&self) -> &'static str {
        match self {
            Orientation::Asc => "ASC",
            Orientation::Desc => "DESC",
        }
    }
}

impl FromStr for Orientation {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// One ORDER BY item. A missing orientation means ASC.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub column: String,
    pub orientation: Option<String>,
}

impl Order {
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            orientation: None,
        }
    }

    pub fn asc(column: impl Into<String>) -> Self {
        Self::new(column).orientation("ASC")
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self::new(column).orientation("DESC")
    }

    pub fn orientation(mut self, orientation: impl Into<String>) -> Self {
        self.orientation = Some(orientation.into());
        self
    }

    /// `<column> <ASC|DESC>`
    pub fn to_sql(&self) -> SqlResult<String> {
        let orientation = match self.orientation.as_deref() {
            Some(text) => Orientation::parse(text)?,
            None => Orientation::default(),
        };
        Ok(format!("{} {}", self.column, orientation.to_sql()))
    }
}

/// One HAVING condition, meant for aggregate comparisons such as
/// `COUNT(id) > 1`. The value is written bare.
#[derive(Debug, Clone, PartialEq)]
pub struct Having {
    pub field: String,
    pub operator: Option<String>,
    pub value: Scalar,
}

impl Having {
    pub fn new(field: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            field: field.into(),
            operator: None,
            value: value.into(),
        }
    }

    pub fn with_op(
        field: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<Scalar>,
    ) -> Self {
        Self::new(field, value).op(operator)
    }

    pub fn op(mut self, operator: impl Into<String>) -> Self {
        self.operator = Some(operator.into());
        self
    }

    /// `<field><op><value>`, with the same padding rule as predicates.
    pub fn to_sql(&self) -> SqlResult<String> {
        let op = Operator::parse_opt(self.operator.as_deref())?;
        Ok(format!(
            "{}{}{}",
            self.field,
            Operator::render(op),
            self.value.raw_text()
        ))
    }
}

/// One `SET column = value` item of an UPDATE.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub column: String,
    pub new_value: Scalar,
}

impl Assignment {
    pub fn new(column: impl Into<String>, new_value: impl Into<Scalar>) -> Self {
        Self {
            column: column.into(),
            new_value: new_value.into(),
        }
    }

    pub fn to_sql(&self) -> String {
        format!("{} = {}", self.column, format_value(&self.new_value))
    }
}
