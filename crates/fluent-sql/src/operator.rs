//! Whitelisted comparison and logical operators.
//!
//! Every operator a caller hands to the builder as text is normalized
//! (trimmed, upper-cased) and looked up in [`Operator`]. Anything outside the
//! closed set is rejected with [`SqlError::InvalidOperator`].

use crate::error::{SqlError, SqlResult};
use std::fmt;
use std::str::FromStr;

/// The operators accepted in WHERE, HAVING and JOIN ... ON fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `>`
    Gt,
    /// `<`
    Lt,
    /// `>=`
    Gte,
    /// `<=`
    Lte,
    /// `<>`
    Ne,
    And,
    Or,
    Not,
    Between,
    Like,
    In,
    All,
    Any,
    Some,
    Exists,
}

impl Operator {
    /// Every whitelisted operator, in catalog order.
    pub const ALL: [Operator; 16] = [
        Operator::Eq,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::Ne,
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Between,
        Operator::Like,
        Operator::In,
        Operator::All,
        Operator::Any,
        Operator::Some,
        Operator::Exists,
    ];

    /// Look up an operator by its textual form (case and surrounding
    /// whitespace are ignored).
    pub fn parse(input: &str) -> SqlResult<Self> {
        let normalized = input.trim().to_ascii_uppercase();
        let op = match normalized.as_str() {
            "=" => Operator::Eq,
            ">" => Operator::Gt,
            "<" => Operator::Lt,
            ">=" => Operator::Gte,
            "<=" => Operator::Lte,
            "<>" => Operator::Ne,
            "AND" => Operator::And,
            "OR" => Operator::Or,
            "NOT" => Operator::Not,
            "BETWEEN" => Operator::Between,
            "LIKE" => Operator::Like,
            "IN" => Operator::In,
            "ALL" => Operator::All,
            "ANY" => Operator::Any,
            "SOME" => Operator::Some,
            "EXISTS" => Operator::Exists,
            _ => return Err(SqlError::InvalidOperator(input.to_string())),
        };
        Ok(op)
    }

    /// Canonical SQL keyword.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Ne => "<>",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Between => "BETWEEN",
            Operator::Like => "LIKE",
            Operator::In => "IN",
            Operator::All => "ALL",
            Operator::Any => "ANY",
            Operator::Some => "SOME",
            Operator::Exists => "EXISTS",
        }
    }

    /// Keyword padded with one space on each side, e.g. `" > "`.
    pub fn padded(&self) -> String {
        format!(" {} ", self.as_str())
    }

    /// Render an optional operator the way predicates print it.
    ///
    /// An explicit operator is padded; a missing one falls back to a bare
    /// `=` with no surrounding spaces (`age=1` vs `age > 1`).
    pub fn render(op: Option<Operator>) -> String {
        match op {
            Some(op) => op.padded(),
            None => "=".to_string(),
        }
    }

    /// Parse an optional operator, passing `None` through.
    pub fn parse_opt(input: Option<&str>) -> SqlResult<Option<Self>> {
        input.map(Self::parse).transpose()
    }
}

impl FromStr for Operator {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_whitelisted_keyword() {
        for op in Operator::ALL {
            assert_eq!(Operator::parse(op.as_str()).unwrap(), op);
        }
    }

    #[test]
    fn parse_ignores_case_and_whitespace() {
        assert_eq!(Operator::parse("like").unwrap(), Operator::Like);
        assert_eq!(Operator::parse("  In ").unwrap(), Operator::In);
        assert_eq!("between".parse::<Operator>().unwrap(), Operator::Between);
    }

    #[test]
    fn rejects_unknown_operators() {
        for bad in ["!=", "ILIKE", "~", "", "= ="] {
            let err = Operator::parse(bad).unwrap_err();
            assert!(matches!(err, SqlError::InvalidOperator(ref s) if s == bad));
        }
    }

    #[test]
    fn render_pads_explicit_and_not_default() {
        assert_eq!(Operator::render(Some(Operator::Gt)), " > ");
        assert_eq!(Operator::render(Some(Operator::Eq)), " = ");
        assert_eq!(Operator::render(None), "=");
    }

    #[test]
    fn parse_opt_passes_none_through() {
        assert_eq!(Operator::parse_opt(None).unwrap(), None);
        assert_eq!(Operator::parse_opt(Some("like")).unwrap(), Some(Operator::Like));
        assert!(Operator::parse_opt(Some("??")).is_err());
    }
}
