//! Scalar values and their SQL literal rendering.
//!
//! Literals are embedded directly in the statement text. Nothing here escapes
//! quote characters: a value containing `'` produces text that ends the
//! literal early. Callers that handle untrusted input need a parameterized
//! layer instead of this builder.

use chrono::{DateTime, Utc};
use std::fmt;

/// A single value that can appear in a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Timestamp(DateTime<Utc>),
}

impl Scalar {
    /// The value's plain string form, without any quoting.
    pub fn raw_text(&self) -> String {
        match self {
            Scalar::Null => "NULL".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Timestamp(ts) => ts.to_rfc3339(),
        }
    }

    /// Whether the value renders without quotes.
    ///
    /// Numbers, booleans and NULL are bare. Text is bare only when it reads
    /// as a finite number (`"12"`, `" 3.5 "`, `"1e3"`); everything else,
    /// timestamps included, is quoted.
    pub fn is_bare(&self) -> bool {
        match self {
            Scalar::Null | Scalar::Bool(_) | Scalar::Int(_) => true,
            Scalar::Float(f) => f.is_finite(),
            Scalar::Text(s) => looks_numeric(s),
            Scalar::Timestamp(_) => false,
        }
    }

    /// Render as an unconditionally quoted literal (`'1'`, `'x'`).
    ///
    /// Every variant is quoted; NULL becomes the text `'null'`.
    pub fn quoted(&self) -> String {
        match self {
            Scalar::Null => "'null'".to_string(),
            _ => format!("'{}'", self.raw_text()),
        }
    }
}

/// Render a scalar as a SQL literal, number-sniffing its string form.
///
/// ```
/// use fluent_sql::{format_value, Scalar};
///
/// assert_eq!(format_value(&Scalar::from(20)), "20");
/// assert_eq!(format_value(&Scalar::from("12")), "12");
/// assert_eq!(format_value(&Scalar::from("John")), "'John'");
/// ```
pub fn format_value(value: &Scalar) -> String {
    if value.is_bare() {
        value.raw_text()
    } else {
        format!("'{}'", value.raw_text())
    }
}

fn looks_numeric(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return false;
    }
    // f64's parser also takes "inf"/"nan", which are not SQL numbers.
    trimmed.parse::<f64>().is_ok_and(|n| n.is_finite())
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_value(self))
    }
}

macro_rules! scalar_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    Scalar::Int(i64::from(v))
                }
            }
        )*
    };
}

scalar_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Values beyond i64 keep their exact digits as text, which still renders bare.
macro_rules! scalar_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(v: $t) -> Self {
                    i64::try_from(v).map_or_else(|_| Scalar::Text(v.to_string()), Scalar::Int)
                }
            }
        )*
    };
}

scalar_from_wide_int!(u64, usize, isize);

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(f64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

impl From<&String> for Scalar {
    fn from(v: &String) -> Self {
        Scalar::Text(v.clone())
    }
}

impl From<DateTime<Utc>> for Scalar {
    fn from(v: DateTime<Utc>) -> Self {
        Scalar::Timestamp(v)
    }
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
    fn from(v: Option<T>) -> Self {
        v.map_or(Scalar::Null, Into::into)
    }
}

/// JSON scalars map onto their natural counterpart; arrays and objects are
/// carried as their JSON text.
impl From<serde_json::Value> for Scalar {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Scalar::Int(i),
                None => Scalar::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Scalar::Text(s),
            other => Scalar::Text(other.to_string()),
        }
    }
}
