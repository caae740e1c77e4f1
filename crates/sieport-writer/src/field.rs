//! Record parameters and field escaping.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::cp437;

/// One parameter position on a record line.
///
/// A parameter is a scalar, a brace-delimited list, or omitted. Modelling
/// the three cases as a closed variant keeps the record renderer total:
/// there is no "unexpected parameter type" left to fail on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A scalar value, escaped and quoted as needed on output.
    Value(String),
    /// A brace-delimited list; items are escaped individually and the list
    /// itself is never quoted.
    List(Vec<String>),
    /// An omitted value. Omitted parameters at the end of a line are
    /// trimmed; one followed by a set parameter renders as `""`.
    Empty,
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Self::Value(value.to_owned())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}

impl From<u32> for Field {
    fn from(value: u32) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<i32> for Field {
    fn from(value: i32) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<Decimal> for Field {
    fn from(value: Decimal) -> Self {
        Self::Value(value.to_string())
    }
}

/// Dates render as 8-digit `YYYYMMDD`.
impl From<NaiveDate> for Field {
    fn from(value: NaiveDate) -> Self {
        Self::Value(value.format("%Y%m%d").to_string())
    }
}

impl From<Vec<String>> for Field {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Empty, Into::into)
    }
}

/// Escape a single scalar value into a wire token.
///
/// Characters without a code page 437 representation are dropped, control
/// characters (0-31 and 127) are stripped, an embedded quote becomes `\"`,
/// and the token is wrapped in double quotes when it contains a space or
/// ends up empty.
#[must_use]
pub fn escape_field(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut needs_quotes = false;
    for c in value.chars() {
        let Some(byte) = cp437::encode_char(c) else {
            continue;
        };
        match byte {
            0..=31 | 127 => {}
            b'"' => escaped.push_str("\\\""),
            b' ' => {
                needs_quotes = true;
                escaped.push(' ');
            }
            _ => escaped.push(c),
        }
    }
    if needs_quotes || escaped.is_empty() {
        format!("\"{escaped}\"")
    } else {
        escaped
    }
}
