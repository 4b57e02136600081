//! Typed cell values and column type hints
//!
//! SWMM identifiers are frequently all-digit strings (`"104"` is a perfectly
//! good node name), so whether a field is text or a number is a property of
//! the column, never of the field itself. [ColumnType] carries that decision
//! and [Value] carries the result.

// external crates
use serde::ser::{Serialize, Serializer};

/// A single typed cell in a [Table](crate::table::Table)
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Missing field - rows shorter than the column set pad with this
    Empty,
    /// Whole number
    Int(i64),
    /// Floating point number
    Real(f64),
    /// Untyped text, also the home of numeric-looking identifiers
    Text(String),
}

impl Value {
    /// Text content, if this is a text cell
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer content, if this is an integer cell
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric content as f64, widening integers
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Real(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// True for the padding variant
    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Int(v) => write!(f, "{v}"),
            Value::Real(v) => write!(f, "{v}"),
            Value::Text(v) => write!(f, "{v}"),
        }
    }
}

// Serialised as plain JSON scalars rather than tagged variants so the CLI
// output reads like a table, not like a Rust enum
impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Empty => serializer.serialize_none(),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Real(v) => serializer.serialize_f64(*v),
            Value::Text(v) => serializer.serialize_str(v),
        }
    }
}

/// Per-column coercion hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnType {
    /// Whole-column inference: all-integer, else all-float, else text
    #[default]
    Auto,
    /// Pin to text - preserves leading zeros and numeric-looking names
    Text,
    /// Every non-empty field must parse as an integer
    Int,
    /// Every non-empty field must parse as a float
    Real,
}

/// A named, typed column in a table specification
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub name: String,
    pub kind: ColumnType,
}

impl ColumnSpec {
    pub fn new<S: Into<String>>(name: S, kind: ColumnType) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// An [ColumnType::Auto] column, the common case
    pub fn auto<S: Into<String>>(name: S) -> Self {
        Self::new(name, ColumnType::Auto)
    }

    /// A pinned text column
    pub fn text<S: Into<String>>(name: S) -> Self {
        Self::new(name, ColumnType::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_widen_to_real() {
        assert_eq!(Value::Int(3).as_real(), Some(3.0));
        assert_eq!(Value::Real(0.5).as_real(), Some(0.5));
        assert_eq!(Value::Text("x".into()).as_real(), None);
    }

    #[test]
    fn serialises_to_plain_scalars() {
        assert_eq!(serde_json::to_string(&Value::Int(2)).unwrap(), "2");
        assert_eq!(serde_json::to_string(&Value::Text("J1".into())).unwrap(), "\"J1\"");
        assert_eq!(serde_json::to_string(&Value::Empty).unwrap(), "null");
    }
}
