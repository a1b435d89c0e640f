//! Explicit cell values.
//!
//! A cell is either present (a number or an opaque text label) or missing.
//! Missing-ness is a first-class variant, not a sentinel value, so every
//! downstream skip rule is an explicit match instead of a NaN comparison.

use std::borrow::Cow;

/// One cell of a tabular row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Logically absent value.
    Missing,
    /// Numeric value (always finite by construction via [`Cell::parse`]).
    Number(f64),
    /// Opaque label value.
    Text(String),
}

impl Cell {
    /// Parse a raw text field into a cell.
    ///
    /// Empty or whitespace-only fields are missing. Fields that parse to a
    /// finite float become numbers; everything else is an opaque label
    /// (a literal "NaN" or "inf" is kept as text rather than poisoning sums).
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return Cell::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Cell::Number(v),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    /// Whether this cell is logically absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    /// The cell as a metric value.
    ///
    /// Only finite numbers qualify; text and missing cells yield `None`
    /// (a non-numeric metric is treated exactly like a missing one).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// The cell as a category label, if present.
    pub fn as_label(&self) -> Option<Cow<'_, str>> {
        match self {
            Cell::Missing => None,
            Cell::Number(v) => Some(Cow::Owned(v.to_string())),
            Cell::Text(s) => Some(Cow::Borrowed(s)),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}
