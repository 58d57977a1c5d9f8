//! Typed field access for record matching and sorting.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

/// A borrowed view of one record field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f64),
    Date(NaiveDate),
}

impl FieldValue<'_> {
    /// Rank used when two values of different kinds are compared.
    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date(_) => 1,
            FieldValue::Text(_) => 2,
        }
    }

    /// String form used by text and equality matchers.
    pub fn display_string(&self) -> String {
        match self {
            FieldValue::Text(value) => (*value).to_string(),
            FieldValue::Number(value) => format_number(*value),
            FieldValue::Date(date) => date.format("%Y-%m-%d").to_string(),
        }
    }

    /// Total order for explicit sorting.
    ///
    /// Text compares case-insensitively; mixed kinds order Number < Date < Text.
    pub fn sort_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Text(a), FieldValue::Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}

/// Formats a number without trailing fractional zeros.
pub fn format_number(value: f64) -> String {
    let s = format!("{value}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
