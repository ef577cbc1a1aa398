pub mod fields;


use crate::results::NOT_AVAILABLE;
use std::fmt;

/// Why a field has no value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Absent {
    /// No element matched the locator
    Missing,
    /// The element exists but its text is blank
    Empty,
    /// Text was present but did not contain what the rule looks for
    NoMatch,
    /// The driver failed while reading the element
    Lookup(String),
}

impl fmt::Display for Absent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Absent::Missing => write!(f, "element not found"),
            Absent::Empty => write!(f, "empty value"),
            Absent::NoMatch => write!(f, "no matching value"),
            Absent::Lookup(e) => write!(f, "lookup failed: {}", e),
        }
    }
}

/// Outcome of a single field rule
pub type Extracted = Result<String, Absent>;

/// Collapses a field result to its value or the `N/A` placeholder
pub fn or_not_available(field: &str, url: &str, extracted: Extracted) -> String {
    match extracted {
        Ok(value) => value,
        Err(reason) => {
            ::log::debug!("{} unavailable for {}: {}", field, url, reason);
            NOT_AVAILABLE.to_string()
        }
    }
}
