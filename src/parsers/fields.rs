//! Text rules applied to element contents once they have been read from the page.

use crate::parsers::{Absent, Extracted};
use regex::Regex;
use std::sync::LazyLock;

/// Label introducing the website detail block
pub const WEBSITE_LABEL: &str = "Website:";

/// Label introducing the address detail block
pub const ADDRESS_LABEL: &str = "Address:";

static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// Trimmed text, or `Empty` when nothing is left
pub fn trimmed(text: &str) -> Extracted {
    let text = text.trim();
    if text.is_empty() {
        Err(Absent::Empty)
    } else {
        Ok(text.to_string())
    }
}

/// First run of digits after removing thousands separators
///
/// `"1,234 jobs completed"` gives `"1234"`.
pub fn jobs_completed(text: &str) -> Extracted {
    let text = trimmed(text)?;
    let compact = text.replace(',', "");
    DIGITS
        .find(&compact)
        .map(|m| m.as_str().to_string())
        .ok_or(Absent::NoMatch)
}

/// Value following `label` in the first block that contains it
///
/// Blocks are checked in the order given. The label is matched anywhere in the
/// block, so a label that also appears inside unrelated text will be picked up.
pub fn labelled_value<S: AsRef<str>>(blocks: &[S], label: &str) -> Extracted {
    for block in blocks {
        let text = block.as_ref().trim();
        if let Some((_, value)) = text.split_once(label) {
            return trimmed(value);
        }
    }
    Err(Absent::NoMatch)
}
