// Timetable Tool - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use crate::util::error::FormatError;
use std::fmt;

// =============================================================================
// Course record
// =============================================================================

/// One offered course section.
///
/// Identity is the full value: two records are the same timetable entry only
/// if code, name, and time all match. The derived `Ord` (code, then name,
/// then time) gives the timetable its stable listing order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseRecord {
    /// Course code, e.g. "CS101". Year and department filters match against it.
    pub code: String,

    /// Human-readable course title.
    pub name: String,

    /// Free-form schedule text, e.g. "MWF 9-10".
    pub time: String,
}

impl CourseRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            time: time.into(),
        }
    }

    /// The three columns in catalog order.
    pub fn fields(&self) -> [&str; 3] {
        [&self.code, &self.name, &self.time]
    }

    /// Single-line label shown in course lists: `"{code}: {name} ({time})"`.
    pub fn display_label(&self) -> String {
        format!("{}: {} ({})", self.code, self.name, self.time)
    }

    /// Parse a label produced by [`display_label`](Self::display_label).
    ///
    /// Splits on the first colon only, so names may contain colons. The time
    /// is the content of the last balanced parenthesised group, so times may
    /// themselves contain parentheses.
    ///
    /// Inverse of `display_label` for any record whose code has no colon.
    /// Labels that do not have the `"{code}: {name} ({time})"` shape fail
    /// with `FormatError::DisplayLabel`. Selection does not go through here;
    /// the session resolves rows by display index.
    pub fn parse_display_label(label: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::DisplayLabel {
            label: label.to_string(),
        };

        let (code, rest) = label.split_once(':').ok_or_else(malformed)?;
        let code = code.trim();
        let inner = rest.trim().strip_suffix(')').ok_or_else(malformed)?;
        let open = matching_open_paren(inner).ok_or_else(malformed)?;

        if code.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(
            code,
            inner[..open].trim(),
            inner[open + 1..].trim(),
        ))
    }
}

impl fmt::Display for CourseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_label())
    }
}

/// Byte index of the `(` that opens the group closed by the (already stripped)
/// trailing `)`.
fn matching_open_paren(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, ch) in text.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' if depth == 0 => return Some(idx),
            '(' => depth -= 1,
            _ => {}
        }
    }
    None
}
