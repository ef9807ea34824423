//! Length-driven font size and truncation for descriptions
//!
//! Short descriptions render large; longer ones step down in size and are
//! allowed more characters before they are clipped.

use std::borrow::Cow;

use ogcard_core::error::{OgCardError, Result};
use serde::{Deserialize, Serialize};

/// Marker appended to clipped text
pub const ELLIPSIS: &str = "...";

/// One step of a [`SizingTable`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRow {
    /// The row applies to text strictly longer than this many characters
    pub length_threshold: usize,
    pub font_size_px: f64,
    pub max_chars: usize,
}

impl SizingRow {
    pub const fn new(length_threshold: usize, font_size_px: f64, max_chars: usize) -> Self {
        Self {
            length_threshold,
            font_size_px,
            max_chars,
        }
    }
}

/// Ordered rows, evaluated top to bottom; the last match wins
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SizingRow>", into = "Vec<SizingRow>")]
pub struct SizingTable {
    rows: Vec<SizingRow>,
}

/// Text after sizing: the chosen row and the possibly clipped string
#[derive(Debug, Clone, PartialEq)]
pub struct SizedText<'a> {
    pub row: SizingRow,
    pub text: Cow<'a, str>,
}

impl SizedText<'_> {
    pub fn was_truncated(&self) -> bool {
        matches!(self.text, Cow::Owned(_))
    }
}

impl SizingTable {
    /// Fails when `rows` is empty
    pub fn new(rows: Vec<SizingRow>) -> Result<Self> {
        if rows.is_empty() {
            return Err(OgCardError::Config(
                "sizing table needs at least one row".into(),
            ));
        }
        Ok(Self { rows })
    }

    /// The description steps: 35px up to 100 chars, 31px up to 200, 27px beyond
    pub fn description() -> Self {
        Self {
            rows: vec![
                SizingRow::new(0, 35.0, 180),
                SizingRow::new(100, 31.0, 240),
                SizingRow::new(200, 27.0, 320),
            ],
        }
    }

    pub fn rows(&self) -> &[SizingRow] {
        &self.rows
    }

    /// Row for `text`; the first row when nothing matches
    pub fn select(&self, text: &str) -> SizingRow {
        let len = text.chars().count();
        let first = self.rows[0];
        self.rows
            .iter()
            .rev()
            .find(|row| len > row.length_threshold)
            .copied()
            .unwrap_or(first)
    }

    /// Select a row and clip `text` to its `max_chars`
    pub fn apply<'a>(&self, text: &'a str) -> SizedText<'a> {
        let row = self.select(text);
        let text = truncate(text, row.max_chars);
        log::debug!(
            "sizing row {:?} selected, truncated: {}",
            row,
            matches!(text, Cow::Owned(_))
        );
        SizedText { row, text }
    }
}

impl Default for SizingTable {
    fn default() -> Self {
        Self::description()
    }
}

impl TryFrom<Vec<SizingRow>> for SizingTable {
    type Error = OgCardError;

    fn try_from(rows: Vec<SizingRow>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<SizingTable> for Vec<SizingRow> {
    fn from(table: SizingTable) -> Self {
        table.rows
    }
}

/// Clip `text` to `max_chars - 1` characters plus [`ELLIPSIS`] when it is
/// longer than `max_chars`; otherwise borrow it unchanged.
pub fn truncate(text: &str, max_chars: usize) -> Cow<'_, str> {
    if text.chars().nth(max_chars).is_none() {
        return Cow::Borrowed(text);
    }

    let keep = max_chars.saturating_sub(1);
    let cut = text
        .char_indices()
        .nth(keep)
        .map_or(text.len(), |(idx, _)| idx);
    Cow::Owned(format!("{}{}", &text[..cut], ELLIPSIS))
}
