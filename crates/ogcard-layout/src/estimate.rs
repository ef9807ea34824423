//! Predict how tall a block of text will render, without shaping it
//!
//! Every glyph is assumed to be `font_size * 0.5` wide (`0.6` for bold).
//! Words are packed greedily into lines of that many characters and the
//! line count is multiplied by the line height.

use ogcard_core::types::{HeightEstimate, LayoutBudget};
use serde::{Deserialize, Serialize};

/// How lines are counted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WrapStrategy {
    /// Greedy word packing
    #[default]
    WordWrap,
    /// `ceil(chars / max_chars_per_line)`, ignoring word boundaries.
    /// Cruder; kept for callers that still size cards this way.
    CharacterCount,
}

/// Characters that fit on one line, never less than 1
pub fn max_chars_per_line(budget: &LayoutBudget) -> usize {
    let per_line = (budget.container_width_px / budget.avg_char_width_px()).floor();
    // NaN and infinity come from a zero glyph width
    if per_line.is_finite() && per_line >= 1.0 {
        per_line as usize
    } else {
        1
    }
}

/// Height estimator with a fixed wrap strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeightEstimator {
    strategy: WrapStrategy,
}

impl HeightEstimator {
    /// Word-wrapping estimator
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_strategy(strategy: WrapStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> WrapStrategy {
        self.strategy
    }

    /// Number of lines `text` occupies under `budget`
    pub fn line_count(&self, text: &str, budget: &LayoutBudget) -> usize {
        let max_chars = max_chars_per_line(budget);
        match self.strategy {
            WrapStrategy::WordWrap => word_wrap_lines(text, max_chars),
            WrapStrategy::CharacterCount => text.chars().count().div_ceil(max_chars),
        }
    }

    /// Predicted pixel height; 0 for text with nothing to draw
    pub fn estimate(&self, text: &str, budget: &LayoutBudget) -> HeightEstimate {
        let lines = self.line_count(text, budget);
        let height = (lines as f64 * budget.font_size_px * budget.line_height_multiplier).ceil();

        log::debug!(
            "estimated {} lines ({:?}) -> {}px for {} chars at {}px",
            lines,
            self.strategy,
            height,
            text.chars().count(),
            budget.font_size_px
        );

        if height.is_finite() && height > 0.0 {
            height.min(f64::from(u32::MAX)) as HeightEstimate
        } else {
            0
        }
    }
}

/// Word-wrap estimate, the canonical variant
pub fn estimate_height(text: &str, budget: &LayoutBudget) -> HeightEstimate {
    HeightEstimator::new().estimate(text, budget)
}

fn word_wrap_lines(text: &str, max_chars: usize) -> usize {
    let mut words = text.split_whitespace().peekable();
    if words.peek().is_none() {
        return 0;
    }

    let mut lines = 1;
    let mut current = 0usize;
    for word in words {
        let len = word.chars().count();
        if current + len <= max_chars {
            // Word plus its trailing separator
            current += len + 1;
        } else {
            lines += 1;
            current = len;
        }
    }
    lines
}
