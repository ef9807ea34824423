//! Text sizing without a shaping pass.
//!
//! The card's canvas height has to be known before the rasterizer runs, so
//! dynamic text blocks are measured by estimate:
//!
//! - [`estimate`] - word-wrap simulation over an average glyph width
//! - [`sizing`] - length thresholds that pick a description font size and
//!   clip overly long text
//!
//! ```
//! use ogcard_core::types::LayoutBudget;
//! use ogcard_layout::estimate_height;
//!
//! let budget = LayoutBudget::new(40.0, 20.0);
//! assert_eq!(estimate_height("aaaa bbbb cccc", &budget), 60);
//! ```

pub mod estimate;
pub mod sizing;

pub use estimate::{estimate_height, max_chars_per_line, HeightEstimator, WrapStrategy};
pub use ogcard_core::types::{HeightEstimate, LayoutBudget, WeightClass};
pub use sizing::{truncate, SizedText, SizingRow, SizingTable, ELLIPSIS};
