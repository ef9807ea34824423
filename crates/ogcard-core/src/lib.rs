//! ogcard Core: the shared vocabulary of the preview-card layout engine
//!
//! A preview card starts as a handful of strings and ends as a bitmap. This
//! crate holds the pieces every other crate agrees on:
//!
//! - [`types`] - segments, layout budgets, colours
//! - [`node`] - the styled tree handed to a rasterizer
//! - [`traits`] - the two external collaborators, [`AssetProvider`] and [`Rasterizer`]
//! - [`cache`] - a cache-backed asset provider so fonts and glyph images are
//!   fetched once, not once per request
//! - [`error`] - the error enums used at those boundaries
//!
//! The segmenter (`ogcard-unicode`) and the height estimator
//! (`ogcard-layout`) are pure functions over these types.

pub mod cache;
pub mod cache_config;
pub mod error;
pub mod node;
pub mod traits;
pub mod uri;

pub use error::{AssetError, OgCardError, RasterError, Result};
pub use traits::{AssetProvider, Rasterizer};
pub use types::{Color, EmojiSegment, LayoutBudget, Segment, TextSegment, WeightClass};

/// The data structures that flow between segmentation, estimation, and layout
pub mod types {
    use serde::{Deserialize, Serialize};

    use crate::uri::encode_uri_component;

    /// Predicted rendered height in whole pixels
    pub type HeightEstimate = u32;

    /// Coarse font weight used to pick an average glyph width
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "lowercase")]
    pub enum WeightClass {
        #[default]
        Normal,
        Bold,
    }

    impl WeightClass {
        /// Average advance as a fraction of the font size
        pub fn width_factor(self) -> f64 {
            match self {
                WeightClass::Normal => 0.5,
                WeightClass::Bold => 0.6,
            }
        }
    }

    /// Sizing inputs for one height estimate
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    pub struct LayoutBudget {
        pub container_width_px: f64,
        pub font_size_px: f64,
        pub line_height_multiplier: f64,
        pub weight_class: WeightClass,
    }

    impl LayoutBudget {
        /// Normal weight, line height 1.0
        pub fn new(container_width_px: f64, font_size_px: f64) -> Self {
            Self {
                container_width_px,
                font_size_px,
                line_height_multiplier: 1.0,
                weight_class: WeightClass::Normal,
            }
        }

        pub fn with_line_height(mut self, multiplier: f64) -> Self {
            self.line_height_multiplier = multiplier;
            self
        }

        pub fn with_weight(mut self, weight_class: WeightClass) -> Self {
            self.weight_class = weight_class;
            self
        }

        /// Shape-agnostic stand-in for a glyph's advance width
        pub fn avg_char_width_px(&self) -> f64 {
            self.font_size_px * self.weight_class.width_factor()
        }
    }

    /// A run of plain text or a single emoji glyph
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(tag = "kind", rename_all = "lowercase")]
    pub enum Segment {
        Text(TextSegment),
        Emoji(EmojiSegment),
    }

    impl Segment {
        pub fn text(value: impl Into<String>) -> Self {
            Segment::Text(TextSegment {
                value: value.into(),
            })
        }

        pub fn emoji(value: impl Into<String>, render_size: u32) -> Self {
            Segment::Emoji(EmojiSegment {
                value: value.into(),
                render_size,
            })
        }

        /// The source text this segment covers
        pub fn value(&self) -> &str {
            match self {
                Segment::Text(text) => &text.value,
                Segment::Emoji(emoji) => &emoji.value,
            }
        }

        pub fn is_emoji(&self) -> bool {
            matches!(self, Segment::Emoji(_))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct TextSegment {
        pub value: String,
    }

    /// One emoji (plus an optional variation selector) and the square size it
    /// should be drawn at
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct EmojiSegment {
        pub value: String,
        pub render_size: u32,
    }

    impl EmojiSegment {
        /// Percent-encoded glyph, used as the lookup key for its image
        pub fn identifier(&self) -> String {
            encode_uri_component(&self.value)
        }

        /// `https://<host>/<identifier>?style=<style>`
        pub fn image_url(&self, host: &str, style: &str) -> String {
            format!("https://{}/{}?style={}", host, self.identifier(), style)
        }
    }

    /// Simple RGBA color that works everywhere
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Color {
        pub r: u8,
        pub g: u8,
        pub b: u8,
        pub a: u8,
    }

    impl Color {
        pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
            Self { r, g, b, a }
        }

        pub const fn black() -> Self {
            Self::rgba(0, 0, 0, 255)
        }

        pub const fn white() -> Self {
            Self::rgba(255, 255, 255, 255)
        }

        /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` (the `#` is optional)
        pub fn from_hex(input: &str) -> Option<Self> {
            let hex = input.strip_prefix('#').unwrap_or(input);
            if !hex.is_ascii() {
                return None;
            }
            let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
            match hex.len() {
                3 => {
                    let short = |idx: usize| channel(idx..idx + 1).map(|v| v * 17);
                    Some(Self::rgba(short(0)?, short(1)?, short(2)?, 255))
                },
                6 => Some(Self::rgba(channel(0..2)?, channel(2..4)?, channel(4..6)?, 255)),
                8 => Some(Self::rgba(
                    channel(0..2)?,
                    channel(2..4)?,
                    channel(4..6)?,
                    channel(6..8)?,
                )),
                _ => None,
            }
        }

        /// `#rrggbb`, or `#rrggbbaa` when not fully opaque
        pub fn to_hex(&self) -> String {
            if self.a == 255 {
                format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
            } else {
                format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
            }
        }
    }
}
