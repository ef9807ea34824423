//! Numeric constants of a card layout variant
//!
//! Sizes are stored in base units and multiplied by `scale` when a card is
//! composed, so a 600-unit-wide layout at scale 2 renders 1200 pixels wide.

use std::path::Path;

use ogcard_core::error::{OgCardError, Result};
use ogcard_core::types::WeightClass;
use ogcard_layout::{SizingTable, WrapStrategy};
use serde::{Deserialize, Serialize};

/// How the canvas height is decided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum CanvasHeight {
    Fixed {
        height: u32,
    },
    /// `(static_chrome + buffer) * scale` plus the estimated title and
    /// description heights
    Dynamic {
        static_chrome: u32,
        buffer: u32,
    },
}

/// A font the rasterizer should register, fetched through the asset provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSource {
    pub family: String,
    pub weight: u16,
    pub url: String,
}

pub const FONT_FAMILY: &str = "SF Pro Display";
pub const DISPLAY_FONT_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fontsource/nunito@5.0.13/files/nunito-latin-800-normal.woff";
pub const BODY_FONT_URL: &str = "https://fonts.gstatic.com/s/inter/v13/UcCO3FwrK3iLTeHuS_fvQtMwCp50KnMw2boKoduKmMEVuI6fMZhrib2Bg-4.ttf";
pub const EMOJI_HOST: &str = "emojicdn.elk.sh";
pub const EMOJI_STYLE: &str = "apple";

/// Largest canvas dimension or scaled size a layout may ask for
pub const MAX_CANVAS_PX: f64 = 16_384.0;
pub const MAX_LINE_HEIGHT: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub width: u32,
    pub height: CanvasHeight,
    pub scale: f64,
    pub padding_x: f64,
    pub padding_y: f64,
    pub meta_font_size: f64,
    pub chip_emoji_size: f64,
    pub title_font_size: f64,
    pub title_line_height: f64,
    pub title_weight: WeightClass,
    pub strip_font_size: f64,
    pub strip_emoji_size: f64,
    /// Emoji beyond this many are left out of the strip
    pub strip_max_emoji: Option<usize>,
    pub description_line_height: f64,
    pub description_sizing: SizingTable,
    #[serde(default)]
    pub wrap_strategy: WrapStrategy,
    pub emoji_host: String,
    pub emoji_style: String,
    pub fonts: Vec<FontSource>,
}

impl CardLayout {
    /// 1200x1300 at scale 2
    pub fn fixed() -> Self {
        Self {
            width: 600,
            height: CanvasHeight::Fixed { height: 650 },
            scale: 2.0,
            padding_x: 40.0,
            padding_y: 30.0,
            meta_font_size: 23.0,
            chip_emoji_size: 17.0,
            title_font_size: 34.0,
            title_line_height: 1.1,
            title_weight: WeightClass::Bold,
            strip_font_size: 30.0,
            strip_emoji_size: 72.0,
            strip_max_emoji: None,
            description_line_height: 1.4,
            description_sizing: SizingTable::description(),
            wrap_strategy: WrapStrategy::WordWrap,
            emoji_host: EMOJI_HOST.to_string(),
            emoji_style: EMOJI_STYLE.to_string(),
            fonts: vec![
                FontSource {
                    family: FONT_FAMILY.to_string(),
                    weight: 800,
                    url: DISPLAY_FONT_URL.to_string(),
                },
                FontSource {
                    family: FONT_FAMILY.to_string(),
                    weight: 400,
                    url: BODY_FONT_URL.to_string(),
                },
            ],
        }
    }

    /// 1200 wide, as tall as the title and description need; at most two
    /// emoji in the strip
    pub fn dynamic() -> Self {
        Self {
            height: CanvasHeight::Dynamic {
                static_chrome: 160,
                buffer: 40,
            },
            strip_max_emoji: Some(2),
            ..Self::fixed()
        }
    }

    /// Look a preset up by name
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "fixed" => Some(Self::fixed()),
            "dynamic" => Some(Self::dynamic()),
            _ => None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let layout: Self = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(OgCardError::Config("layout width must be positive".into()));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(OgCardError::Config(format!(
                "layout scale must be a positive number, got {}",
                self.scale
            )));
        }
        if let CanvasHeight::Fixed { height: 0 } = self.height {
            return Err(OgCardError::Config("fixed height must be positive".into()));
        }
        let base_height = match self.height {
            CanvasHeight::Fixed { height } => f64::from(height),
            CanvasHeight::Dynamic {
                static_chrome,
                buffer,
            } => f64::from(static_chrome) + f64::from(buffer),
        };
        for (name, value) in [("width", f64::from(self.width)), ("height", base_height)] {
            if self.scaled(value) > MAX_CANVAS_PX {
                return Err(OgCardError::Config(format!(
                    "layout {} scales past {}px",
                    name, MAX_CANVAS_PX
                )));
            }
        }

        let sizes = [
            ("meta_font_size", self.meta_font_size),
            ("chip_emoji_size", self.chip_emoji_size),
            ("title_font_size", self.title_font_size),
            ("strip_font_size", self.strip_font_size),
            ("strip_emoji_size", self.strip_emoji_size),
        ];
        for (name, value) in sizes {
            let px = self.scaled(value);
            if !(px.is_finite() && px > 0.0 && px <= MAX_CANVAS_PX) {
                return Err(OgCardError::Config(format!(
                    "{} must scale to (0, {}]px, got {}",
                    name, MAX_CANVAS_PX, value
                )));
            }
        }
        for (name, value) in [("padding_x", self.padding_x), ("padding_y", self.padding_y)] {
            let px = self.scaled(value);
            if !(0.0..=MAX_CANVAS_PX).contains(&px) {
                return Err(OgCardError::Config(format!(
                    "{} must scale to [0, {}]px, got {}",
                    name, MAX_CANVAS_PX, value
                )));
            }
        }
        for (name, value) in [
            ("title_line_height", self.title_line_height),
            ("description_line_height", self.description_line_height),
        ] {
            if !(value.is_finite() && value > 0.0 && value <= MAX_LINE_HEIGHT) {
                return Err(OgCardError::Config(format!(
                    "{} must be in (0, {}], got {}",
                    name, MAX_LINE_HEIGHT, value
                )));
            }
        }
        for row in self.description_sizing.rows() {
            let px = self.scaled(row.font_size_px);
            if !(px.is_finite() && px > 0.0 && px <= MAX_CANVAS_PX) {
                return Err(OgCardError::Config(format!(
                    "description font size {} out of range",
                    row.font_size_px
                )));
            }
        }
        if self.fonts.iter().any(|font| font.url.is_empty()) {
            return Err(OgCardError::Config("font source without a url".into()));
        }
        Ok(())
    }

    /// A base-unit size in canvas pixels
    pub fn scaled(&self, value: f64) -> f64 {
        value * self.scale
    }

    /// A base-unit size in whole canvas pixels, for image dimensions
    pub fn scaled_px(&self, value: f64) -> u32 {
        self.scaled(value).round().max(0.0) as u32
    }

    pub fn canvas_width(&self) -> u32 {
        self.scaled_px(self.width as f64)
    }

    /// Canvas width minus the horizontal padding
    pub fn content_width(&self) -> f64 {
        (self.canvas_width() as f64 - 2.0 * self.scaled(self.padding_x)).max(0.0)
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self.height, CanvasHeight::Dynamic { .. })
    }
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::fixed()
    }
}
