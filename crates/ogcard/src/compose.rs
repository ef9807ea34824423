//! Turn card parameters into a render request
//!
//! The composer sizes the canvas first, then segments every displayed
//! string and builds the node tree. Description truncation happens before
//! anything looks at the description, so estimation and segmentation both
//! see the clipped text.

use std::sync::Arc;

use ogcard_core::error::Result;
use ogcard_core::node::{BlockStyle, CardNode, FontFace, ImageAsset, RenderRequest, EMOJI_MARGIN_PX};
use ogcard_core::traits::{AssetKey, AssetProvider, Rasterizer};
use ogcard_core::types::{LayoutBudget, Segment, WeightClass};
use ogcard_layout::HeightEstimator;
use ogcard_unicode::EmojiSegmenter;
use serde::Serialize;

use crate::params::CardParams;
use crate::preset::{CanvasHeight, CardLayout};

/// Block roles in the card tree
pub mod roles {
    pub const CARD: &str = "card";
    pub const META: &str = "meta";
    pub const META_LEFT: &str = "meta-left";
    pub const META_RIGHT: &str = "meta-right";
    pub const META_TIME: &str = "meta-time";
    pub const META_WEATHER: &str = "meta-weather";
    pub const META_BATTERY: &str = "meta-battery";
    pub const META_LOCATION: &str = "meta-location";
    pub const TITLE_ROW: &str = "title-row";
    pub const TITLE: &str = "title";
    pub const EMOJI_STRIP: &str = "emoji-strip";
    pub const DESCRIPTION: &str = "description";
}

/// Numbers worth logging or inspecting about one composed card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardMetrics {
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Width left for the title once the emoji strip is placed
    pub title_width: f64,
    pub title_height: u32,
    pub description_font_size: f64,
    pub description_height: u32,
    pub description_truncated: bool,
    pub emoji_images: usize,
    pub fonts_loaded: usize,
    pub images_loaded: usize,
}

/// A laid-out card, ready for a [`Rasterizer`]
#[derive(Debug, Clone)]
pub struct ComposedCard {
    pub request: RenderRequest,
    pub metrics: CardMetrics,
}

/// Lays out cards for one [`CardLayout`]
///
/// Without an asset provider the request carries no fonts or images and the
/// rasterizer falls back to its defaults.
#[derive(Clone)]
pub struct CardComposer {
    layout: CardLayout,
    assets: Option<Arc<dyn AssetProvider>>,
    estimator: HeightEstimator,
}

impl std::fmt::Debug for CardComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardComposer")
            .field("layout", &self.layout)
            .field("assets", &self.assets.as_ref().map(|p| p.name()))
            .field("estimator", &self.estimator)
            .finish()
    }
}

impl CardComposer {
    /// Fails when the layout does not validate
    pub fn new(layout: CardLayout) -> Result<Self> {
        layout.validate()?;
        let estimator = HeightEstimator::with_strategy(layout.wrap_strategy);
        Ok(Self {
            layout,
            assets: None,
            estimator,
        })
    }

    pub fn with_assets(mut self, provider: Arc<dyn AssetProvider>) -> Self {
        self.assets = Some(provider);
        self
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }

    /// Lay out one card. Asset failures are logged and leave the asset out.
    pub fn compose(&self, params: &CardParams) -> ComposedCard {
        let layout = &self.layout;
        let content_width = layout.content_width();

        let strip = EmojiSegmenter::new()
            .with_max_emoji_segments(layout.strip_max_emoji)
            .segment(&params.emojis, layout.scaled_px(layout.strip_emoji_size));
        let title_width = (content_width - self.strip_width(&strip)).max(0.0);

        let title_font = layout.scaled(layout.title_font_size);
        let title_budget = LayoutBudget::new(title_width, title_font)
            .with_line_height(layout.title_line_height)
            .with_weight(layout.title_weight);
        let title_height = self.estimator.estimate(&params.title, &title_budget);

        let sized = layout.description_sizing.apply(&params.description);
        let description_font = layout.scaled(sized.row.font_size_px);
        let description_budget = LayoutBudget::new(content_width, description_font)
            .with_line_height(layout.description_line_height);
        let description_height = self.estimator.estimate(&sized.text, &description_budget);

        let canvas_width = layout.canvas_width();
        let canvas_height = match layout.height {
            CanvasHeight::Fixed { height } => layout.scaled_px(height as f64),
            CanvasHeight::Dynamic {
                static_chrome,
                buffer,
            } => layout
                .scaled_px(static_chrome.saturating_add(buffer) as f64)
                .saturating_add(title_height)
                .saturating_add(description_height),
        };
        log::debug!(
            "canvas {}x{}: title {}px in {}px, description {}px at {}px",
            canvas_width,
            canvas_height,
            title_height,
            title_width,
            description_height,
            description_font
        );

        let segmenter = EmojiSegmenter::new();
        let title_segments = segmenter.segment(&params.title, title_font.round() as u32);
        let description_segments =
            segmenter.segment(&sized.text, description_font.round() as u32);

        let chip_size = layout.scaled_px(layout.chip_emoji_size);
        let [time, weather, battery, location] = params.chips();
        let chip = |role: &str, text: &str| {
            self.block(role, BlockStyle::default(), &segmenter.segment(text, chip_size))
        };

        let meta = CardNode::block(
            roles::META,
            BlockStyle::font(
                layout.scaled(layout.meta_font_size),
                1.0,
                WeightClass::Normal,
            ),
            vec![
                CardNode::block(
                    roles::META_LEFT,
                    BlockStyle::default(),
                    vec![chip(roles::META_TIME, time), chip(roles::META_WEATHER, weather)],
                ),
                CardNode::block(
                    roles::META_RIGHT,
                    BlockStyle::default(),
                    vec![
                        chip(roles::META_BATTERY, battery),
                        chip(roles::META_LOCATION, location),
                    ],
                ),
            ],
        );

        let title_row = CardNode::block(
            roles::TITLE_ROW,
            BlockStyle::default(),
            vec![
                self.block(
                    roles::TITLE,
                    BlockStyle::font(title_font, layout.title_line_height, layout.title_weight)
                        .with_max_width(title_width),
                    &title_segments,
                ),
                self.block(
                    roles::EMOJI_STRIP,
                    BlockStyle::font(
                        layout.scaled(layout.strip_font_size),
                        1.0,
                        WeightClass::Normal,
                    ),
                    &strip,
                ),
            ],
        );

        let description = self.block(
            roles::DESCRIPTION,
            BlockStyle::font(
                description_font,
                layout.description_line_height,
                WeightClass::Normal,
            )
            .with_max_width(content_width),
            &description_segments,
        );

        let root = CardNode::block(
            roles::CARD,
            BlockStyle::default(),
            vec![meta, title_row, description],
        );

        let mut request = RenderRequest {
            width: canvas_width,
            height: canvas_height,
            foreground: params.foreground(),
            background: params.background(),
            root,
            fonts: Vec::new(),
            images: Vec::new(),
        };
        self.load_assets(&mut request);

        let metrics = CardMetrics {
            canvas_width,
            canvas_height,
            title_width,
            title_height,
            description_font_size: description_font,
            description_height,
            description_truncated: sized.was_truncated(),
            emoji_images: request.root.image_count(),
            fonts_loaded: request.fonts.len(),
            images_loaded: request.images.len(),
        };

        ComposedCard { request, metrics }
    }

    /// Compose and hand the result to `rasterizer`
    pub fn render(&self, params: &CardParams, rasterizer: &dyn Rasterizer) -> Result<Vec<u8>> {
        let card = self.compose(params);
        log::debug!(
            "rasterizing {}x{} card with {}",
            card.request.width,
            card.request.height,
            rasterizer.name()
        );
        rasterizer.rasterize(&card.request)
    }

    fn block(&self, role: &str, style: BlockStyle, segments: &[Segment]) -> CardNode {
        CardNode::block(
            role,
            style,
            CardNode::from_segments(segments, &self.layout.emoji_host, &self.layout.emoji_style),
        )
    }

    /// Horizontal space the emoji strip takes beside the title
    fn strip_width(&self, strip: &[Segment]) -> f64 {
        let text_budget = LayoutBudget::new(0.0, self.layout.scaled(self.layout.strip_font_size));
        strip
            .iter()
            .map(|segment| match segment {
                Segment::Emoji(emoji) => {
                    f64::from(emoji.render_size) + 2.0 * f64::from(EMOJI_MARGIN_PX)
                },
                Segment::Text(text) => {
                    text.value.chars().count() as f64 * text_budget.avg_char_width_px()
                },
            })
            .sum()
    }

    fn load_assets(&self, request: &mut RenderRequest) {
        let Some(provider) = &self.assets else {
            log::debug!("no asset provider, rasterizer defaults apply");
            return;
        };

        for source in &self.layout.fonts {
            match provider.fetch(&AssetKey::font(source.url.as_str())) {
                Ok(data) => request.fonts.push(FontFace {
                    family: source.family.clone(),
                    weight: source.weight,
                    data,
                }),
                Err(e) => log::warn!(
                    "font {} (weight {}) unavailable from {}: {}",
                    source.family,
                    source.weight,
                    provider.name(),
                    e
                ),
            }
        }

        let sources: Vec<String> = request
            .image_sources()
            .into_iter()
            .map(str::to_string)
            .collect();
        for src in sources {
            match provider.fetch(&AssetKey::emoji_image(src.as_str())) {
                Ok(data) => request.images.push(ImageAsset { src, data }),
                Err(e) => log::warn!("emoji image {} unavailable: {}", src, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_width_counts_margins_and_text() {
        let composer = CardComposer::new(CardLayout::dynamic()).unwrap();
        let strip = vec![
            Segment::emoji("🚗", 144),
            Segment::text(" "),
            Segment::emoji("🏠", 144),
        ];
        // 2 * (144 + 4) + one 30px space
        assert_eq!(composer.strip_width(&strip), 326.0);
        assert_eq!(composer.strip_width(&[]), 0.0);
    }

    #[test]
    fn test_strip_width_does_not_overflow() {
        let composer = CardComposer::new(CardLayout::dynamic()).unwrap();
        let strip = vec![Segment::emoji("🚗", u32::MAX)];
        assert_eq!(composer.strip_width(&strip), f64::from(u32::MAX) + 8.0);
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let mut layout = CardLayout::fixed();
        layout.width = 0;
        assert!(CardComposer::new(layout).is_err());

        let mut layout = CardLayout::dynamic();
        layout.strip_emoji_size = 3.0e9;
        assert!(CardComposer::new(layout).is_err());
    }
}
