//! ogcard - Open Graph preview cards from a handful of strings
//!
//! A card is composed in four steps:
//! 1. Request parameters are defaulted ([`CardParams`])
//! 2. The description is sized and clipped ([`layout::SizingTable`])
//! 3. Title and description heights are estimated to size the canvas
//!    ([`layout::HeightEstimator`])
//! 4. Every displayed string is split into text and emoji
//!    ([`unicode::EmojiSegmenter`]) and assembled into a node tree
//!
//! The tree goes to a [`Rasterizer`](ogcard_core::Rasterizer) together with
//! whatever fonts and emoji images the [`AssetProvider`](ogcard_core::AssetProvider)
//! could supply.
//!
//! # Example
//!
//! ```
//! use ogcard::prelude::*;
//!
//! let composer = CardComposer::new(CardLayout::dynamic())?;
//! let params = CardParams::from_pairs([("title", "Road trip"), ("desc", "Two days, one car")]);
//! let card = composer.compose(&params);
//!
//! assert_eq!(card.request.width, 1200);
//! assert!(card.request.height > 400);
//! # Ok::<(), ogcard::error::OgCardError>(())
//! ```

pub mod compose;
pub mod json;
pub mod params;
pub mod preset;

pub use ogcard_core::{cache, cache_config, error, node, traits, types, Color};
pub use ogcard_layout as layout;
pub use ogcard_unicode as unicode;

pub use compose::{CardComposer, CardMetrics, ComposedCard};
pub use json::{JsonRasterizer, JSON_SCHEMA_VERSION};
pub use params::{add_hash, CardParams, FIELD_DEFAULTS};
pub use preset::{CanvasHeight, CardLayout, FontSource};

/// Common imports for typical usage
pub mod prelude {
    pub use ogcard_core::{
        cache::{CachePolicy, CachedAssetProvider},
        error::{AssetError, OgCardError, RasterError, Result},
        node::{CardNode, RenderRequest},
        traits::{AssetKey, AssetProvider, Rasterizer},
        types::{LayoutBudget, Segment, WeightClass},
        Color,
    };
    pub use ogcard_layout::{estimate_height, HeightEstimator, SizingTable, WrapStrategy};
    pub use ogcard_unicode::EmojiSegmenter;

    pub use crate::{CardComposer, CardLayout, CardParams, ComposedCard, JsonRasterizer};
}
