//! The contracts for everything outside the layout core
//!
//! - [`AssetProvider`] - where font files and emoji images come from
//! - [`Rasterizer`] - where the finished tree becomes a bitmap
//!
//! Neither is implemented with network or pixel code in this workspace; the
//! host application plugs its own in.

use std::sync::Arc;

use crate::{error::Result, node::RenderRequest};

/// What kind of bytes an [`AssetKey`] points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Font,
    EmojiImage,
}

/// Identity of one fetchable asset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetKey {
    pub kind: AssetKind,
    pub url: String,
}

impl AssetKey {
    pub fn font(url: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::Font,
            url: url.into(),
        }
    }

    pub fn emoji_image(url: impl Into<String>) -> Self {
        Self {
            kind: AssetKind::EmojiImage,
            url: url.into(),
        }
    }
}

/// Source of font and glyph image bytes
///
/// ```ignore
/// struct Bundled;
///
/// impl AssetProvider for Bundled {
///     fn name(&self) -> &'static str {
///         "bundled"
///     }
///
///     fn fetch(&self, key: &AssetKey) -> Result<Arc<Vec<u8>>> {
///         Err(AssetError::NotFound(key.url.clone()).into())
///     }
/// }
/// ```
pub trait AssetProvider: Send + Sync {
    /// Used in logs
    fn name(&self) -> &'static str;

    /// Return the bytes behind `key`
    fn fetch(&self, key: &AssetKey) -> Result<Arc<Vec<u8>>>;

    /// Drop anything held between requests
    fn clear_cache(&self) {}
}

/// Turns a laid-out card into encoded image bytes
pub trait Rasterizer: Send + Sync {
    /// Your rasterizer's signature
    fn name(&self) -> &'static str;

    /// Draw `request` at exactly `request.width` x `request.height`
    fn rasterize(&self, request: &RenderRequest) -> Result<Vec<u8>>;

    /// What MIME type identifies the output?
    fn mime_type(&self) -> &'static str;
}

impl<P: AssetProvider + ?Sized> AssetProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self, key: &AssetKey) -> Result<Arc<Vec<u8>>> {
        (**self).fetch(key)
    }

    fn clear_cache(&self) {
        (**self).clear_cache()
    }
}
