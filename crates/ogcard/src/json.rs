//! JSON rasterizer - the whole layout, no pixels
//!
//! Useful for inspecting what a pixel rasterizer would receive. Font and
//! image bytes are replaced by their sizes.

use ogcard_core::error::{OgCardError, RasterError, Result};
use ogcard_core::node::{CardNode, RenderRequest};
use ogcard_core::traits::Rasterizer;
use serde::{Deserialize, Serialize};

/// Schema version for the JSON output
pub const JSON_SCHEMA_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonFont {
    pub family: String,
    pub weight: u16,
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonImage {
    pub src: String,
    pub bytes: usize,
}

/// The serialized form of a [`RenderRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonCard {
    pub schema_version: String,
    pub width: u32,
    pub height: u32,
    pub foreground: String,
    pub background: String,
    pub fonts: Vec<JsonFont>,
    pub images: Vec<JsonImage>,
    pub root: CardNode,
}

impl From<&RenderRequest> for JsonCard {
    fn from(request: &RenderRequest) -> Self {
        Self {
            schema_version: JSON_SCHEMA_VERSION.to_string(),
            width: request.width,
            height: request.height,
            foreground: request.foreground.to_hex(),
            background: request.background.to_hex(),
            fonts: request
                .fonts
                .iter()
                .map(|font| JsonFont {
                    family: font.family.clone(),
                    weight: font.weight,
                    bytes: font.data.len(),
                })
                .collect(),
            images: request
                .images
                .iter()
                .map(|image| JsonImage {
                    src: image.src.clone(),
                    bytes: image.data.len(),
                })
                .collect(),
            root: request.root.clone(),
        }
    }
}

/// Rasterizer that writes the request as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRasterizer {
    pretty: bool,
}

impl JsonRasterizer {
    /// Compact, one line per card
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Rasterizer for JsonRasterizer {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn rasterize(&self, request: &RenderRequest) -> Result<Vec<u8>> {
        if request.width == 0 || request.height == 0 {
            return Err(RasterError::InvalidDimensions {
                width: request.width,
                height: request.height,
            }
            .into());
        }

        let card = JsonCard::from(request);
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(&card)
        } else {
            serde_json::to_vec(&card)
        };
        encoded.map_err(|e| OgCardError::Raster(RasterError::Backend(e.to_string())))
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use ogcard_core::node::{BlockStyle, FontFace};
    use ogcard_core::types::Color;

    fn request(width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            width,
            height,
            foreground: Color::black(),
            background: Color::white(),
            root: CardNode::block("card", BlockStyle::default(), vec![CardNode::text("hi")]),
            fonts: vec![FontFace {
                family: "Body".into(),
                weight: 400,
                data: Arc::new(vec![0; 12]),
            }],
            images: Vec::new(),
        }
    }

    #[test]
    fn test_font_bytes_become_sizes() {
        let bytes = JsonRasterizer::new().rasterize(&request(10, 20)).unwrap();
        let card: JsonCard = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(card.schema_version, JSON_SCHEMA_VERSION);
        assert_eq!((card.width, card.height), (10, 20));
        assert_eq!(card.background, "#ffffff");
        assert_eq!(
            card.fonts,
            vec![JsonFont {
                family: "Body".into(),
                weight: 400,
                bytes: 12
            }]
        );
        assert_eq!(card.root.plain_text(), "hi");
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = JsonRasterizer::new().rasterize(&request(0, 20)).unwrap_err();
        assert!(matches!(
            err,
            OgCardError::Raster(RasterError::InvalidDimensions { width: 0, height: 20 })
        ));
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let bytes = JsonRasterizer::pretty().rasterize(&request(1, 1)).unwrap();
        assert!(String::from_utf8(bytes).unwrap().contains('\n'));
        assert_eq!(JsonRasterizer::new().mime_type(), "application/json");
    }
}
