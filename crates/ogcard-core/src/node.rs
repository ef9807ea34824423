//! The styled tree a rasterizer turns into pixels
//!
//! Leaves are either literal text spans or image references. Blocks group
//! them and carry the few typographic values layout depends on; colours,
//! radii and the rest of the visual styling belong to the rasterizer.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{Color, EmojiSegment, Segment, WeightClass};

/// Horizontal margin on each side of an inline emoji image
pub const EMOJI_MARGIN_PX: u32 = 2;

/// One node of the card tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CardNode {
    Block {
        role: String,
        #[serde(default)]
        style: BlockStyle,
        children: Vec<CardNode>,
    },
    Text {
        value: String,
    },
    Image {
        src: String,
        width: u32,
        height: u32,
        alt: String,
        margin_x: u32,
    },
}

impl CardNode {
    pub fn block(role: impl Into<String>, style: BlockStyle, children: Vec<CardNode>) -> Self {
        CardNode::Block {
            role: role.into(),
            style,
            children,
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        CardNode::Text {
            value: value.into(),
        }
    }

    /// Image leaf for an emoji, sized to its render size
    pub fn emoji(emoji: &EmojiSegment, host: &str, style: &str) -> Self {
        CardNode::Image {
            src: emoji.image_url(host, style),
            width: emoji.render_size,
            height: emoji.render_size,
            alt: emoji.value.clone(),
            margin_x: EMOJI_MARGIN_PX,
        }
    }

    /// Map a segment sequence onto leaves, in order
    pub fn from_segments(segments: &[Segment], host: &str, style: &str) -> Vec<CardNode> {
        segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => CardNode::text(text.value.clone()),
                Segment::Emoji(emoji) => CardNode::emoji(emoji, host, style),
            })
            .collect()
    }

    /// Depth-first search for a block by role
    pub fn find(&self, wanted: &str) -> Option<&CardNode> {
        match self {
            CardNode::Block { role, children, .. } => {
                if role == wanted {
                    return Some(self);
                }
                children.iter().find_map(|child| child.find(wanted))
            },
            _ => None,
        }
    }

    pub fn children(&self) -> &[CardNode] {
        match self {
            CardNode::Block { children, .. } => children,
            _ => &[],
        }
    }

    /// All text leaves under this node, concatenated in order
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            CardNode::Block { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            },
            CardNode::Text { value } => out.push_str(value),
            CardNode::Image { .. } => {},
        }
    }

    /// Number of image leaves under this node
    pub fn image_count(&self) -> usize {
        match self {
            CardNode::Block { children, .. } => children.iter().map(CardNode::image_count).sum(),
            CardNode::Text { .. } => 0,
            CardNode::Image { .. } => 1,
        }
    }
}

/// Typographic values that influence layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<WeightClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
}

impl BlockStyle {
    pub fn font(font_size: f64, line_height: f64, weight: WeightClass) -> Self {
        Self {
            font_size: Some(font_size),
            line_height: Some(line_height),
            weight: Some(weight),
            max_width: None,
        }
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }
}

/// A font face registered with the rasterizer
#[derive(Debug, Clone)]
pub struct FontFace {
    pub family: String,
    pub weight: u16,
    pub data: Arc<Vec<u8>>,
}

/// Image bytes fetched ahead of rasterization, keyed by node `src`
#[derive(Debug, Clone)]
pub struct ImageAsset {
    pub src: String,
    pub data: Arc<Vec<u8>>,
}

/// Everything a rasterizer needs for one card
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub width: u32,
    pub height: u32,
    pub foreground: Color,
    pub background: Color,
    pub root: CardNode,
    /// Empty when every font fetch failed; the rasterizer uses its default face
    pub fonts: Vec<FontFace>,
    /// Images missing here are the rasterizer's to resolve or replace with `alt`
    pub images: Vec<ImageAsset>,
}

impl RenderRequest {
    /// Distinct image sources in first-seen order
    pub fn image_sources(&self) -> Vec<&str> {
        let mut sources = Vec::new();
        collect_sources(&self.root, &mut sources);
        sources
    }
}

fn collect_sources<'a>(node: &'a CardNode, out: &mut Vec<&'a str>) {
    match node {
        CardNode::Block { children, .. } => {
            for child in children {
                collect_sources(child, out);
            }
        },
        CardNode::Image { src, .. } => {
            if !out.contains(&src.as_str()) {
                out.push(src.as_str());
            }
        },
        CardNode::Text { .. } => {},
    }
}
