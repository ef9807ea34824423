//! Error types for ogcard
//!
//! Segmentation and height estimation never fail. Everything here belongs to
//! the boundary: fetching assets, handing the tree to a rasterizer, and
//! reading configuration.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, OgCardError>;

/// Main error type for ogcard
#[derive(Debug, Error)]
pub enum OgCardError {
    #[error("Asset unavailable: {0}")]
    Asset(#[from] AssetError),

    #[error("Rasterization failed: {0}")]
    Raster(#[from] RasterError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Font and emoji image retrieval errors
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Fetching {url} failed: {reason}")]
    Fetch { url: String, reason: String },

    #[error("Invalid asset data: {0}")]
    InvalidData(String),
}

/// Rasterizer errors
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Backend error: {0}")]
    Backend(String),
}
