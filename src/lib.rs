//! # map-zoom
//!
//! Converts between a tile map's zoom level and the geographic region it
//! shows, and drives a host map widget's camera to a center at a given zoom.
//!
//! The math follows the Web Mercator (EPSG:3857) tiling scheme used by
//! slippy maps: at zoom `z` the world is `tile_size * 2^z` points wide.

pub mod core;
pub mod prelude;
pub mod traits;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{ConverterConfig, TileProfile},
    geo::{LatLng, LatLngBounds, Region},
    viewport::ViewportSize,
    zoom::{region_for_zoom_level, set_center_at_zoom_level, zoom_for_region, ZoomLevelConverter},
};

pub use traits::MapCamera;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Camera error: {0}")]
    Camera(String),
}

/// Error type alias for convenience
pub type Error = MapError;
