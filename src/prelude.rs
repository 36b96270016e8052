//! Prelude module for common map-zoom types and traits
//!
//! `use map_zoom::prelude::*;` brings in everything needed to convert zoom
//! levels and drive a host camera.

pub use crate::core::{
    config::{ConverterConfig, TileProfile},
    constants::{MAX_LATITUDE, MAX_ZOOM, TILE_SIZE},
    geo::{LatLng, LatLngBounds, Region},
    viewport::ViewportSize,
    zoom::ZoomLevelConverter,
};

pub use crate::traits::MapCamera;

pub use crate::{MapError, Result};
