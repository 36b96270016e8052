//! Zoom level ↔ region conversion
//!
//! At zoom `z` the Mercator world is `tile_size * 2^z` points wide, so a
//! viewport `w` points wide shows `360 / 2^z * w / tile_size` degrees of
//! longitude. Latitude span is the Mercator distance between the viewport's
//! top and bottom edges, capped so the region stays off the poles.

use crate::core::config::{ConverterConfig, TileProfile};
use crate::core::constants::WORLD_LNG_SPAN;
use crate::core::geo::{lat_span_for_height, LatLng, Region};
use crate::core::viewport::ViewportSize;
use crate::traits::MapCamera;
use crate::{MapError, Result};

/// Converts between zoom levels and visible regions for one tile scheme
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomLevelConverter {
    config: ConverterConfig,
}

impl ZoomLevelConverter {
    pub fn new(config: ConverterConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn from_profile(profile: &TileProfile) -> Result<Self> {
        Self::new(profile.resolve())
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Region visible around `center` at integer `zoom` in `viewport`.
    ///
    /// Fails with [`MapError::OutOfRange`] when the center latitude is outside
    /// the Mercator domain, the zoom exceeds the configured maximum, or the
    /// viewport has no area.
    pub fn region_for_zoom_level(
        &self,
        center: LatLng,
        zoom: u32,
        viewport: ViewportSize,
    ) -> Result<Region> {
        if zoom > self.config.max_zoom {
            return Err(MapError::OutOfRange(format!(
                "zoom level {} exceeds maximum {}",
                zoom, self.config.max_zoom
            )));
        }
        self.region_at_scale(center, 2_f64.powi(zoom as i32), viewport)
    }

    /// Continuous-zoom variant of [`Self::region_for_zoom_level`].
    pub fn region_for_zoom(
        &self,
        center: LatLng,
        zoom: f64,
        viewport: ViewportSize,
    ) -> Result<Region> {
        if !zoom.is_finite() || zoom < 0.0 || zoom > self.config.max_zoom as f64 {
            return Err(MapError::OutOfRange(format!(
                "zoom {} outside [0, {}]",
                zoom, self.config.max_zoom
            )));
        }
        self.region_at_scale(center, zoom.exp2(), viewport)
    }

    fn region_at_scale(
        &self,
        center: LatLng,
        scale: f64,
        viewport: ViewportSize,
    ) -> Result<Region> {
        self.check_center(&center)?;
        viewport.validate()?;

        let tile_size = self.config.tile_size;
        let lng_span = (WORLD_LNG_SPAN / scale * viewport.width / tile_size).min(WORLD_LNG_SPAN);

        // center ± lat_span / 2 must not run past either pole
        let pole_limit = 2.0 * (90.0 - center.lat.abs());
        let lat_span =
            lat_span_for_height(center.lat, viewport.height, tile_size * scale).min(pole_limit);

        if !(lat_span > 0.0 && lng_span > 0.0) {
            return Err(MapError::OutOfRange(format!(
                "viewport {}x{} too small to resolve at scale {}",
                viewport.width, viewport.height, scale
            )));
        }

        let region = Region::new(center, lat_span, lng_span);
        log::debug!(
            "region at scale {} for {:?}: lat_span={:.8} lng_span={:.8}",
            scale,
            center,
            region.lat_span,
            region.lng_span
        );
        Ok(region)
    }

    /// Fractional zoom at which `region`'s longitude span fills `viewport`'s width.
    pub fn zoom_for_region(&self, region: &Region, viewport: ViewportSize) -> Result<f64> {
        viewport.validate()?;
        if !region.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "region {:?} has an invalid center or span",
                region
            )));
        }
        if region.lng_span <= 0.0 {
            return Err(MapError::OutOfRange(format!(
                "region longitude span must be positive, got {}",
                region.lng_span
            )));
        }
        Ok((WORLD_LNG_SPAN * viewport.width / (region.lng_span * self.config.tile_size)).log2())
    }

    /// Integer zoom for `region`, floored so the level never shows less than
    /// the region, and clamped to `[0, max_zoom]`.
    pub fn zoom_level_for_region(&self, region: &Region, viewport: ViewportSize) -> Result<u32> {
        let zoom = self.zoom_for_region(region, viewport)?;
        // absorbs log2 rounding just below an exact level
        let level = (zoom + 1e-9).floor().clamp(0.0, self.config.max_zoom as f64);
        Ok(level as u32)
    }

    /// Centers `camera` on `center` at `zoom`, forwarding the animation flag.
    ///
    /// Zoom levels past the configured maximum are clamped rather than
    /// rejected. Returns the region handed to the camera and the flag.
    pub fn set_center_at_zoom_level<C: MapCamera + ?Sized>(
        &self,
        camera: &mut C,
        center: LatLng,
        zoom: u32,
        animated: bool,
    ) -> Result<(Region, bool)> {
        let zoom = if zoom > self.config.max_zoom {
            log::warn!(
                "zoom level {} clamped to maximum {}",
                zoom,
                self.config.max_zoom
            );
            self.config.max_zoom
        } else {
            zoom
        };

        let region = self.region_for_zoom_level(center, zoom, camera.viewport_size())?;
        camera.set_visible_region(region, animated)?;
        Ok((region, animated))
    }

    /// Fractional zoom of what `camera` currently shows
    pub fn current_zoom<C: MapCamera + ?Sized>(&self, camera: &C) -> Result<f64> {
        self.zoom_for_region(&camera.visible_region(), camera.viewport_size())
    }

    /// Integer zoom of what `camera` currently shows
    pub fn current_zoom_level<C: MapCamera + ?Sized>(&self, camera: &C) -> Result<u32> {
        self.zoom_level_for_region(&camera.visible_region(), camera.viewport_size())
    }

    /// Pulls `center` into the range this converter accepts
    pub fn clamp_center(&self, center: LatLng) -> LatLng {
        let max_latitude = self.config.max_latitude;
        LatLng::new(
            center.lat.clamp(-max_latitude, max_latitude),
            LatLng::wrap_lng(center.lng),
        )
    }

    fn check_center(&self, center: &LatLng) -> Result<()> {
        if !(center.lat.is_finite() && center.lat.abs() <= self.config.max_latitude) {
            return Err(MapError::OutOfRange(format!(
                "center latitude {} outside ±{}",
                center.lat, self.config.max_latitude
            )));
        }
        if !(center.lng >= -180.0 && center.lng <= 180.0) {
            return Err(MapError::InvalidCoordinates(format!(
                "center longitude {} outside [-180, 180]",
                center.lng
            )));
        }
        Ok(())
    }
}

/// [`ZoomLevelConverter::region_for_zoom_level`] with 256 point raster tiles
pub fn region_for_zoom_level(
    center: LatLng,
    zoom: u32,
    viewport: ViewportSize,
) -> Result<Region> {
    ZoomLevelConverter::default().region_for_zoom_level(center, zoom, viewport)
}

/// [`ZoomLevelConverter::zoom_for_region`] with 256 point raster tiles
pub fn zoom_for_region(region: &Region, viewport: ViewportSize) -> Result<f64> {
    ZoomLevelConverter::default().zoom_for_region(region, viewport)
}

/// [`ZoomLevelConverter::set_center_at_zoom_level`] with 256 point raster tiles
pub fn set_center_at_zoom_level<C: MapCamera + ?Sized>(
    camera: &mut C,
    center: LatLng,
    zoom: u32,
    animated: bool,
) -> Result<(Region, bool)> {
    ZoomLevelConverter::default().set_center_at_zoom_level(camera, center, zoom, animated)
}
