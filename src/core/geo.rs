use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Degrees of latitude covered by `height` points centered on `lat` in a
/// Mercator world `world_size` points tall.
///
/// Uses `tan(A - B)` of the two edge latitudes, so a height that is tiny next
/// to the world size still yields a positive span.
pub fn lat_span_for_height(lat: f64, height: f64, world_size: f64) -> f64 {
    // half the height in Mercator radians; the world is 2π tall
    let half = PI * height / world_size;
    let sinh_half = half.sinh();
    let cos_lat = lat.to_radians().cos();
    (2.0 * sinh_half * cos_lat)
        .atan2(1.0 - sinh_half * sinh_half * cos_lat * cos_lat)
        .to_degrees()
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }
}

/// A geographic region: a center plus the degrees of latitude and longitude
/// covered around it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: LatLng,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl Region {
    pub fn new(center: LatLng, lat_span: f64, lng_span: f64) -> Self {
        Self {
            center,
            lat_span,
            lng_span,
        }
    }

    /// Creates a region covering the given bounds
    pub fn from_bounds(bounds: &LatLngBounds) -> Self {
        let span = bounds.span();
        Self::new(bounds.center(), span.lat.abs(), span.lng.abs())
    }

    /// Valid center and finite, non-negative spans
    pub fn is_valid(&self) -> bool {
        self.center.is_valid()
            && self.lat_span.is_finite()
            && self.lng_span.is_finite()
            && self.lat_span >= 0.0
            && self.lng_span >= 0.0
    }

    /// South-west and north-east corners of the region
    pub fn bounds(&self) -> LatLngBounds {
        let half_lat = self.lat_span / 2.0;
        let half_lng = self.lng_span / 2.0;
        LatLngBounds::from_coords(
            self.center.lat - half_lat,
            self.center.lng - half_lng,
            self.center.lat + half_lat,
            self.center.lng + half_lng,
        )
    }
}
