//! Web Mercator constants shared by the geo and zoom modules.

/// Default square tile size in points.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude at which the Web Mercator world square ends, `atan(sinh(π))` in degrees.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// Longitude span of the whole world.
pub const WORLD_LNG_SPAN: f64 = 360.0;

/// Deepest zoom a camera is moved to; deeper requests are clamped.
pub const MAX_ZOOM: u32 = 28;
