//! Converter configuration
//!
//! Tile maps differ in the reference tile size that relates zoom level to
//! visible degrees. Presets cover the common raster and vector tile schemes;
//! anything else can be supplied as a custom configuration or read from JSON.

use crate::core::constants::{MAX_LATITUDE, MAX_ZOOM, TILE_SIZE};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub enum TileProfile {
    /// 256 point raster tiles (OSM, MapKit, Google)
    Raster,
    /// 512 point vector tiles (Mapbox GL, MapLibre)
    Vector,
    Custom(ConverterConfig),
}

impl TileProfile {
    pub fn resolve(&self) -> ConverterConfig {
        match self {
            Self::Raster => ConverterConfig {
                tile_size: TILE_SIZE,
                max_latitude: MAX_LATITUDE,
                max_zoom: MAX_ZOOM,
            },
            Self::Vector => ConverterConfig {
                tile_size: 512.0,
                max_latitude: MAX_LATITUDE,
                max_zoom: 24,
            },
            Self::Custom(config) => *config,
        }
    }
}

impl Default for TileProfile {
    fn default() -> Self {
        Self::Raster
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// Points covered by one tile at its native zoom
    pub tile_size: f64,
    /// Largest absolute center latitude accepted
    pub max_latitude: f64,
    /// Deepest zoom level accepted
    pub max_zoom: u32,
}

impl ConverterConfig {
    /// Parses a JSON configuration; missing fields take raster defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.tile_size.is_finite() && self.tile_size > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "tile_size must be positive, got {}",
                self.tile_size
            )));
        }
        if !(self.max_latitude > 0.0 && self.max_latitude < 90.0) {
            return Err(MapError::InvalidConfig(format!(
                "max_latitude must be in (0, 90), got {}",
                self.max_latitude
            )));
        }
        // 2^max_zoom must stay exact in an f64 mantissa
        if self.max_zoom > 52 {
            return Err(MapError::InvalidConfig(format!(
                "max_zoom must be at most 52, got {}",
                self.max_zoom
            )));
        }
        Ok(())
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        TileProfile::default().resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_presets() {
        let raster = TileProfile::Raster.resolve();
        let vector = TileProfile::Vector.resolve();

        assert_eq!(raster.tile_size, 256.0);
        assert_eq!(raster.max_zoom, 28);
        assert_eq!(vector.tile_size, 512.0);
        assert_eq!(ConverterConfig::default(), raster);
        assert!(raster.validate().is_ok());
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = ConverterConfig::from_json(r#"{ "tile_size": 512.0 }"#).unwrap();
        assert_eq!(config.tile_size, 512.0);
        assert_eq!(config.max_latitude, MAX_LATITUDE);
        assert_eq!(config.max_zoom, MAX_ZOOM);
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            ConverterConfig::from_json("{ not json"),
            Err(MapError::Serialization(_))
        ));
        assert!(matches!(
            ConverterConfig::from_json(r#"{ "tile_size": 0.0 }"#),
            Err(MapError::InvalidConfig(_))
        ));
        assert!(matches!(
            ConverterConfig::from_json(r#"{ "max_latitude": 90.0 }"#),
            Err(MapError::InvalidConfig(_))
        ));
    }
}
