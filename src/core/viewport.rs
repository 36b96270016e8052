use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Size of the host widget's rendering surface in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Rejects sizes that would divide by zero in span calculations
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(MapError::OutOfRange(format!(
                "viewport width must be positive, got {}",
                self.width
            )));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(MapError::OutOfRange(format!(
                "viewport height must be positive, got {}",
                self.height
            )));
        }
        Ok(())
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}
