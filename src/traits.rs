//! Boundary with the host map widget
//!
//! The widget owns rendering, animation and gestures. This crate only reads
//! what the widget currently shows and asks it to show a different region.

use crate::{
    core::{geo::Region, viewport::ViewportSize},
    Result,
};

/// Camera control surface of a host map widget
pub trait MapCamera {
    /// Current size of the rendering surface in points
    fn viewport_size(&self) -> ViewportSize;

    /// Region currently visible
    fn visible_region(&self) -> Region;

    /// Moves the camera so that `region` is visible, optionally animated.
    /// Runs on the caller's thread, under the widget's own threading rules.
    fn set_visible_region(&mut self, region: Region, animated: bool) -> Result<()>;
}
