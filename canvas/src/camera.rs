//! Screen/world conversion for the top-down room view.
//!
//! The 2D view has no pan or zoom: the canvas is sized to the room and the
//! origin of the floor plane sits at the canvas's top-left corner. One world
//! unit is one meter; `pixels_per_meter` scales it to CSS pixels.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use roomplanner::doc::{Point2D, Room};

use crate::consts::DEFAULT_PIXELS_PER_METER;

/// A point in screen space (CSS pixels, relative to the canvas).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Fixed-scale camera over the floor plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pixels_per_meter: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { pixels_per_meter: DEFAULT_PIXELS_PER_METER }
    }
}

impl Camera {
    /// A camera at `pixels_per_meter`. Non-positive or non-finite scales
    /// fall back to the default.
    #[must_use]
    pub fn new(pixels_per_meter: f64) -> Self {
        if pixels_per_meter.is_finite() && pixels_per_meter > 0.0 {
            Self { pixels_per_meter }
        } else {
            Self::default()
        }
    }

    #[must_use]
    pub fn pixels_per_meter(&self) -> f64 {
        self.pixels_per_meter
    }

    /// Convert a canvas pixel position to floor coordinates in meters.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point2D {
        Point2D::new(screen.x / self.pixels_per_meter, screen.y / self.pixels_per_meter)
    }

    /// Convert floor coordinates to canvas pixels.
    #[must_use]
    pub fn world_to_screen(&self, world: Point2D) -> Point {
        Point::new(world.x * self.pixels_per_meter, world.y * self.pixels_per_meter)
    }

    #[must_use]
    pub fn screen_dist_to_world(&self, px: f64) -> f64 {
        px / self.pixels_per_meter
    }

    #[must_use]
    pub fn world_dist_to_screen(&self, meters: f64) -> f64 {
        meters * self.pixels_per_meter
    }

    /// Canvas size in pixels for `room`: its footprint extent at this scale.
    #[must_use]
    pub fn canvas_size(&self, room: &Room) -> (f64, f64) {
        let (width, length) = room.extent();
        (self.world_dist_to_screen(width), self.world_dist_to_screen(length))
    }
}
