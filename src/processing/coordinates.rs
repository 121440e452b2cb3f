//! Surface coordinate mapping
//!
//! Converts a sample's client position into pixel offsets within the
//! surface and normalized device coordinates (NDC) in [-1, 1], Y up.

use crate::capture::input::types::{PointerEvent, PointerSample};
use crate::capture::surface::{Surface, SurfaceRect};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A sample expressed in both surface coordinate systems
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceCoordinates {
    pub pixel: Point,
    pub ndc: Point,
}

/// Map a sample against the surface's current bounding rectangle
///
/// The rectangle is queried on every call. Samples mapped before and after
/// a resize are normalized against different rectangles.
pub fn coordinates(sample: &PointerSample, surface: &dyn Surface) -> SurfaceCoordinates {
    map_to_rect(sample, &surface.bounding_rect())
}

/// Map a recorded event against the surface it was observed on
pub fn event_coordinates(event: &PointerEvent) -> SurfaceCoordinates {
    coordinates(&event.sample, event.surface())
}

/// Map a sample against a fixed rectangle
///
/// A zero-sized rectangle yields non-finite NDC values; they are not trapped.
pub fn map_to_rect(sample: &PointerSample, rect: &SurfaceRect) -> SurfaceCoordinates {
    let x = sample.client_x - rect.left;
    let y = sample.client_y - rect.top;

    SurfaceCoordinates {
        pixel: Point { x, y },
        ndc: Point {
            x: (x / rect.width) * 2.0 - 1.0,
            y: (y / rect.height) * -2.0 + 1.0,
        },
    }
}
