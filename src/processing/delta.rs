//! Pairwise pointer deltas
//!
//! Differences between two recorded events, always later minus earlier
//! (B - A). Consumers rely on the sign for direction.

use crate::capture::input::types::PointerEvent;
use crate::processing::coordinates::{event_coordinates, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CoordinateDelta {
    pub dx: f64,
    pub dy: f64,
}

impl CoordinateDelta {
    fn between(a: Point, b: Point) -> Self {
        Self {
            dx: b.x - a.x,
            dy: b.y - a.y,
        }
    }
}

/// Structured difference between two samples
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerDelta {
    /// Elapsed time in the host's timestamp unit
    pub dt: f64,
    pub d_pressure_normal: f64,
    pub d_pressure_tangential: f64,
    /// Change in contact area (width x height)
    pub d_area: f64,
    pub d_tilt_x: f64,
    pub d_tilt_y: f64,
    pub d_twist: f64,
    pub d_normalized_device_coords: CoordinateDelta,
    pub d_pixel_coords: CoordinateDelta,
}

impl PointerDelta {
    /// False when a zero-sized surface produced an unbounded NDC delta
    pub fn is_finite(&self) -> bool {
        [
            self.dt,
            self.d_pressure_normal,
            self.d_pressure_tangential,
            self.d_area,
            self.d_tilt_x,
            self.d_tilt_y,
            self.d_twist,
            self.d_normalized_device_coords.dx,
            self.d_normalized_device_coords.dy,
            self.d_pixel_coords.dx,
            self.d_pixel_coords.dy,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Compute `b - a` for every sample reading and both coordinate systems
///
/// Each event is mapped against its own surface at call time.
pub fn pointer_delta(a: &PointerEvent, b: &PointerEvent) -> PointerDelta {
    let coords_a = event_coordinates(a);
    let coords_b = event_coordinates(b);
    let (sa, sb) = (&a.sample, &b.sample);

    PointerDelta {
        dt: sb.time_stamp - sa.time_stamp,
        d_pressure_normal: sb.pressure - sa.pressure,
        d_pressure_tangential: sb.tangential_pressure - sa.tangential_pressure,
        d_area: sb.contact_area() - sa.contact_area(),
        d_tilt_x: sb.tilt_x - sa.tilt_x,
        d_tilt_y: sb.tilt_y - sa.tilt_y,
        d_twist: sb.twist - sa.twist,
        d_normalized_device_coords: CoordinateDelta::between(coords_a.ndc, coords_b.ndc),
        d_pixel_coords: CoordinateDelta::between(coords_a.pixel, coords_b.pixel),
    }
}

/// Delta between the last two samples of a track
pub fn latest_delta(track: &[PointerEvent]) -> Option<PointerDelta> {
    match track {
        [.., previous, last] => Some(pointer_delta(previous, last)),
        _ => None,
    }
}

fn ndc_distance(a: &PointerEvent, b: &PointerEvent) -> f64 {
    let pa = event_coordinates(a).ndc;
    let pb = event_coordinates(b).ndc;
    ((pb.x - pa.x).powi(2) + (pb.y - pa.y).powi(2)).sqrt()
}

/// Change in NDC distance between two tracks over their latest step
///
/// Distance between the two tracks' last samples minus the distance between
/// their second-to-last samples. Positive means the pointers spread apart.
/// Returns `None` if either track holds fewer than two samples.
pub fn pinch_distance_delta(track_a: &[PointerEvent], track_b: &[PointerEvent]) -> Option<f64> {
    let ([.., a_before, a_after], [.., b_before, b_after]) = (track_a, track_b) else {
        return None;
    };

    Some(ndc_distance(a_after, b_after) - ndc_distance(a_before, b_before))
}
