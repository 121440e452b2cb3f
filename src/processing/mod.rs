//! Processing of recorded pointer samples
//!
//! Coordinate normalization and the pairwise deltas gesture signals are
//! built from.

pub mod coordinates;
pub mod delta;

pub use coordinates::{coordinates, map_to_rect, Point, SurfaceCoordinates};
pub use delta::{latest_delta, pinch_distance_delta, pointer_delta, CoordinateDelta, PointerDelta};
