//! Tracked surfaces
//!
//! A surface is the element pointer samples are observed against. Its
//! bounding rectangle defines the origin for pixel and NDC coordinates and
//! is re-queried every time a sample is mapped.

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Bounding rectangle of a surface in client coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Anything that can report its current bounding rectangle
pub trait Surface: Send + Sync + fmt::Debug {
    /// Current geometry of the surface
    fn bounding_rect(&self) -> SurfaceRect;
}

/// Shared handle to a surface, carried by every recorded event
pub type SurfaceHandle = Arc<dyn Surface>;

/// A rectangle is a surface that never moves
impl Surface for SurfaceRect {
    fn bounding_rect(&self) -> SurfaceRect {
        *self
    }
}

/// Surface whose geometry is updated by the host (layout, window resize)
///
/// Clones share the same rectangle, so a handle given to the gesture
/// channel observes resizes made through any other clone.
#[derive(Debug, Clone, Default)]
pub struct ResizableSurface {
    rect: Arc<RwLock<SurfaceRect>>,
}

impl ResizableSurface {
    pub fn new(rect: SurfaceRect) -> Self {
        Self {
            rect: Arc::new(RwLock::new(rect)),
        }
    }

    /// Replace the current geometry
    pub fn resize(&self, rect: SurfaceRect) {
        tracing::trace!(
            "Surface resized to {}x{} at ({}, {})",
            rect.width,
            rect.height,
            rect.left,
            rect.top
        );
        *self.rect.write() = rect;
    }

    pub fn handle(&self) -> SurfaceHandle {
        Arc::new(self.clone())
    }
}

impl Surface for ResizableSurface {
    fn bounding_rect(&self) -> SurfaceRect {
        *self.rect.read()
    }
}
