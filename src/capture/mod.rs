//! Capture side of gesture tracking
//!
//! Surfaces, pointer samples and the channel that listens on a surface.

pub mod input;
pub mod surface;

pub use input::GestureChannel;
pub use surface::{ResizableSurface, Surface, SurfaceHandle, SurfaceRect};
