//! Pointer input
//!
//! Tagged pointer samples as delivered by the host, and the channel that
//! feeds them through the gesture engine into a signal sink.

pub mod channel;
pub mod types;

pub use channel::GestureChannel;
pub use types::{PointerEvent, PointerId, PointerSample, PointerTag};
