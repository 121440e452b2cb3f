//! Gesture recognition
//!
//! The state machine that turns pointer events into pan and multi-pointer
//! signals, plus the listener guards and sinks around it.

pub mod engine;
pub mod error;
pub mod scope;
pub mod signal;

pub use engine::{GestureEngine, PanState};
pub use error::{GestureError, GestureResult};
pub use scope::{Listener, ListenerRegistry, Subscription};
pub use signal::{FnSink, GestureSignal, SignalKind, SignalSink};
