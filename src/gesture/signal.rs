//! Gesture signals and where they go
//!
//! Signals are serialized the way a DOM `CustomEvent` would carry them:
//! the event name under `type` and its payload under `detail`.

use crate::capture::input::types::PointerId;
use crate::processing::delta::PointerDelta;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedSender;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum GestureSignal {
    #[serde(rename = "panstart")]
    PanStart { x: f64, y: f64 },

    #[serde(rename = "panmove")]
    PanMove { x: f64, y: f64, dx: f64, dy: f64 },

    #[serde(rename = "panend")]
    PanEnd { x: f64, y: f64 },

    #[serde(rename = "multipointerpanmove", rename_all = "camelCase")]
    MultiPointerMove {
        pointer_id: PointerId,
        delta: PointerDelta,
    },
}

impl GestureSignal {
    pub fn kind(&self) -> SignalKind {
        match self {
            GestureSignal::PanStart { .. } => SignalKind::PanStart,
            GestureSignal::PanMove { .. } => SignalKind::PanMove,
            GestureSignal::PanEnd { .. } => SignalKind::PanEnd,
            GestureSignal::MultiPointerMove { .. } => SignalKind::MultiPointerMove,
        }
    }
}

/// Kinds of gesture signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    PanStart,
    PanMove,
    PanEnd,
    MultiPointerMove,
}

impl std::fmt::Display for SignalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignalKind::PanStart => write!(f, "panstart"),
            SignalKind::PanMove => write!(f, "panmove"),
            SignalKind::PanEnd => write!(f, "panend"),
            SignalKind::MultiPointerMove => write!(f, "multipointerpanmove"),
        }
    }
}

/// Receiver of emitted signals
pub trait SignalSink {
    fn emit(&mut self, signal: GestureSignal);
}

impl SignalSink for Vec<GestureSignal> {
    fn emit(&mut self, signal: GestureSignal) {
        self.push(signal);
    }
}

/// Forwards signals to an async consumer
///
/// A closed receiver is not an error; the signal is dropped.
impl SignalSink for UnboundedSender<GestureSignal> {
    fn emit(&mut self, signal: GestureSignal) {
        if let Err(e) = self.send(signal) {
            tracing::debug!("Signal receiver closed, dropping {}", e.0.kind());
        }
    }
}

/// Adapts a closure into a sink
pub struct FnSink<F>(pub F);

impl<F: FnMut(GestureSignal)> SignalSink for FnSink<F> {
    fn emit(&mut self, signal: GestureSignal) {
        (self.0)(signal)
    }
}
