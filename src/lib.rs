//! Pointer Gestures - pan and multi-pointer deltas from raw pointer input.
//!
//! Tracks simultaneous pointer contacts on a surface and turns per-pointer
//! samples into pan start/move/end signals and per-track movement deltas,
//! the raw material for pinch and rotate recognition.

pub mod capture;
pub mod commands;
pub mod config;
pub mod gesture;
pub mod processing;
pub mod tracking;

pub use capture::{GestureChannel, ResizableSurface, Surface, SurfaceHandle, SurfaceRect};
pub use capture::input::{PointerEvent, PointerId, PointerSample, PointerTag};
pub use config::GestureConfig;
pub use gesture::{GestureEngine, GestureError, GestureResult, GestureSignal, SignalSink};
pub use processing::{PointerDelta, SurfaceCoordinates};

use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the tracing subscriber, honoring `RUST_LOG`
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pointer_gestures=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Entry point of the `gesture-replay` binary
///
/// `gesture-replay <trace.json> [output.json]`: replays the trace and
/// writes the signals to the output file, or prints them to stdout.
pub fn run() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting gesture-replay v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args_os().skip(1);
    let input = args
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("usage: gesture-replay <trace.json> [output.json]"))?;

    match args.next().map(PathBuf::from) {
        Some(output) => {
            commands::replay::process_trace(&input, &output)?;
        }
        None => {
            let signals = commands::replay::replay_trace(&input)?;
            println!("{}", serde_json::to_string_pretty(&signals)?);
        }
    }

    Ok(())
}
