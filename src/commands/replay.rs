//! Trace replay commands
//!
//! Runs a recorded pointer trace through a gesture channel and returns or
//! writes the signals it produced.

use crate::capture::input::types::{PointerId, PointerSample, PointerTag};
use crate::capture::input::GestureChannel;
use crate::capture::surface::SurfaceRect;
use crate::config::GestureConfig;
use crate::gesture::error::GestureResult;
use crate::gesture::signal::GestureSignal;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// One recorded pointer event
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceEvent {
    pub pointer_id: PointerId,
    pub tag: PointerTag,
    #[serde(flatten)]
    pub sample: PointerSample,
}

/// A recorded session against a fixed surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trace {
    pub surface: SurfaceRect,
    #[serde(default)]
    pub config: Option<GestureConfig>,
    pub events: Vec<TraceEvent>,
}

/// Replay a trace, using its own config unless one is given
pub fn replay(trace: &Trace, config: Option<&GestureConfig>) -> GestureResult<Vec<GestureSignal>> {
    let config = config
        .or(trace.config.as_ref())
        .cloned()
        .unwrap_or_default();
    config.validate()?;

    let mut channel = GestureChannel::new(Arc::new(trace.surface), config, Vec::new());
    channel.start()?;

    for event in &trace.events {
        channel.dispatch_sample(event.pointer_id.clone(), event.tag, event.sample);
    }

    Ok(channel.into_sink())
}

pub fn load_trace(path: &Path) -> anyhow::Result<Trace> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read trace file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse trace file {}", path.display()))
}

/// Replay a trace file and return the signals
pub fn replay_trace(input_file: &Path) -> anyhow::Result<Vec<GestureSignal>> {
    let trace = load_trace(input_file)?;

    tracing::info!(
        "Replaying {} events over a {}x{} surface",
        trace.events.len(),
        trace.surface.width,
        trace.surface.height
    );

    let signals = replay(&trace, None)?;

    tracing::info!("Generated {} signals", signals.len());

    Ok(signals)
}

/// Replay a trace file and write the signals as JSON
pub fn process_trace(input_file: &Path, output_file: &Path) -> anyhow::Result<usize> {
    let signals = replay_trace(input_file)?;
    let output = serde_json::to_vec_pretty(&signals).context("Failed to serialize signals")?;

    std::fs::write(output_file, output)
        .with_context(|| format!("Failed to write output file {}", output_file.display()))?;

    tracing::info!("Wrote {} signals to {}", signals.len(), output_file.display());

    Ok(signals.len())
}
