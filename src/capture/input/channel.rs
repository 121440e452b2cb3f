use crate::capture::input::types::{PointerEvent, PointerId, PointerSample, PointerTag};
use crate::capture::surface::{Surface, SurfaceHandle};
use crate::config::GestureConfig;
use crate::gesture::engine::GestureEngine;
use crate::gesture::error::GestureResult;
use crate::gesture::scope::ListenerRegistry;
use crate::gesture::signal::SignalSink;

/// Gesture tracking bound to one surface and one signal sink
///
/// The host forwards raw pointer events; the channel runs them through the
/// engine and hands every resulting signal to the sink.
pub struct GestureChannel<S: SignalSink> {
    surface: SurfaceHandle,
    engine: GestureEngine,
    sink: S,
    events_dispatched: usize,
    signals_emitted: usize,
}

impl<S: SignalSink> GestureChannel<S> {
    pub fn new(surface: SurfaceHandle, config: GestureConfig, sink: S) -> Self {
        Self::with_listeners(surface, config, sink, ListenerRegistry::new())
    }

    pub fn with_listeners(
        surface: SurfaceHandle,
        config: GestureConfig,
        sink: S,
        listeners: ListenerRegistry,
    ) -> Self {
        Self {
            surface,
            engine: GestureEngine::with_listeners(config, listeners),
            sink,
            events_dispatched: 0,
            signals_emitted: 0,
        }
    }

    pub fn start(&mut self) -> GestureResult<()> {
        self.engine.start(self.surface.clone())?;
        self.events_dispatched = 0;
        self.signals_emitted = 0;

        let rect = self.surface.bounding_rect();
        tracing::info!(
            "Gesture tracking started (surface={}x{} at ({}, {}))",
            rect.width,
            rect.height,
            rect.left,
            rect.top
        );
        Ok(())
    }

    pub fn stop(&mut self) -> GestureResult<()> {
        if !self.engine.is_listening() {
            return Ok(());
        }

        let dropped = self.engine.stop();

        tracing::info!(
            "Gesture tracking stopped (events={}, signals={}, dropped_tracks={})",
            self.events_dispatched,
            self.signals_emitted,
            dropped
        );
        Ok(())
    }

    /// Run one event through the engine, returning how many signals it emitted
    pub fn dispatch(&mut self, event: PointerEvent) -> usize {
        self.events_dispatched += 1;

        let signals = self.engine.handle(event);
        let count = signals.len();
        for signal in signals {
            self.sink.emit(signal);
        }
        self.signals_emitted += count;
        count
    }

    /// Record a sample against this channel's surface and dispatch it
    pub fn dispatch_sample(
        &mut self,
        pointer_id: impl Into<PointerId>,
        tag: PointerTag,
        sample: PointerSample,
    ) -> usize {
        let event = PointerEvent::new(pointer_id, tag, self.surface.clone(), sample);
        self.dispatch(event)
    }

    pub fn is_listening(&self) -> bool {
        self.engine.is_listening()
    }

    pub fn engine(&self) -> &GestureEngine {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn signals_emitted(&self) -> usize {
        self.signals_emitted
    }

    /// Stop tracking and hand back the sink
    pub fn into_sink(mut self) -> S {
        let _ = self.stop();
        self.sink
    }
}
