//! Gesture state machine
//!
//! Owns the pointer cache and turns tagged pointer events, processed one at
//! a time in arrival order, into gesture signals. The engine is Idle until a
//! "down" binds the primary position, and Active while it holds the global
//! move/up listeners. Any number of other pointers may be tracked in the
//! cache at the same time.

use crate::capture::input::types::{PointerEvent, PointerId, PointerTag};
use crate::capture::surface::SurfaceHandle;
use crate::config::GestureConfig;
use crate::gesture::error::{GestureError, GestureResult};
use crate::gesture::scope::{Listener, ListenerRegistry, Subscription};
use crate::gesture::signal::GestureSignal;
use crate::processing::coordinates::Point;
use crate::processing::delta::{latest_delta, pinch_distance_delta};
use crate::tracking::cache::PointerCache;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanState {
    /// No pan in progress; only "down" is listened for
    Idle,
    /// Pan in progress; "move" and "up" are listened for globally
    Active,
}

#[derive(Debug)]
pub struct GestureEngine {
    config: GestureConfig,
    cache: PointerCache,
    primary: Option<Point>,
    surface: Option<SurfaceHandle>,
    listeners: ListenerRegistry,
    surface_listener: Option<Subscription>,
    pan_listener: Option<Subscription>,
}

impl GestureEngine {
    pub fn new(config: GestureConfig) -> Self {
        Self::with_listeners(config, ListenerRegistry::new())
    }

    /// Engine attaching its listeners to a registry shared with the host
    pub fn with_listeners(config: GestureConfig, listeners: ListenerRegistry) -> Self {
        Self {
            config,
            cache: PointerCache::new(),
            primary: None,
            surface: None,
            listeners,
            surface_listener: None,
            pan_listener: None,
        }
    }

    /// Begin listening for "down" on a surface
    pub fn start(&mut self, surface: SurfaceHandle) -> GestureResult<()> {
        if self.is_listening() {
            return Err(GestureError::AlreadyListening);
        }

        self.surface_listener = Some(self.listeners.subscribe(&[Listener::SurfaceDown]));
        self.surface = Some(surface);
        tracing::debug!("Gesture engine listening");
        Ok(())
    }

    /// Detach every listener and drop all tracks
    ///
    /// Safe to call at any point, including mid-pan. Returns the number of
    /// tracks that were still active.
    pub fn stop(&mut self) -> usize {
        self.pan_listener = None;
        self.surface_listener = None;
        self.surface = None;
        self.primary = None;

        let dropped = self.cache.clear();
        if dropped > 0 {
            tracing::debug!("Gesture engine stopped with {} active tracks", dropped);
        }
        dropped
    }

    pub fn is_listening(&self) -> bool {
        self.surface_listener.is_some()
    }

    pub fn state(&self) -> PanState {
        if self.pan_listener.is_some() {
            PanState::Active
        } else {
            PanState::Idle
        }
    }

    /// Last position of the primary pointer, in client coordinates
    pub fn primary_position(&self) -> Option<Point> {
        self.primary
    }

    pub fn cache(&self) -> &PointerCache {
        &self.cache
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Change in NDC distance between two tracked pointers over their latest step
    pub fn pinch_delta(&self, a: &PointerId, b: &PointerId) -> Option<f64> {
        pinch_distance_delta(self.cache.get(a)?, self.cache.get(b)?)
    }

    /// Process one event to completion and return the signals it produced
    ///
    /// Never fails. Events nobody is listening for are dropped, and
    /// inconsistent input (moves for unknown pointers, repeated downs)
    /// only degrades the cache update.
    pub fn handle(&mut self, event: PointerEvent) -> Vec<GestureSignal> {
        if !self.accepts(&event) {
            tracing::trace!(
                "Dropping {} for pointer {} (state={:?})",
                event.tag,
                event.pointer_id,
                self.state()
            );
            return Vec::new();
        }

        match event.tag {
            PointerTag::Down => self.on_down(event),
            PointerTag::Move => self.on_move(event),
            PointerTag::Up => self.on_up(event),
            PointerTag::Cancel => self.on_cancel(event),
            PointerTag::Enter | PointerTag::Leave | PointerTag::Out | PointerTag::Over => {
                tracing::trace!("Ignoring {} for pointer {}", event.tag, event.pointer_id);
                Vec::new()
            }
        }
    }

    fn accepts(&self, event: &PointerEvent) -> bool {
        match event.tag {
            PointerTag::Move | PointerTag::Up => self.pan_listener.is_some(),
            // "down" is only listened for on the surface passed to start
            PointerTag::Down => self
                .surface
                .as_ref()
                .is_some_and(|surface| Arc::ptr_eq(surface, &event.surface)),
            _ => self.is_listening(),
        }
    }

    fn on_down(&mut self, event: PointerEvent) -> Vec<GestureSignal> {
        let position = client_position(&event);
        self.cache.begin(event.pointer_id.clone(), event);

        let first_contact = self.pan_listener.is_none();
        if first_contact {
            self.pan_listener = Some(
                self.listeners
                    .subscribe(&[Listener::GlobalMove, Listener::GlobalUp]),
            );
        } else if !self.config.reanchor_on_every_down {
            return Vec::new();
        }

        self.primary = Some(position);
        tracing::debug!(
            "Pan start at ({}, {}), {} tracked pointers",
            position.x,
            position.y,
            self.cache.len()
        );
        vec![GestureSignal::PanStart {
            x: position.x,
            y: position.y,
        }]
    }

    fn on_move(&mut self, event: PointerEvent) -> Vec<GestureSignal> {
        let position = client_position(&event);
        self.cache.append(&event.pointer_id.clone(), event);

        let mut signals = Vec::new();
        if let Some(previous) = self.primary.replace(position) {
            signals.push(GestureSignal::PanMove {
                x: position.x,
                y: position.y,
                dx: position.x - previous.x,
                dy: position.y - previous.y,
            });
        }
        signals.extend(self.multi_pointer_moves());
        signals
    }

    fn on_up(&mut self, event: PointerEvent) -> Vec<GestureSignal> {
        let position = client_position(&event);
        self.cache.end(&event.pointer_id);
        self.primary = Some(position);

        if self.cache.is_empty() {
            self.end_pan();
        }

        tracing::debug!("Pan end at ({}, {})", position.x, position.y);
        vec![GestureSignal::PanEnd {
            x: position.x,
            y: position.y,
        }]
    }

    /// No "up" follows a cancel, so the track has to end here for the pan
    /// scope to be released
    fn on_cancel(&mut self, event: PointerEvent) -> Vec<GestureSignal> {
        if self.config.end_track_on_cancel && self.cache.end(&event.pointer_id).is_some() {
            tracing::debug!("Pointer {} cancelled", event.pointer_id);
            if self.cache.is_empty() {
                self.end_pan();
            }
        }
        Vec::new()
    }

    fn end_pan(&mut self) {
        if let Some(subscription) = self.pan_listener.take() {
            subscription.release();
        }
    }

    /// One signal per qualifying track, in first-contact order
    ///
    /// Tracks that did not move in this event still report their latest
    /// step, so the same step can be emitted several times. Consumers that
    /// accumulate deltas should only count the signal whose `pointer_id`
    /// matches the moving pointer.
    fn multi_pointer_moves(&self) -> Vec<GestureSignal> {
        let min_len = self.config.multi_pointer_min_track_len;
        self.cache
            .iter()
            .filter(|(_, track)| track.len() >= min_len)
            .filter_map(|(id, track)| {
                latest_delta(track).map(|delta| GestureSignal::MultiPointerMove {
                    pointer_id: id.clone(),
                    delta,
                })
            })
            .collect()
    }
}

impl Drop for GestureEngine {
    fn drop(&mut self) {
        if self.is_listening() {
            self.stop();
        }
    }
}

fn client_position(event: &PointerEvent) -> Point {
    Point {
        x: event.sample.client_x,
        y: event.sample.client_y,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::input::types::PointerSample;
    use crate::capture::surface::{ResizableSurface, SurfaceRect};
    use crate::gesture::signal::SignalKind;
    use std::sync::OnceLock;

    fn square_surface() -> SurfaceHandle {
        static SURFACE: OnceLock<SurfaceHandle> = OnceLock::new();
        SURFACE
            .get_or_init(|| Arc::new(SurfaceRect::new(0.0, 0.0, 100.0, 100.0)))
            .clone()
    }

    fn engine_on(surface: &SurfaceHandle, config: GestureConfig) -> GestureEngine {
        let mut engine = GestureEngine::new(config);
        engine.start(surface.clone()).unwrap();
        engine
    }

    fn started_engine(config: GestureConfig) -> GestureEngine {
        engine_on(&square_surface(), config)
    }

    fn event(surface: &SurfaceHandle, id: i32, tag: PointerTag, t: f64, x: f64, y: f64) -> PointerEvent {
        PointerEvent::new(id, tag, surface.clone(), PointerSample::at(t, x, y))
    }

    fn feed(engine: &mut GestureEngine, events: Vec<PointerEvent>) -> Vec<GestureSignal> {
        events.into_iter().flat_map(|e| engine.handle(e)).collect()
    }

    fn kinds(signals: &[GestureSignal]) -> Vec<SignalKind> {
        signals.iter().map(|s| s.kind()).collect()
    }

    fn pan_only(signals: Vec<GestureSignal>) -> Vec<GestureSignal> {
        signals
            .into_iter()
            .filter(|s| s.kind() != SignalKind::MultiPointerMove)
            .collect()
    }

    #[test]
    fn test_single_pointer_pan_scenario() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        let signals = feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 1, PointerTag::Move, 16.0, 15.0, 10.0),
                event(&surface, 1, PointerTag::Up, 32.0, 15.0, 10.0),
            ],
        );

        assert_eq!(
            pan_only(signals.clone()),
            vec![
                GestureSignal::PanStart { x: 10.0, y: 10.0 },
                GestureSignal::PanMove {
                    x: 15.0,
                    y: 10.0,
                    dx: 5.0,
                    dy: 0.0
                },
                GestureSignal::PanEnd { x: 15.0, y: 10.0 },
            ]
        );

        // The move also reports the track's latest step
        let Some(GestureSignal::MultiPointerMove { pointer_id, delta }) = signals.get(2) else {
            panic!("expected a multi-pointer move after the pan move, got {:?}", kinds(&signals));
        };
        assert_eq!(pointer_id.as_str(), "1");
        assert_eq!(delta.dt, 16.0);
        assert_eq!(delta.d_pixel_coords.dx, 5.0);
        assert!((delta.d_normalized_device_coords.dx - 0.1).abs() < 1e-12);

        assert!(engine.cache().is_empty());
        assert_eq!(engine.state(), PanState::Idle);
    }

    #[test]
    fn test_down_then_up_without_move() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        let signals = feed(
            &mut engine,
            vec![
                event(&surface, 4, PointerTag::Down, 0.0, 30.0, 40.0),
                event(&surface, 4, PointerTag::Up, 50.0, 30.0, 40.0),
            ],
        );

        assert_eq!(kinds(&signals), vec![SignalKind::PanStart, SignalKind::PanEnd]);
        assert!(!engine.cache().contains(&4.into()));
    }

    #[test]
    fn test_move_for_unknown_pointer_leaves_cache_unchanged() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0));
        let signals = engine.handle(event(&surface, 9, PointerTag::Move, 8.0, 20.0, 20.0));

        assert_eq!(engine.cache().len(), 1);
        assert!(!engine.cache().contains(&9.into()));
        assert_eq!(engine.cache().get(&1.into()).unwrap().len(), 2);

        // Pan logic does not depend on the cache, so it still moves
        assert_eq!(signals[0].kind(), SignalKind::PanMove);
        let referenced: Vec<&str> = signals
            .iter()
            .filter_map(|s| match s {
                GestureSignal::MultiPointerMove { pointer_id, .. } => Some(pointer_id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(referenced, vec!["1"]);
    }

    #[test]
    fn test_two_concurrent_tracks_and_stop() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 2, PointerTag::Down, 1.0, 80.0, 80.0),
                event(&surface, 1, PointerTag::Move, 16.0, 12.0, 10.0),
                event(&surface, 2, PointerTag::Move, 17.0, 78.0, 80.0),
            ],
        );

        assert_eq!(engine.cache().len(), 2);
        assert_eq!(engine.cache().get(&1.into()).unwrap().len(), 3);
        assert_eq!(engine.cache().get(&2.into()).unwrap().len(), 3);

        assert_eq!(engine.stop(), 2);
        assert!(engine.cache().is_empty());
        assert_eq!(engine.listeners().attached_count(), 0);
        assert_eq!(engine.state(), PanState::Idle);
    }

    #[test]
    fn test_every_down_reanchors_by_default() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        let signals = feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 2, PointerTag::Down, 5.0, 60.0, 70.0),
                event(&surface, 1, PointerTag::Move, 16.0, 12.0, 10.0),
            ],
        );

        assert_eq!(
            pan_only(signals),
            vec![
                GestureSignal::PanStart { x: 10.0, y: 10.0 },
                GestureSignal::PanStart { x: 60.0, y: 70.0 },
                // dx measured from the re-anchored position
                GestureSignal::PanMove {
                    x: 12.0,
                    y: 10.0,
                    dx: -48.0,
                    dy: -60.0
                },
            ]
        );
    }

    #[test]
    fn test_reanchoring_can_be_disabled() {
        let mut engine = started_engine(GestureConfig {
            reanchor_on_every_down: false,
            ..Default::default()
        });
        let surface = square_surface();

        let signals = feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 2, PointerTag::Down, 5.0, 60.0, 70.0),
            ],
        );

        assert_eq!(signals, vec![GestureSignal::PanStart { x: 10.0, y: 10.0 }]);
        assert_eq!(engine.cache().len(), 2);
        assert_eq!(engine.primary_position(), Some(Point { x: 10.0, y: 10.0 }));
    }

    #[test]
    fn test_pan_stays_active_until_last_contact_lifts() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 2, PointerTag::Down, 1.0, 50.0, 50.0),
            ],
        );

        let first_up = engine.handle(event(&surface, 1, PointerTag::Up, 10.0, 11.0, 10.0));
        assert_eq!(first_up, vec![GestureSignal::PanEnd { x: 11.0, y: 10.0 }]);
        assert_eq!(engine.state(), PanState::Active);
        assert!(engine.listeners().is_attached(Listener::GlobalMove));

        engine.handle(event(&surface, 2, PointerTag::Up, 20.0, 55.0, 50.0));
        assert_eq!(engine.state(), PanState::Idle);
        assert!(engine.cache().is_empty());
        assert!(!engine.listeners().is_attached(Listener::GlobalUp));
        assert!(engine.listeners().is_attached(Listener::SurfaceDown));
    }

    #[test]
    fn test_move_and_up_dropped_while_idle() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        assert!(engine
            .handle(event(&surface, 1, PointerTag::Move, 0.0, 10.0, 10.0))
            .is_empty());
        assert!(engine
            .handle(event(&surface, 1, PointerTag::Up, 1.0, 10.0, 10.0))
            .is_empty());
        assert_eq!(engine.primary_position(), None);
    }

    #[test]
    fn test_nothing_processed_before_start() {
        let mut engine = GestureEngine::new(GestureConfig::default());
        let surface = square_surface();

        assert!(engine
            .handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0))
            .is_empty());
        assert!(engine.cache().is_empty());
    }

    #[test]
    fn test_passthrough_tags_emit_nothing() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();
        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0));

        for tag in [
            PointerTag::Enter,
            PointerTag::Leave,
            PointerTag::Out,
            PointerTag::Over,
        ] {
            assert!(engine.handle(event(&surface, 1, tag, 5.0, 90.0, 90.0)).is_empty());
        }

        assert_eq!(engine.cache().get(&1.into()).unwrap().len(), 2);
        assert_eq!(engine.primary_position(), Some(Point { x: 10.0, y: 10.0 }));
    }

    #[test]
    fn test_cancel_ends_track_and_pan() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0));
        let cancelled = engine.handle(event(&surface, 1, PointerTag::Cancel, 5.0, 10.0, 10.0));
        let stray = engine.handle(event(&surface, 7, PointerTag::Move, 1000.0, 40.0, 40.0));

        assert!(cancelled.is_empty());
        assert!(stray.is_empty(), "hover move after cancel emitted {:?}", kinds(&stray));
        assert!(engine.cache().is_empty());
        assert_eq!(engine.state(), PanState::Idle);
        assert!(!engine.listeners().is_attached(Listener::GlobalMove));
    }

    #[test]
    fn test_cancel_of_one_contact_keeps_pan_active() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0));
        engine.handle(event(&surface, 2, PointerTag::Down, 0.0, 50.0, 50.0));
        engine.handle(event(&surface, 1, PointerTag::Cancel, 5.0, 10.0, 10.0));

        assert!(!engine.cache().contains(&1.into()));
        assert_eq!(engine.state(), PanState::Active);
    }

    #[test]
    fn test_cancel_kept_when_configured() {
        let mut engine = started_engine(GestureConfig {
            end_track_on_cancel: false,
            ..Default::default()
        });
        let surface = square_surface();

        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0));
        assert!(engine
            .handle(event(&surface, 1, PointerTag::Cancel, 5.0, 10.0, 10.0))
            .is_empty());

        assert_eq!(engine.cache().get(&1.into()).unwrap().len(), 2);
        assert_eq!(engine.state(), PanState::Active);
    }

    #[test]
    fn test_down_on_other_surface_dropped() {
        let mut engine = started_engine(GestureConfig::default());
        let other: SurfaceHandle = Arc::new(SurfaceRect::new(0.0, 0.0, 100.0, 100.0));

        assert!(engine
            .handle(event(&other, 1, PointerTag::Down, 0.0, 10.0, 10.0))
            .is_empty());
        assert!(engine.cache().is_empty());
        assert_eq!(engine.state(), PanState::Idle);
    }

    #[test]
    fn test_start_twice_and_stop_idempotent() {
        let mut engine = started_engine(GestureConfig::default());

        assert!(matches!(
            engine.start(square_surface()),
            Err(GestureError::AlreadyListening)
        ));
        assert_eq!(engine.stop(), 0);
        assert_eq!(engine.stop(), 0);
        assert!(!engine.is_listening());
        assert!(engine.start(square_surface()).is_ok());
    }

    #[test]
    fn test_drop_mid_pan_releases_listeners() {
        let registry = ListenerRegistry::new();
        let surface = square_surface();
        {
            let mut engine = GestureEngine::with_listeners(GestureConfig::default(), registry.clone());
            engine.start(surface.clone()).unwrap();
            engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0));
            assert_eq!(registry.attached_count(), 3);
        }
        assert_eq!(registry.attached_count(), 0);
    }

    #[test]
    fn test_multi_pointer_threshold() {
        let mut engine = started_engine(GestureConfig {
            multi_pointer_min_track_len: 3,
            ..Default::default()
        });
        let surface = square_surface();

        let signals = feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 2, PointerTag::Down, 0.0, 50.0, 50.0),
                event(&surface, 1, PointerTag::Move, 16.0, 20.0, 10.0),
            ],
        );

        // Only pointer 1 has grown past its seed pair
        let multi: Vec<_> = signals
            .iter()
            .filter(|s| s.kind() == SignalKind::MultiPointerMove)
            .collect();
        assert_eq!(multi.len(), 1);
    }

    #[test]
    fn test_still_track_repeats_its_latest_step() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 10.0, 10.0),
                event(&surface, 2, PointerTag::Down, 0.0, 50.0, 50.0),
            ],
        );
        let first = engine.handle(event(&surface, 1, PointerTag::Move, 16.0, 20.0, 10.0));
        let second = engine.handle(event(&surface, 2, PointerTag::Move, 32.0, 50.0, 60.0));

        let step_of = |signals: &[GestureSignal], id: i32| {
            signals.iter().find_map(|s| match s {
                GestureSignal::MultiPointerMove { pointer_id, delta }
                    if *pointer_id == PointerId::from(id) =>
                {
                    Some(*delta)
                }
                _ => None,
            })
        };

        let moved = step_of(&first, 1).unwrap();
        assert_eq!(moved.d_pixel_coords.dx, 10.0);
        // Pointer 1 stood still, yet its step is reported again
        assert_eq!(step_of(&second, 1), Some(moved));
        assert_eq!(step_of(&second, 2).unwrap().d_pixel_coords.dy, 10.0);
    }

    #[test]
    fn test_pinch_delta_between_tracked_pointers() {
        let mut engine = started_engine(GestureConfig::default());
        let surface = square_surface();

        feed(
            &mut engine,
            vec![
                event(&surface, 1, PointerTag::Down, 0.0, 40.0, 50.0),
                event(&surface, 2, PointerTag::Down, 0.0, 60.0, 50.0),
                event(&surface, 1, PointerTag::Move, 16.0, 30.0, 50.0),
                event(&surface, 2, PointerTag::Move, 16.0, 70.0, 50.0),
            ],
        );

        // Pointer 1: 40 -> 30, pointer 2: 60 -> 70; distance 20px -> 40px
        let pinch = engine.pinch_delta(&1.into(), &2.into()).unwrap();
        assert!((pinch - 0.4).abs() < 1e-12, "pinch was {}", pinch);
        assert!(engine.pinch_delta(&1.into(), &3.into()).is_none());
    }

    #[test]
    fn test_resize_mid_gesture_changes_ndc_scale() {
        let resizable = ResizableSurface::new(SurfaceRect::new(0.0, 0.0, 100.0, 100.0));
        let surface = resizable.handle();
        let mut engine = engine_on(&surface, GestureConfig::default());

        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 50.0, 50.0));
        resizable.resize(SurfaceRect::new(0.0, 0.0, 200.0, 200.0));
        let signals = engine.handle(event(&surface, 1, PointerTag::Move, 16.0, 50.0, 50.0));

        let Some(GestureSignal::MultiPointerMove { delta, .. }) = signals.last() else {
            panic!("expected a multi-pointer move");
        };
        // Both samples are mapped against the current rectangle
        assert_eq!(delta.d_pixel_coords.dx, 0.0);
        assert_eq!(delta.d_normalized_device_coords.dx, 0.0);
    }

    #[test]
    fn test_zero_sized_surface_yields_non_finite_delta() {
        let surface: SurfaceHandle = Arc::new(SurfaceRect::default());
        let mut engine = engine_on(&surface, GestureConfig::default());

        engine.handle(event(&surface, 1, PointerTag::Down, 0.0, 5.0, 5.0));
        let signals = engine.handle(event(&surface, 1, PointerTag::Move, 16.0, 6.0, 5.0));

        let Some(GestureSignal::MultiPointerMove { delta, .. }) = signals.last() else {
            panic!("expected a multi-pointer move");
        };
        assert!(!delta.is_finite());
    }
}
