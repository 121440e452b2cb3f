//! Guarded listener subscriptions
//!
//! Listening is acquired as a `Subscription` and released when the guard
//! is dropped, so every exit path (pan end, stop, teardown of the engine)
//! detaches what it attached.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

/// Listeners a gesture engine can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// "down" on the tracked surface, held from start to stop
    SurfaceDown,
    /// "move" anywhere, held while a pan is active
    GlobalMove,
    /// "up" anywhere, held while a pan is active
    GlobalUp,
}

/// Shared record of attached listeners
///
/// Clones observe the same set; hosts use it to decide which events to
/// route into the engine.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    attached: Arc<Mutex<HashMap<Listener, usize>>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach listeners until the returned guard is dropped
    #[must_use = "listeners are detached as soon as the subscription is dropped"]
    pub fn subscribe(&self, listeners: &[Listener]) -> Subscription {
        let mut attached = self.attached.lock();
        for listener in listeners {
            *attached.entry(*listener).or_insert(0) += 1;
        }
        tracing::debug!("Attached listeners {:?}", listeners);

        Subscription {
            registry: self.clone(),
            listeners: listeners.to_vec(),
        }
    }

    pub fn is_attached(&self, listener: Listener) -> bool {
        self.attached.lock().contains_key(&listener)
    }

    /// Number of distinct listeners currently attached
    pub fn attached_count(&self) -> usize {
        self.attached.lock().len()
    }

    fn detach(&self, listeners: &[Listener]) {
        let mut attached = self.attached.lock();
        for listener in listeners {
            if let Some(count) = attached.get_mut(listener) {
                *count -= 1;
                if *count == 0 {
                    attached.remove(listener);
                }
            }
        }
        tracing::debug!("Detached listeners {:?}", listeners);
    }
}

/// Guard for attached listeners
#[derive(Debug)]
pub struct Subscription {
    registry: ListenerRegistry,
    listeners: Vec<Listener>,
}

impl Subscription {
    pub fn listeners(&self) -> &[Listener] {
        &self.listeners
    }

    /// Detach now; same as dropping the guard
    pub fn release(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.registry.detach(&self.listeners);
    }
}
