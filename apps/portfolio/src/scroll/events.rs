//! Viewport scroll notifications with an attach/detach contract.
//!
//! `attach` hands back a [`ListenerHandle`]; the listener stays registered
//! exactly as long as the handle lives. Dispatch is synchronous: every
//! listener runs to completion inside `dispatch`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, Weak};

type Listener = Arc<dyn Fn(f64) + Send + Sync>;

#[derive(Default)]
struct Registry {
    // std::sync::Mutex: only held to clone or edit the list, never while a listener runs.
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

impl Registry {
    fn lock(&self) -> MutexGuard<'_, Vec<(u64, Listener)>> {
        // A panicking listener cannot leave the list half-edited.
        self.listeners.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Source of scroll-offset events.
#[derive(Clone, Default)]
pub struct ScrollEvents {
    registry: Arc<Registry>,
}

impl ScrollEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach<F>(&self, listener: F) -> ListenerHandle
    where
        F: Fn(f64) + Send + Sync + 'static,
    {
        let id = self.registry.next_id.fetch_add(1, Ordering::Relaxed);
        self.registry.lock().push((id, Arc::new(listener)));
        tracing::debug!(listener_id = id, "Scroll listener attached");
        ListenerHandle {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Delivers `offset` to every attached listener, returning how many ran.
    pub fn dispatch(&self, offset: f64) -> usize {
        let listeners: Vec<Listener> = self
            .registry
            .lock()
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in &listeners {
            listener(offset);
        }
        listeners.len()
    }

    pub fn listener_count(&self) -> usize {
        self.registry.lock().len()
    }
}

/// Registration of one listener. Dropping it detaches the listener.
#[must_use = "dropping the handle detaches the listener immediately"]
pub struct ListenerHandle {
    registry: Weak<Registry>,
    id: u64,
}

impl ListenerHandle {
    pub fn detach(self) {}
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.lock().retain(|(id, _)| *id != self.id);
            tracing::debug!(listener_id = self.id, "Scroll listener detached");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_dispatch_reaches_attached_listener() {
        let events = ScrollEvents::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let _handle = events.attach(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(events.dispatch(10.0), 1);
        assert_eq!(events.dispatch(20.0), 1);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_drop_detaches_listener() {
        let events = ScrollEvents::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let handle = events.attach(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(events.listener_count(), 1);

        drop(handle);
        assert_eq!(events.listener_count(), 0);
        assert_eq!(events.dispatch(10.0), 0);
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_detach_only_removes_own_listener() {
        let events = ScrollEvents::new();
        let first = events.attach(|_| {});
        let _second = events.attach(|_| {});
        first.detach();
        assert_eq!(events.listener_count(), 1);
    }

    #[test]
    fn test_handle_outliving_source_is_harmless() {
        let events = ScrollEvents::new();
        let handle = events.attach(|_| {});
        drop(events);
        drop(handle);
    }

    #[test]
    fn test_dispatch_without_listeners_is_noop() {
        assert_eq!(ScrollEvents::new().dispatch(500.0), 0);
    }
}
