//! Scroll tracker: keeps [`ActiveSection`] in step with the viewport.
//!
//! One subscription per tracker. Every scroll event recomputes over all
//! sections (no debounce, no hysteresis) and writes the result to the store.
//! Dropping the tracker detaches the listener, after which events no longer
//! touch the store.

use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use crate::scroll::events::{ListenerHandle, ScrollEvents};
use crate::scroll::layout::SectionLayout;
use crate::scroll::store::ActiveSection;

pub struct ScrollTracker {
    layout: Arc<SectionLayout>,
    store: ActiveSection,
    _listener: ListenerHandle,
}

impl ScrollTracker {
    pub fn attach(events: &ScrollEvents, layout: SectionLayout, store: ActiveSection) -> Self {
        let layout = Arc::new(layout);
        let listener = {
            let layout = Arc::clone(&layout);
            let store = store.clone();
            events.attach(move |offset| {
                update_active(&layout, &store, offset);
            })
        };
        ScrollTracker {
            layout,
            store,
            _listener: listener,
        }
    }

    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    pub fn store(&self) -> &ActiveSection {
        &self.store
    }

    pub fn active(&self) -> String {
        self.store.get()
    }

    /// Runs the same recompute a scroll event would.
    pub fn recompute(&self, offset: f64) -> String {
        update_active(&self.layout, &self.store, offset);
        self.store.get()
    }

    pub fn detach(self) {}
}

fn update_active(layout: &SectionLayout, store: &ActiveSection, offset: f64) {
    let next = layout.active_at(offset).unwrap_or("");
    if store.set(next) {
        trace!(offset, active = next, "Active section changed");
    }
}

/// Outcome of replaying a scroll sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrollReplay {
    /// Active id after the last event; empty if none.
    pub active: String,
    /// Active id after each event, in order.
    pub trail: Vec<String>,
}

/// Attaches a fresh tracker, feeds it `offsets` as scroll events, then tears it down.
pub fn replay(layout: SectionLayout, offsets: &[f64]) -> ScrollReplay {
    let events = ScrollEvents::new();
    let tracker = ScrollTracker::attach(&events, layout, ActiveSection::new());

    let trail: Vec<String> = offsets
        .iter()
        .map(|offset| {
            events.dispatch(*offset);
            tracker.active()
        })
        .collect();

    let active = tracker.active();
    tracker.detach();
    ScrollReplay { active, trail }
}
