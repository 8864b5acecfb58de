use std::sync::Arc;

use tokio::sync::watch;

/// Observable holder of the active section id. Empty string means no section is active.
///
/// Owned by whoever attaches the tracker and handed to readers explicitly;
/// clones share the same value.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    tx: Arc<watch::Sender<String>>,
}

impl Default for ActiveSection {
    fn default() -> Self {
        Self::new()
    }
}

impl ActiveSection {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(String::new());
        ActiveSection { tx: Arc::new(tx) }
    }

    pub fn get(&self) -> String {
        self.tx.borrow().clone()
    }

    /// Stores `id`. Subscribers are only notified when the value changes.
    pub fn set(&self, id: &str) -> bool {
        self.tx.send_if_modified(|current| {
            if current == id {
                return false;
            }
            current.clear();
            current.push_str(id);
            true
        })
    }

    pub fn clear(&self) -> bool {
        self.set("")
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.tx.subscribe()
    }
}
