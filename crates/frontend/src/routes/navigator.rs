//! Location source with explicit subscriptions.
//!
//! The shell subscribes on creation and drops its [`Subscription`] on cleanup.
//! Every navigation notifies each live subscriber exactly once.

use std::sync::{Arc, Mutex, MutexGuard, Weak};

use super::history::History;
use super::registry::to_href;

type Listener = Arc<dyn Fn(&str) + Send + Sync>;

struct Inner {
    current: String,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Clone)]
pub struct Navigator {
    inner: Arc<Mutex<Inner>>,
    history: Option<Arc<dyn History>>,
}

impl Navigator {
    /// Navigator without a history backend. `navigate` only updates subscribers.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                current: initial.into(),
                next_id: 0,
                listeners: Vec::new(),
            })),
            history: None,
        }
    }

    pub fn with_history(initial: impl Into<String>, history: Arc<dyn History>) -> Self {
        Self {
            history: Some(history),
            ..Self::new(initial)
        }
    }

    /// Current location in registry form.
    pub fn current(&self) -> String {
        lock(&self.inner).current.clone()
    }

    /// User-initiated navigation: pushes a history entry, then notifies.
    ///
    /// Navigating to the current location replaces the entry instead of stacking a duplicate.
    pub fn navigate(&self, path: &str) {
        let same = lock(&self.inner).current == path;
        log::debug!("🔶 navigate: '{}' (same: {})", path, same);
        if let Some(history) = &self.history {
            let href = to_href(path);
            if same {
                history.replace(&href);
            } else {
                history.push(&href);
            }
        }
        self.set_current(path);
    }

    /// Location changed outside the app (back/forward). Notifies without pushing.
    pub fn sync(&self, path: &str) {
        log::debug!("🔷 sync: '{}'", path);
        self.set_current(path);
    }

    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        let mut inner = lock(&self.inner);
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        Subscription {
            id,
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    fn set_current(&self, path: &str) {
        // Listeners run outside the lock so they may read `current` or (un)subscribe.
        let listeners: Vec<Listener> = {
            let mut inner = lock(&self.inner);
            inner.current = path.to_string();
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(path);
        }
    }
}

/// Registration guard. Dropping it unregisters the listener.
pub struct Subscription {
    id: u64,
    inner: Weak<Mutex<Inner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            lock(&inner).listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
