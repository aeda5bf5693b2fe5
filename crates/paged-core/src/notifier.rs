//! Page change relay
//!
//! Invoked when the paging container settles on a new panel. Tells the
//! caller first, then resets the arbiter for the panel that is now shown.

use std::sync::Arc;

use parking_lot::Mutex;

use paged_gesture::GestureArbiter;

pub type PageChangeCallback = Arc<dyn Fn(usize) + Send + Sync>;

pub struct PageChangeNotifier {
    callback: PageChangeCallback,
}

impl PageChangeNotifier {
    pub fn new() -> Self {
        Self {
            callback: Arc::new(|_| {}),
        }
    }

    pub fn with_callback<F>(callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Relay a transition from `old_index` to `new_index`
    ///
    /// The callback runs before the arbiter is locked, so it may read the view.
    pub fn notify(&self, new_index: usize, old_index: usize, arbiter: &Mutex<GestureArbiter>) {
        (self.callback)(new_index);
        arbiter.lock().page_changed(new_index, old_index);

        tracing::info!(new_index, old_index, "Page change notified");
    }
}

impl Default for PageChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for PageChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageChangeNotifier").finish_non_exhaustive()
    }
}
