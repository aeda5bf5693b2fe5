//! Scroll-paged vertical tab view
//!
//! Central state container for one view. The shell renders the panels and
//! the paging container; this type owns the arbitration state they share.

use parking_lot::Mutex;
use std::sync::Arc;

use paged_gesture::{GestureArbiter, PropagationDecision, TouchSession};

use crate::config::ViewConfig;
use crate::event::ShellEvent;
use crate::monitor::ScrollViewMonitor;
use crate::notifier::PageChangeNotifier;
use crate::Result;

pub struct ScrollPagedView {
    /// Container configuration
    config: Arc<ViewConfig>,
    /// Arbiter shared by every surface handler of this view
    arbiter: Arc<Mutex<GestureArbiter>>,
    /// Relay for page transitions
    notifier: Arc<PageChangeNotifier>,
}

impl ScrollPagedView {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config: Arc::new(config),
            arbiter: Arc::new(Mutex::new(GestureArbiter::new())),
            notifier: Arc::new(PageChangeNotifier::new()),
        }
    }

    /// Set the callback invoked with each new page index
    pub fn with_page_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(usize) + Send + Sync + 'static,
    {
        self.notifier = Arc::new(PageChangeNotifier::with_callback(callback));
        self
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Snapshot of the live touch session
    pub fn session(&self) -> TouchSession {
        self.arbiter.lock().session()
    }

    pub fn current_page(&self) -> usize {
        self.arbiter.lock().current_page()
    }

    pub fn monitor(&self) -> ScrollViewMonitor {
        ScrollViewMonitor::new(self.clone())
    }

    /// Route one shell event to the arbiter
    pub fn dispatch(&self, event: &ShellEvent) -> PropagationDecision {
        match event {
            ShellEvent::TouchStart { touches } => self.arbiter.lock().touch_start(touches),
            ShellEvent::TouchMove { touches, target } => {
                self.arbiter.lock().touch_move(touches, target)
            }
            ShellEvent::TouchEnd { target } => self.arbiter.lock().touch_end(target.as_ref()),
            ShellEvent::Scroll { target } => self.arbiter.lock().scroll(target),
            ShellEvent::PageChange {
                new_index,
                old_index,
            } => {
                self.page_changed(*new_index, *old_index);
                PropagationDecision::ALLOW
            }
        }
    }

    /// Parse a JSON event from the shell and dispatch it
    pub fn dispatch_json(&self, payload: &str) -> Result<PropagationDecision> {
        let event = ShellEvent::from_json(payload)?;
        tracing::trace!(event = event.kind(), "Dispatching shell event");
        Ok(self.dispatch(&event))
    }

    /// The paging container settled on `new_index`
    pub fn page_changed(&self, new_index: usize, old_index: usize) {
        self.notifier.notify(new_index, old_index, &self.arbiter);
    }
}

impl Default for ScrollPagedView {
    fn default() -> Self {
        Self::new(ViewConfig::default())
    }
}

impl Clone for ScrollPagedView {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            arbiter: Arc::clone(&self.arbiter),
            notifier: Arc::clone(&self.notifier),
        }
    }
}
