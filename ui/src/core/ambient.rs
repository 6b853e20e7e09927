//! Ambient (page-wide) event sources the navbar listens to while mounted.
//!
//! The navbar never reaches for `window`/`document` directly. It asks an
//! [`AmbientSource`] from context for a subscription and holds the returned
//! [`ListenerGuard`] for its mounted lifetime; dropping the guard detaches the
//! listeners. Hosts that want to drive the bar themselves (tests, embedders)
//! provide a [`ManualEvents`] hub instead of the platform default.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use super::state::NavEvent;

/// Matches every element of the dropdown region (the `data-nav-dropdown` marker).
pub const DROPDOWN_SELECTOR: &str = "[data-nav-dropdown]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AmbientEvent {
    Scroll { offset: f64 },
    PointerPress { inside_dropdown: bool },
}

impl From<AmbientEvent> for NavEvent {
    fn from(event: AmbientEvent) -> Self {
        match event {
            AmbientEvent::Scroll { offset } => NavEvent::Scrolled { offset },
            AmbientEvent::PointerPress { inside_dropdown } => NavEvent::Pressed { inside_dropdown },
        }
    }
}

pub type EventSink = Rc<dyn Fn(AmbientEvent)>;

#[derive(Debug, thiserror::Error)]
pub enum AmbientError {
    #[error("no global window available")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to attach `{event}` listener: {reason}")]
    Listener { event: &'static str, reason: String },
}

pub trait AmbientEvents {
    /// Start delivering events to `sink` until the returned guard is dropped.
    fn subscribe(&self, sink: EventSink) -> Result<ListenerGuard, AmbientError>;
}

/// Owns the teardown of one subscription. Runs it exactly once.
#[must_use = "dropping the guard detaches the listeners immediately"]
pub struct ListenerGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl ListenerGuard {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard")
            .field("released", &self.release.is_none())
            .finish()
    }
}

/// Cloneable handle to an event source, provided through Dioxus context.
#[derive(Clone)]
pub struct AmbientSource(Rc<dyn AmbientEvents>);

impl AmbientSource {
    pub fn new(events: impl AmbientEvents + 'static) -> Self {
        Self(Rc::new(events))
    }

    /// The browser-backed source for the current build target.
    pub fn platform() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::new(super::platform::DomEvents)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::new(super::platform::ScriptBridge::default())
        }
    }

    pub fn subscribe(&self, sink: EventSink) -> Result<ListenerGuard, AmbientError> {
        self.0.subscribe(sink)
    }
}

impl PartialEq for AmbientSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// In-process event hub. `emit` fans out to every live subscriber.
#[derive(Clone, Default)]
pub struct ManualEvents {
    inner: Rc<Hub>,
}

#[derive(Default)]
struct Hub {
    next_id: Cell<u64>,
    sinks: RefCell<Vec<(u64, EventSink)>>,
}

impl ManualEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit(&self, event: AmbientEvent) {
        // Snapshot first: a sink may subscribe or release while handling.
        let sinks: Vec<EventSink> = self
            .inner
            .sinks
            .borrow()
            .iter()
            .map(|(_, sink)| sink.clone())
            .collect();
        for sink in sinks {
            sink(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.sinks.borrow().len()
    }
}

impl AmbientEvents for ManualEvents {
    fn subscribe(&self, sink: EventSink) -> Result<ListenerGuard, AmbientError> {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.sinks.borrow_mut().push((id, sink));

        let hub = Rc::downgrade(&self.inner);
        Ok(ListenerGuard::new(move || {
            if let Some(hub) = hub.upgrade() {
                hub.sinks.borrow_mut().retain(|(sink_id, _)| *sink_id != id);
            }
        }))
    }
}

impl PartialEq for ManualEvents {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ManualEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualEvents")
            .field("listeners", &self.listener_count())
            .finish()
    }
}
