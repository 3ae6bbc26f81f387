//! Viewport host - the scrollable element the virtualizer is mounted into.
//!
//! The host owns the live [`ViewportState`] and delivers scroll and resize
//! events to subscribed listeners, in the order they are raised. Everything
//! runs on one thread; shared state lives behind `Rc<RefCell<_>>`.
//!
//! An event raised from inside a listener is queued and delivered after the
//! current event has reached every listener, so each listener sees events in
//! the order they were raised.
//!
//! Subscriptions are RAII guards: dropping a [`Subscription`] detaches its
//! listener. A mounted virtualizer holds its guards by value, so every way
//! of dropping it (explicit unmount, early return, unwinding) releases them.

use crate::model::{LayoutOffset, ViewportState};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use tracing::trace;

/// Event raised by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportEvent {
    /// The viewport was scrolled to a new offset.
    Scroll {
        /// New scroll offset. May exceed the content during elastic overscroll.
        offset: LayoutOffset,
    },
    /// The viewport changed height.
    Resize {
        /// New viewport height.
        height: u32,
    },
}

impl ViewportEvent {
    /// Kind used to route this event to subscribers.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Scroll { .. } => EventKind::Scroll,
            Self::Resize { .. } => EventKind::Resize,
        }
    }
}

/// Event kinds a listener can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Scroll events.
    Scroll,
    /// Resize events.
    Resize,
}

/// Opaque identifier of a registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<RefCell<dyn FnMut(&ViewportEvent)>>;

struct Registration {
    id: ListenerId,
    kind: EventKind,
    listener: Listener,
}

struct HubInner {
    viewport: ViewportState,
    next_id: u64,
    listeners: Vec<Registration>,
    dispatching: bool,
    pending: VecDeque<ViewportEvent>,
}

/// In-process viewport host.
///
/// Cloning yields another handle to the same host.
#[derive(Clone)]
pub struct EventHub {
    inner: Rc<RefCell<HubInner>>,
}

impl EventHub {
    /// Create a host whose viewport starts at `viewport`.
    pub fn new(viewport: ViewportState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(HubInner {
                viewport,
                next_id: 0,
                listeners: Vec::new(),
                dispatching: false,
                pending: VecDeque::new(),
            })),
        }
    }

    /// Current scroll position and size, as measured by the host.
    pub fn viewport(&self) -> ViewportState {
        self.inner.borrow().viewport
    }

    /// Register `listener` for events of `kind`.
    ///
    /// The listener stays attached until the returned guard is dropped.
    pub fn subscribe<F>(&self, kind: EventKind, listener: F) -> Subscription
    where
        F: FnMut(&ViewportEvent) + 'static,
    {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_id);
        inner.next_id += 1;
        inner.listeners.push(Registration {
            id,
            kind,
            listener: Rc::new(RefCell::new(listener)),
        });
        trace!(?kind, id = id.0, "listener attached");

        Subscription {
            hub: Rc::downgrade(&self.inner),
            id,
        }
    }

    /// Number of attached listeners of any kind.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    /// Number of attached listeners of `kind`.
    pub fn listener_count_for(&self, kind: EventKind) -> usize {
        self.inner
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.kind == kind)
            .count()
    }

    /// Scroll the viewport and notify scroll listeners.
    pub fn scroll_to(&self, offset: LayoutOffset) {
        self.dispatch(ViewportEvent::Scroll { offset });
    }

    /// Resize the viewport and notify resize listeners.
    pub fn resize(&self, height: u32) {
        self.dispatch(ViewportEvent::Resize { height });
    }

    /// Apply `event` to the host viewport, then deliver it to every listener
    /// of its kind in subscription order.
    ///
    /// Listeners are collected before any is called, so a listener may drop
    /// subscriptions (its own included) during delivery. A listener detached
    /// mid-dispatch is not called for this event.
    ///
    /// Called from inside a listener, the event is queued and delivered once
    /// the outer event has finished.
    pub fn dispatch(&self, event: ViewportEvent) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.pending.push_back(event);
            if inner.dispatching {
                trace!(?event, queued = inner.pending.len(), "event queued");
                return;
            }
            inner.dispatching = true;
        }

        let _reset = DispatchReset(&self.inner);
        while let Some(event) = self.next_pending() {
            self.deliver(event);
        }
    }

    fn next_pending(&self) -> Option<ViewportEvent> {
        self.inner.borrow_mut().pending.pop_front()
    }

    fn deliver(&self, event: ViewportEvent) {
        let targets: Vec<(ListenerId, Listener)> = {
            let mut inner = self.inner.borrow_mut();
            match event {
                ViewportEvent::Scroll { offset } => inner.viewport.scroll_offset = offset,
                ViewportEvent::Resize { height } => inner.viewport.viewport_height = height,
            }
            inner
                .listeners
                .iter()
                .filter(|r| r.kind == event.kind())
                .map(|r| (r.id, Rc::clone(&r.listener)))
                .collect()
        };

        for (id, listener) in targets {
            if !self.is_attached(id) {
                continue;
            }
            let mut callback = listener.borrow_mut();
            (&mut *callback)(&event);
        }
    }

    fn is_attached(&self, id: ListenerId) -> bool {
        self.inner.borrow().listeners.iter().any(|r| r.id == id)
    }
}

/// Clears the dispatch flag when the outermost dispatch ends, unwinding
/// included. Events still queued after a panicking listener are discarded.
struct DispatchReset<'a>(&'a Rc<RefCell<HubInner>>);

impl Drop for DispatchReset<'_> {
    fn drop(&mut self) {
        if let Ok(mut inner) = self.0.try_borrow_mut() {
            inner.dispatching = false;
            inner.pending.clear();
        }
    }
}

impl std::fmt::Debug for EventHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("EventHub")
            .field("viewport", &inner.viewport)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

/// Guard keeping a listener attached to an [`EventHub`].
///
/// Dropping it detaches the listener. Dropping after the hub itself is gone
/// is a no-op.
#[must_use = "dropping a Subscription detaches its listener immediately"]
pub struct Subscription {
    hub: Weak<RefCell<HubInner>>,
    id: ListenerId,
}

impl Subscription {
    /// Identifier of the attached listener.
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(hub) = self.hub.upgrade() else {
            return;
        };
        // Take the closure out before releasing the borrow: dropping it may
        // drop state that owns further subscriptions.
        let removed = {
            let mut inner = hub.borrow_mut();
            inner
                .listeners
                .iter()
                .position(|r| r.id == self.id)
                .map(|pos| inner.listeners.remove(pos))
        };
        if removed.is_some() {
            trace!(id = self.id.0, "listener detached");
        }
        drop(removed);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("attached", &(self.hub.strong_count() > 0))
            .finish()
    }
}

#[cfg(test)]
#[path = "hub_tests.rs"]
mod tests;
