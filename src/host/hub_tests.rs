//! Tests for the viewport host and subscription guards.

use super::*;
use std::cell::Cell;

fn hub() -> EventHub {
    EventHub::new(ViewportState::new(0, 400))
}

#[test]
fn new_hub_reports_initial_viewport() {
    let hub = hub();
    assert_eq!(hub.viewport(), ViewportState::new(0, 400));
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn scroll_updates_viewport_even_without_listeners() {
    let hub = hub();
    hub.scroll_to(LayoutOffset::new(120));
    assert_eq!(hub.viewport().scroll_offset, LayoutOffset::new(120));
}

#[test]
fn resize_updates_viewport_height() {
    let hub = hub();
    hub.resize(250);
    assert_eq!(hub.viewport().viewport_height, 250);
}

#[test]
fn subscribe_increments_listener_count() {
    let hub = hub();
    let _scroll = hub.subscribe(EventKind::Scroll, |_| {});
    let _resize = hub.subscribe(EventKind::Resize, |_| {});
    assert_eq!(hub.listener_count(), 2);
    assert_eq!(hub.listener_count_for(EventKind::Scroll), 1);
    assert_eq!(hub.listener_count_for(EventKind::Resize), 1);
}

#[test]
fn dropping_subscription_detaches_listener() {
    let hub = hub();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let sub = hub.subscribe(EventKind::Scroll, move |_| seen.set(seen.get() + 1));

    hub.scroll_to(LayoutOffset::new(1));
    drop(sub);
    hub.scroll_to(LayoutOffset::new(2));

    assert_eq!(calls.get(), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn events_are_routed_by_kind() {
    let hub = hub();
    let scrolls = Rc::new(Cell::new(0));
    let resizes = Rc::new(Cell::new(0));
    let s = Rc::clone(&scrolls);
    let r = Rc::clone(&resizes);
    let _a = hub.subscribe(EventKind::Scroll, move |_| s.set(s.get() + 1));
    let _b = hub.subscribe(EventKind::Resize, move |_| r.set(r.get() + 1));

    hub.scroll_to(LayoutOffset::new(10));
    hub.scroll_to(LayoutOffset::new(20));
    hub.resize(100);

    assert_eq!(scrolls.get(), 2);
    assert_eq!(resizes.get(), 1);
}

#[test]
fn listeners_receive_events_in_fifo_order() {
    let hub = hub();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let _sub = hub.subscribe(EventKind::Scroll, move |event| {
        if let ViewportEvent::Scroll { offset } = event {
            sink.borrow_mut().push(offset.get());
        }
    });

    for offset in [5, 3, 9, 1] {
        hub.scroll_to(LayoutOffset::new(offset));
    }

    assert_eq!(*log.borrow(), vec![5, 3, 9, 1]);
}

#[test]
fn listeners_are_called_in_subscription_order() {
    let hub = hub();
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    let second = Rc::clone(&log);
    let _a = hub.subscribe(EventKind::Resize, move |_| first.borrow_mut().push("a"));
    let _b = hub.subscribe(EventKind::Resize, move |_| second.borrow_mut().push("b"));

    hub.resize(10);

    assert_eq!(*log.borrow(), vec!["a", "b"]);
}

#[test]
fn listener_observes_updated_viewport() {
    let hub = hub();
    let handle = hub.clone();
    let observed = Rc::new(Cell::new(0));
    let sink = Rc::clone(&observed);
    let _sub = hub.subscribe(EventKind::Resize, move |_| {
        sink.set(handle.viewport().viewport_height);
    });

    hub.resize(123);

    assert_eq!(observed.get(), 123);
}

#[test]
fn listener_may_drop_its_own_subscription_during_dispatch() {
    let hub = hub();
    let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let calls = Rc::new(Cell::new(0));

    let own = Rc::clone(&slot);
    let seen = Rc::clone(&calls);
    let sub = hub.subscribe(EventKind::Scroll, move |_| {
        seen.set(seen.get() + 1);
        own.borrow_mut().take();
    });
    *slot.borrow_mut() = Some(sub);

    hub.scroll_to(LayoutOffset::new(1));
    hub.scroll_to(LayoutOffset::new(2));

    assert_eq!(calls.get(), 1);
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn listener_detached_mid_dispatch_is_skipped() {
    let hub = hub();
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let victim_calls = Rc::new(Cell::new(0));

    let slot = Rc::clone(&victim);
    let _killer = hub.subscribe(EventKind::Scroll, move |_| {
        slot.borrow_mut().take();
    });
    let seen = Rc::clone(&victim_calls);
    *victim.borrow_mut() = Some(hub.subscribe(EventKind::Scroll, move |_| {
        seen.set(seen.get() + 1);
    }));

    hub.scroll_to(LayoutOffset::new(1));

    assert_eq!(victim_calls.get(), 0);
    assert_eq!(hub.listener_count(), 1);
}

#[test]
fn dropping_subscription_after_hub_is_gone_is_noop() {
    let hub = hub();
    let sub = hub.subscribe(EventKind::Scroll, |_| {});
    drop(hub);
    drop(sub);
}

#[test]
fn subscription_ids_are_unique() {
    let hub = hub();
    let a = hub.subscribe(EventKind::Scroll, |_| {});
    let b = hub.subscribe(EventKind::Scroll, |_| {});
    assert_ne!(a.id(), b.id());
}

#[test]
fn event_kind_matches_variant() {
    assert_eq!(
        ViewportEvent::Scroll {
            offset: LayoutOffset::ZERO
        }
        .kind(),
        EventKind::Scroll
    );
    assert_eq!(ViewportEvent::Resize { height: 1 }.kind(), EventKind::Resize);
}

#[test]
fn listener_may_raise_an_event_during_dispatch() {
    let hub = hub();
    let handle = hub.clone();
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let _sub = hub.subscribe(EventKind::Scroll, move |event| {
        if let ViewportEvent::Scroll { offset } = event {
            sink.borrow_mut().push(offset.get());
            if offset.get() == 5 {
                handle.scroll_to(LayoutOffset::new(0));
            }
        }
    });

    hub.scroll_to(LayoutOffset::new(5));

    assert_eq!(*log.borrow(), vec![5, 0]);
    assert_eq!(hub.viewport().scroll_offset, LayoutOffset::ZERO);
}

#[test]
fn nested_event_waits_until_outer_event_reaches_every_listener() {
    let hub = hub();
    let handle = hub.clone();
    let log = Rc::new(RefCell::new(Vec::new()));
    let first = Rc::clone(&log);
    let second = Rc::clone(&log);
    let _a = hub.subscribe(EventKind::Scroll, move |event| {
        if let ViewportEvent::Scroll { offset } = event {
            first.borrow_mut().push(("a", offset.get()));
            if offset.get() == 5 {
                handle.resize(200);
                handle.scroll_to(LayoutOffset::new(0));
            }
        }
    });
    let _b = hub.subscribe(EventKind::Scroll, move |event| {
        if let ViewportEvent::Scroll { offset } = event {
            second.borrow_mut().push(("b", offset.get()));
        }
    });

    hub.scroll_to(LayoutOffset::new(5));

    assert_eq!(*log.borrow(), vec![("a", 5), ("b", 5), ("a", 0), ("b", 0)]);
    assert_eq!(hub.viewport(), ViewportState::new(0, 200));
}

#[test]
fn panicking_listener_does_not_wedge_the_hub() {
    let hub = hub();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    let _sub = hub.subscribe(EventKind::Scroll, move |event| {
        seen.set(seen.get() + 1);
        if let ViewportEvent::Scroll { offset } = event {
            assert_ne!(offset.get(), 13, "unlucky offset");
        }
    });

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        hub.scroll_to(LayoutOffset::new(13));
    }));
    assert!(result.is_err());

    hub.scroll_to(LayoutOffset::new(14));
    assert_eq!(calls.get(), 2);
    assert_eq!(hub.viewport().scroll_offset, LayoutOffset::new(14));
}
