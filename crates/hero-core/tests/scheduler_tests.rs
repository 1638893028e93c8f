// Frame scheduler and listener bookkeeping.

use hero_core::clock::{FrameClock, FrameTime};
use hero_core::listeners::ListenerSet;
use hero_core::scheduler::FrameScheduler;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn every_callback_sees_the_same_time_in_order() {
    let mut s = FrameScheduler::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    for id in 0..3 {
        let seen = seen.clone();
        s.subscribe(move |t| seen.borrow_mut().push((id, t.elapsed)));
    }
    s.tick(&FrameTime::at(1.25));
    assert_eq!(*seen.borrow(), vec![(0, 1.25), (1, 1.25), (2, 1.25)]);
}

#[test]
fn cancelled_callback_never_runs_again() {
    let mut s = FrameScheduler::new();
    let calls = Rc::new(Cell::new(0));
    let c = calls.clone();
    let h = s.subscribe(move |_| c.set(c.get() + 1));
    s.tick(&FrameTime::at(0.0));
    assert!(s.cancel(h));
    assert!(!s.cancel(h));
    assert!(!s.is_subscribed(h));
    for i in 1..10 {
        s.tick(&FrameTime::at(i as f32));
    }
    assert_eq!(calls.get(), 1);
    assert_eq!(s.ticks(), 10);
    assert!(s.is_empty());
}

#[test]
fn clock_replays_identical_timelines() {
    let mut a = FrameClock::new();
    let mut b = FrameClock::new();
    for t in [0.0, 0.016, 0.033, 0.5, 0.516] {
        assert_eq!(a.advance_to(t), b.advance_to(t));
    }
    assert_eq!(a.frames(), 5);
}

#[test]
fn detach_all_runs_each_detacher_once() {
    let count = Rc::new(Cell::new(0));
    let mut set = ListenerSet::new();
    for event in ["pointermove", "pointerdown", "pointerup"] {
        let count = count.clone();
        set.attach(event, move || count.set(count.get() + 1));
    }
    assert_eq!(set.events().collect::<Vec<_>>(), ["pointermove", "pointerdown", "pointerup"]);
    assert_eq!(set.detach_all(), 3);
    assert!(set.is_empty());
    assert_eq!(set.detach_all(), 0);
    assert_eq!(count.get(), 3);
}

#[test]
fn dropping_the_set_detaches() {
    let count = Rc::new(Cell::new(0));
    {
        let mut set = ListenerSet::new();
        let c = count.clone();
        set.attach("wheel", move || c.set(c.get() + 1));
    }
    assert_eq!(count.get(), 1);
}
