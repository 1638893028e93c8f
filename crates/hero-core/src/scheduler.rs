//! Per-frame callback registry.
//!
//! The host's display-refresh loop calls [`FrameScheduler::tick`] once per
//! frame with a single sampled [`FrameTime`]; every subscribed callback sees
//! that same value, in subscription order. Subscribing returns a handle and
//! cancelling it guarantees the callback never runs again.

use crate::clock::FrameTime;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

type FrameCallback = Box<dyn FnMut(&FrameTime)>;

#[derive(Default)]
pub struct FrameScheduler {
    next_id: u64,
    callbacks: Vec<(FrameHandle, FrameCallback)>,
    ticks: u64,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, callback: impl FnMut(&FrameTime) + 'static) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.callbacks.push((handle, Box::new(callback)));
        handle
    }

    /// Returns false if the handle was already cancelled.
    pub fn cancel(&mut self, handle: FrameHandle) -> bool {
        let before = self.callbacks.len();
        self.callbacks.retain(|(h, _)| *h != handle);
        self.callbacks.len() != before
    }

    pub fn is_subscribed(&self, handle: FrameHandle) -> bool {
        self.callbacks.iter().any(|(h, _)| *h == handle)
    }

    pub fn tick(&mut self, time: &FrameTime) {
        self.ticks += 1;
        for (_, callback) in self.callbacks.iter_mut() {
            callback(time);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }

    /// Ticks delivered so far, whether or not anything was subscribed.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl std::fmt::Debug for FrameScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameScheduler")
            .field("subscribed", &self.callbacks.len())
            .field("ticks", &self.ticks)
            .finish()
    }
}
