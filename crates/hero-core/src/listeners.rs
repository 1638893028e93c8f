/// Detach callbacks for every input listener a mounted hero attached.
///
/// The host registers one detacher per listener (for the web build, a
/// closure that calls `removeEventListener` and drops the JS closure).
#[derive(Default)]
pub struct ListenerSet {
    detachers: Vec<(&'static str, Box<dyn FnOnce()>)>,
}

impl ListenerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, event: &'static str, detach: impl FnOnce() + 'static) {
        self.detachers.push((event, Box::new(detach)));
    }

    /// Run every detacher; the set is empty afterwards.
    pub fn detach_all(&mut self) -> usize {
        let n = self.detachers.len();
        for (event, detach) in self.detachers.drain(..) {
            log::debug!("[hero] detach {event} listener");
            detach();
        }
        n
    }

    pub fn len(&self) -> usize {
        self.detachers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detachers.is_empty()
    }

    pub fn events(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.detachers.iter().map(|(event, _)| *event)
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach_all();
    }
}

impl std::fmt::Debug for ListenerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.events()).finish()
    }
}
