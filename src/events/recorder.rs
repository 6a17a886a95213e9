use super::EventHandler;

/// Keeps a copy of every event it sees, in order.
#[derive(Debug)]
pub struct EventRecorder<T> {
    events: Vec<T>,
}

impl<T> Default for EventRecorder<T> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<T> EventRecorder<T> {
    pub fn events(&self) -> &[T] {
        &self.events
    }

    pub fn take(&mut self) -> Vec<T> {
        std::mem::take(&mut self.events)
    }
}

impl<T: Clone> EventHandler<T> for EventRecorder<T> {
    fn handle_event(&mut self, event: &T) {
        self.events.push(event.clone());
    }
}
