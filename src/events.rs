use std::collections::HashMap;

pub type Handler<T> = Box<dyn FnMut(&T) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// In-process emitter dispatching payloads to handlers registered by name.
pub struct EventEmitter<T> {
    handlers: HashMap<String, Vec<(ListenerId, Handler<T>)>>,
    next_id: u64,
}

impl<T> Default for EventEmitter<T> {
    fn default() -> Self {
        Self {
            handlers: HashMap::new(),
            next_id: 0,
        }
    }
}

impl<T> EventEmitter<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, event: impl Into<String>, handler: F) -> ListenerId
    where
        F: FnMut(&T) + Send + 'static,
    {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(event.into())
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    pub fn add_event_listener<F>(&mut self, event: impl Into<String>, handler: F) -> ListenerId
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.on(event, handler)
    }

    pub fn remove_event_listener(&mut self, event: &str, id: ListenerId) -> bool {
        let Some(handlers) = self.handlers.get_mut(event) else {
            return false;
        };
        let before = handlers.len();
        handlers.retain(|(listener, _)| *listener != id);
        let removed = handlers.len() != before;
        if handlers.is_empty() {
            self.handlers.remove(event);
        }
        removed
    }

    /// Invoke every handler for `event` in registration order and return how
    /// many ran.
    pub fn emit(&mut self, event: &str, payload: &T) -> usize {
        match self.handlers.get_mut(event) {
            Some(handlers) => {
                for (_, handler) in handlers.iter_mut() {
                    handler(payload);
                }
                handlers.len()
            }
            None => 0,
        }
    }

    pub fn listener_count(&self, event: &str) -> usize {
        self.handlers.get(event).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn emits_in_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut emitter = EventEmitter::<u32>::new();

        let first = Arc::clone(&log);
        emitter.on("tick", move |n| first.lock().unwrap().push(format!("a{n}")));
        let second = Arc::clone(&log);
        emitter.add_event_listener("tick", move |n| second.lock().unwrap().push(format!("b{n}")));

        assert_eq!(emitter.emit("tick", &1), 2);
        assert_eq!(emitter.emit("other", &2), 0);
        assert_eq!(*log.lock().unwrap(), vec!["a1", "b1"]);
    }

    #[test]
    fn removed_listener_stops_receiving() {
        let count = Arc::new(Mutex::new(0));
        let mut emitter = EventEmitter::<()>::new();
        let counter = Arc::clone(&count);
        let id = emitter.on("ping", move |_| *counter.lock().unwrap() += 1);

        emitter.emit("ping", &());
        assert!(emitter.remove_event_listener("ping", id));
        assert!(!emitter.remove_event_listener("ping", id));
        emitter.emit("ping", &());

        assert_eq!(*count.lock().unwrap(), 1);
        assert_eq!(emitter.listener_count("ping"), 0);
    }
}
