/// Stateful listener; hook one up with `EventObserver::attach`.
pub trait EventHandler<T> {
    fn handle_event(&mut self, event: &T);
}

impl<T, F: FnMut(&T)> EventHandler<T> for F {
    fn handle_event(&mut self, event: &T) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::events::Channel;

    #[test]
    fn test_closure_handler_keeps_state() {
        let (emitter, observer) = Channel::<u32>::new();
        let total = Rc::new(RefCell::new(0));
        let sink = total.clone();
        let _subscription = observer.attach(Rc::new(RefCell::new(move |coins: &u32| {
            *sink.borrow_mut() += *coins;
        })));

        emitter.emit(3);
        emitter.emit(4);
        assert_eq!(*total.borrow(), 7);
    }
}
