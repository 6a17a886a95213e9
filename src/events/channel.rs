use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::rc::Rc;

use log::trace;

use super::EventHandler;

pub type Callback<T> = Rc<dyn Fn(&T)>;
pub type SubscriptionId = u64;

struct Listeners<T> {
    callbacks: BTreeMap<SubscriptionId, Callback<T>>,
    next_id: SubscriptionId,
}

/// Single-threaded broadcast channel. Listeners run in subscription order.
pub struct Channel<T: Debug> {
    listeners: Rc<RefCell<Listeners<T>>>,
}

impl<T: Debug> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            listeners: Rc::clone(&self.listeners),
        }
    }
}

impl<T: Debug + 'static> Channel<T> {
    pub fn new() -> (EventEmitter<T>, EventObserver<T>) {
        let channel = Channel {
            listeners: Rc::new(RefCell::new(Listeners {
                callbacks: BTreeMap::new(),
                next_id: 0,
            })),
        };
        (
            EventEmitter {
                channel: channel.clone(),
            },
            EventObserver { channel },
        )
    }

    fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        let mut listeners = self.listeners.borrow_mut();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.callbacks.insert(id, Rc::new(callback));
        Unsubscriber {
            channel: self.clone(),
            id,
        }
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.listeners.borrow_mut().callbacks.remove(&id).is_some()
    }

    fn emit(&self, data: &T) {
        // snapshot so a listener may subscribe or unsubscribe while handling
        let callbacks: Vec<Callback<T>> = self
            .listeners
            .borrow()
            .callbacks
            .values()
            .cloned()
            .collect();
        trace!(target: "events", "Emitting event to {} listeners: {:?}", callbacks.len(), data);
        for callback in callbacks {
            callback(data);
        }
    }

    fn listener_count(&self) -> usize {
        self.listeners.borrow().callbacks.len()
    }
}

pub struct EventEmitter<T: Debug> {
    channel: Channel<T>,
}

impl<T: Debug> Clone for EventEmitter<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

impl<T: Debug + 'static> EventEmitter<T> {
    pub fn emit(&self, data: T) {
        self.channel.emit(&data);
    }

    pub fn has_listeners(&self) -> bool {
        self.channel.listener_count() > 0
    }
}

pub struct EventObserver<T: Debug> {
    channel: Channel<T>,
}

impl<T: Debug> Clone for EventObserver<T> {
    fn clone(&self) -> Self {
        Self {
            channel: self.channel.clone(),
        }
    }
}

impl<T: Debug + 'static> EventObserver<T> {
    pub fn subscribe<F>(&self, callback: F) -> Unsubscriber<T>
    where
        F: Fn(&T) + 'static,
    {
        self.channel.subscribe(callback)
    }

    /// Routes every event into `handler`.
    pub fn attach<H>(&self, handler: Rc<RefCell<H>>) -> Unsubscriber<T>
    where
        H: EventHandler<T> + 'static,
    {
        self.subscribe(move |event| handler.borrow_mut().handle_event(event))
    }
}

/// Handle returned by `subscribe`; dropping it keeps the subscription.
pub struct Unsubscriber<T: Debug> {
    channel: Channel<T>,
    id: SubscriptionId,
}

impl<T: Debug + 'static> Unsubscriber<T> {
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    pub fn unsubscribe(self) -> bool {
        self.channel.unsubscribe(self.id)
    }
}
