mod channel;
mod event_handler;
mod recorder;

pub use channel::{Channel, EventEmitter, EventObserver, SubscriptionId, Unsubscriber};
pub use event_handler::EventHandler;
pub use recorder::EventRecorder;
