//! Event fan-out. The I/O thread posts events onto a channel; a dedicated
//! worker drains it and invokes subscriber callbacks in FIFO order, so a
//! slow subscriber can never stall acks.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

use hashbrown::HashMap;
use prism::logging::{debug, Logger};

use crate::protocol::Tag;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ConnectAttempt,
    Connect,
    Disconnect,
    Receive,
    Warning,
}

#[derive(Debug, Clone)]
pub enum Event {
    /// A connection attempt (hello) has been sent.
    ConnectAttempt,
    /// Initial payload fully received; the session is usable.
    Connect,
    /// The session died, either explicitly or through a contact timeout.
    Disconnect,
    /// A state update for `tag` was applied to the mirror.
    Receive { tag: Tag, name: &'static str },
    /// Transport or decode trouble, or a warning sent by the switcher.
    Warning(String),
}

impl Event {
    #[inline]
    pub fn kind(&self) -> EventKind {
        match self {
            Event::ConnectAttempt => EventKind::ConnectAttempt,
            Event::Connect => EventKind::Connect,
            Event::Disconnect => EventKind::Disconnect,
            Event::Receive { .. } => EventKind::Receive,
            Event::Warning(_) => EventKind::Warning,
        }
    }
}

pub(crate) enum EventMsg {
    Post(Event),
    Exit,
}

type Callback = Box<dyn Fn(&Event) + Send + Sync + 'static>;

pub(crate) struct EventHub {
    subscribers: Mutex<HashMap<EventKind, Vec<Callback>>>,
    sender: Mutex<Option<Sender<EventMsg>>>,
}

impl EventHub {
    pub fn new() -> EventHub {
        EventHub {
            subscribers: Mutex::new(HashMap::new()),
            sender: Mutex::new(None),
        }
    }

    pub fn subscribe(&self, kind: EventKind, callback: Callback) {
        self.subscribers
            .lock()
            .expect("subscriber registry poisoned")
            .entry(kind)
            .or_insert_with(Vec::new)
            .push(callback);
    }

    /// Open the queue for a new session. Returns the receiving end for the
    /// event thread.
    pub fn open(&self) -> Receiver<EventMsg> {
        let (tx, rx) = mpsc::channel();
        *self.sender.lock().expect("event sender poisoned") = Some(tx);
        rx
    }

    /// Post an event. Dropped silently when no session is running.
    pub fn post(&self, event: Event) {
        if let Some(sender) = self.sender.lock().expect("event sender poisoned").as_ref() {
            let _ = sender.send(EventMsg::Post(event));
        }
    }

    /// Ask the event thread to exit once the queue is drained.
    pub fn close(&self) {
        let mut sender = self.sender.lock().expect("event sender poisoned");
        if let Some(sender) = sender.as_ref() {
            let _ = sender.send(EventMsg::Exit);
        }
        *sender = None;
    }

    fn dispatch(&self, event: &Event) {
        let subscribers = self.subscribers.lock().expect("subscriber registry poisoned");

        if let Some(callbacks) = subscribers.get(&event.kind()) {
            for callback in callbacks {
                callback(event);
            }
        }
    }

    /// Event thread body. Blocks on the queue until `Exit` arrives or the
    /// sending side is dropped.
    pub fn run(&self, receiver: Receiver<EventMsg>, log: &Logger) {
        debug!(log, "event thread started"; "context" => "run");

        for msg in receiver {
            match msg {
                EventMsg::Post(event) => self.dispatch(&event),
                EventMsg::Exit => break,
            }
        }

        debug!(log, "event thread finished"; "context" => "run");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism::logging;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_events_are_dispatched_in_order() {
        let hub = Arc::new(EventHub::new());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        hub.subscribe(
            EventKind::Receive,
            Box::new(move |event| {
                if let Event::Receive { name, .. } = event {
                    sink.lock().unwrap().push(*name);
                }
            }),
        );

        let rx = hub.open();
        hub.post(Event::Receive { tag: Tag(*b"PrgI"), name: "Program Input" });
        hub.post(Event::Receive { tag: Tag(*b"PrvI"), name: "Preview Input" });
        hub.close();

        hub.run(rx, &logging::discard());

        assert_eq!(*seen.lock().unwrap(), vec!["Program Input", "Preview Input"]);
    }

    #[test]
    fn test_unsubscribed_kinds_are_ignored() {
        let hub = Arc::new(EventHub::new());
        let count = Arc::new(AtomicUsize::new(0));

        let counter = count.clone();
        hub.subscribe(
            EventKind::Connect,
            Box::new(move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        let rx = hub.open();
        hub.post(Event::Disconnect);
        hub.post(Event::Connect);
        hub.close();
        hub.run(rx, &logging::discard());

        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_post_without_session_is_silent() {
        let hub = EventHub::new();
        hub.post(Event::Disconnect);
    }
}
