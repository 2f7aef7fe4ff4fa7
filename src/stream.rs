//! Output streams delivered to the view layer.
//!
//! Controllers never hand the view a snapshot: every observable output is a
//! stream of discrete values pushed in commit order. Two flavors exist:
//!
//! - [`ValueStream`] for state-derived values: distinct-until-changed, so a
//!   diffing renderer only ever sees actual changes
//! - [`EventStream`] for one-shot events (navigation, errors, prompts):
//!   every push is delivered, duplicates included

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// State-derived output stream with distinct-until-changed semantics.
///
/// A push equal to the last delivered value is dropped. Subscribers receive
/// every subsequent distinct value in push order; subscribing does not
/// replay past values.
pub struct ValueStream<T> {
    subscribers: Vec<UnboundedSender<T>>,
    last: Option<T>,
}

impl<T: Clone + PartialEq> ValueStream<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            last: None,
        }
    }

    /// Register a new subscriber. Only values pushed after this call are
    /// delivered.
    pub fn subscribe(&mut self) -> UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Push a value, skipping it if it equals the last delivered one.
    /// Subscribers whose receiver was dropped are pruned.
    pub fn push(&mut self, value: T) {
        if self.last.as_ref() == Some(&value) {
            return;
        }
        self.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
        self.last = Some(value);
    }

    /// The most recently delivered value, if any.
    pub fn last(&self) -> Option<&T> {
        self.last.as_ref()
    }
}

impl<T: Clone + PartialEq> Default for ValueStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot event stream: every push is delivered, duplicates included.
pub struct EventStream<T> {
    subscribers: Vec<UnboundedSender<T>>,
}

impl<T: Clone> EventStream<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Register a new subscriber. Only events pushed after this call are
    /// delivered.
    pub fn subscribe(&mut self) -> UnboundedReceiver<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.push(tx);
        rx
    }

    /// Deliver an event to every live subscriber.
    pub fn push(&mut self, value: T) {
        self.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
    }
}

impl<T: Clone> Default for EventStream<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Drain every value currently buffered on a receiver. Test helper.
#[cfg(test)]
pub(crate) fn drain<T>(rx: &mut UnboundedReceiver<T>) -> Vec<T> {
    let mut out = Vec::new();
    while let Ok(value) = rx.try_recv() {
        out.push(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_stream_dedups_consecutive_values() {
        let mut stream = ValueStream::new();
        let mut rx = stream.subscribe();

        stream.push(1);
        stream.push(1);
        stream.push(2);
        stream.push(2);
        stream.push(1);

        assert_eq!(drain(&mut rx), vec![1, 2, 1]);
    }

    #[test]
    fn value_stream_does_not_replay_to_late_subscribers() {
        let mut stream = ValueStream::new();
        stream.push("a");

        let mut rx = stream.subscribe();
        stream.push("b");

        assert_eq!(drain(&mut rx), vec!["b"]);
    }

    #[test]
    fn value_stream_tracks_last_value() {
        let mut stream = ValueStream::new();
        assert_eq!(stream.last(), None);

        stream.push(7);
        assert_eq!(stream.last(), Some(&7));
    }

    #[test]
    fn value_stream_delivers_to_all_subscribers() {
        let mut stream = ValueStream::new();
        let mut rx1 = stream.subscribe();
        let mut rx2 = stream.subscribe();

        stream.push(42);

        assert_eq!(drain(&mut rx1), vec![42]);
        assert_eq!(drain(&mut rx2), vec![42]);
    }

    #[test]
    fn value_stream_prunes_closed_subscribers() {
        let mut stream = ValueStream::new();
        let rx = stream.subscribe();
        drop(rx);

        stream.push(1);
        assert_eq!(stream.subscribers.len(), 0);
    }

    #[test]
    fn event_stream_delivers_duplicates() {
        let mut stream = EventStream::new();
        let mut rx = stream.subscribe();

        stream.push("go");
        stream.push("go");

        assert_eq!(drain(&mut rx), vec!["go", "go"]);
    }

    #[test]
    fn event_stream_preserves_push_order() {
        let mut stream = EventStream::new();
        let mut rx = stream.subscribe();

        for i in 0..5 {
            stream.push(i);
        }

        assert_eq!(drain(&mut rx), vec![0, 1, 2, 3, 4]);
    }
}
