//! In-memory recording sink for tests/dev.

use std::sync::{Mutex, MutexGuard};

use uuid::Uuid;

use crate::envelope::EventEnvelope;
use crate::sink::EventSink;

/// Sink that keeps every published event, wrapped in an [`EventEnvelope`].
///
/// - No IO
/// - Sequence numbers start at 1, follow publish order, and keep counting
///   across `clear()`
/// - A poisoned lock is recovered, so recording never fails
#[derive(Debug)]
pub struct RecordingSink<E> {
    state: Mutex<Recorded<E>>,
}

#[derive(Debug)]
struct Recorded<E> {
    envelopes: Vec<EventEnvelope<E>>,
    last_sequence: u64,
}

impl<E> RecordingSink<E> {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded<E>> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn len(&self) -> usize {
        self.lock().envelopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().envelopes.is_empty()
    }

    /// Drop recorded events. Sequence numbering continues where it left off.
    pub fn clear(&self) {
        self.lock().envelopes.clear();
    }
}

impl<E: Clone> RecordingSink<E> {
    /// Published events, in publish order.
    pub fn events(&self) -> Vec<E> {
        self.lock()
            .envelopes
            .iter()
            .map(|env| env.payload().clone())
            .collect()
    }

    pub fn envelopes(&self) -> Vec<EventEnvelope<E>> {
        self.lock().envelopes.clone()
    }
}

impl<E> Default for RecordingSink<E> {
    fn default() -> Self {
        Self {
            state: Mutex::new(Recorded {
                envelopes: Vec::new(),
                last_sequence: 0,
            }),
        }
    }
}

impl<E: Clone> EventSink<E> for RecordingSink<E> {
    fn publish(&self, event: &E) {
        let mut recorded = self.lock();
        recorded.last_sequence += 1;
        let sequence_number = recorded.last_sequence;
        recorded
            .envelopes
            .push(EventEnvelope::new(Uuid::now_v7(), sequence_number, event.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::NoopSink;

    #[test]
    fn records_events_in_publish_order() {
        let sink = RecordingSink::new();
        sink.publish(&"first");
        sink.publish(&"second");

        assert_eq!(sink.events(), vec!["first", "second"]);
        let seqs: Vec<u64> = sink.envelopes().iter().map(|e| e.sequence_number()).collect();
        assert_eq!(seqs, vec![1, 2]);
    }

    #[test]
    fn event_ids_are_unique() {
        let sink = RecordingSink::new();
        sink.publish(&1u8);
        sink.publish(&1u8);

        let envs = sink.envelopes();
        assert_ne!(envs[0].event_id(), envs[1].event_id());
    }

    #[test]
    fn sequence_keeps_increasing_across_clear() {
        let sink = RecordingSink::new();
        sink.publish(&"a");
        sink.publish(&"b");
        sink.clear();
        assert!(sink.is_empty());

        sink.publish(&"c");
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.envelopes()[0].sequence_number(), 3);
    }

    #[test]
    fn borrowed_and_shared_sinks_forward() {
        let sink = std::sync::Arc::new(RecordingSink::new());
        let by_ref: &RecordingSink<&str> = &sink;
        EventSink::publish(&by_ref, &"via ref");
        EventSink::publish(&sink, &"via arc");
        NoopSink.publish(&"dropped");

        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn envelope_serializes_with_payload() {
        let sink = RecordingSink::new();
        sink.publish(&"payload");
        let json = serde_json::to_value(&sink.envelopes()[0]).unwrap();
        assert_eq!(json["payload"], "payload");
        assert_eq!(json["sequence_number"], 1);
    }
}
