//! Event publishing abstraction (observer / event-sink capability).
//!
//! A sink is the single place where inventory operations report what happened:
//! receipts issued, stock clamped, products missing. Production code wires a
//! logging sink; tests wire a [`crate::RecordingSink`] and assert on events.
//!
//! Publishing is **infallible**. Inventory operations never fail, and a sink
//! that cannot deliver must swallow the problem itself rather than push it back
//! into business logic.

use std::sync::Arc;

/// Receives events published by business operations.
pub trait EventSink<E> {
    fn publish(&self, event: &E);
}

impl<E, S> EventSink<E> for &S
where
    S: EventSink<E> + ?Sized,
{
    fn publish(&self, event: &E) {
        (**self).publish(event)
    }
}

impl<E, S> EventSink<E> for Arc<S>
where
    S: EventSink<E> + ?Sized,
{
    fn publish(&self, event: &E) {
        (**self).publish(event)
    }
}

impl<E, S> EventSink<E> for Box<S>
where
    S: EventSink<E> + ?Sized,
{
    fn publish(&self, event: &E) {
        (**self).publish(event)
    }
}

/// Sink that discards everything.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopSink;

impl<E> EventSink<E> for NoopSink {
    fn publish(&self, _event: &E) {}
}
