//! Inventory event plumbing: the `Event` contract and injectable sinks.
//!
//! Business logic publishes events to an [`EventSink`] instead of logging
//! directly, so it stays testable without capturing log output.

pub mod envelope;
pub mod event;
pub mod recording;
pub mod sink;

pub use envelope::EventEnvelope;
pub use event::{Event, Severity};
pub use recording::RecordingSink;
pub use sink::{EventSink, NoopSink};
