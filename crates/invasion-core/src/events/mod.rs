//! Event System
//!
//! Destruction events flow out of the engine through an [`EventSink`].

pub mod logger;
pub mod notices;

pub use logger::EventLogger;
pub use notices::NoticePrinter;

use invasion_events::DestructionEvent;
use thiserror::Error;

/// Failure to hand an event to its destination
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Receives every destruction event, in the order they happen
pub trait EventSink {
    fn record(&mut self, event: &DestructionEvent) -> Result<(), SinkError>;
}

/// Collects events in memory
impl EventSink for Vec<DestructionEvent> {
    fn record(&mut self, event: &DestructionEvent) -> Result<(), SinkError> {
        self.push(event.clone());
        Ok(())
    }
}

/// An absent sink drops events
impl<S: EventSink> EventSink for Option<S> {
    fn record(&mut self, event: &DestructionEvent) -> Result<(), SinkError> {
        match self {
            Some(sink) => sink.record(event),
            None => Ok(()),
        }
    }
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn record(&mut self, event: &DestructionEvent) -> Result<(), SinkError> {
        (**self).record(event)
    }
}

/// Discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&mut self, _event: &DestructionEvent) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Forwards each event to two sinks, first `.0` then `.1`
#[derive(Debug)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: EventSink, B: EventSink> EventSink for Tee<A, B> {
    fn record(&mut self, event: &DestructionEvent) -> Result<(), SinkError> {
        self.0.record(event)?;
        self.1.record(event)
    }
}
