//! Destruction notices for a human reader, one line per event.

use std::io::Write;

use invasion_events::DestructionEvent;

use super::{EventSink, SinkError};

#[derive(Debug)]
pub struct NoticePrinter<W: Write> {
    out: W,
}

impl<W: Write> NoticePrinter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> EventSink for NoticePrinter<W> {
    fn record(&mut self, event: &DestructionEvent) -> Result<(), SinkError> {
        writeln!(self.out, "{}", event.notice())?;
        Ok(())
    }
}
