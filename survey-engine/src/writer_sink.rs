use std::cell::RefCell;
use std::io::Write;

use survey_engine_types::{EventEnvelope, EventSink};

/// Event sink that writes each request body as one line of JSON.
///
/// Write failures are logged and the event is dropped.
#[derive(Debug)]
pub struct WriterEventSink<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> WriterEventSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }

    /// Unwrap the writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_line(&self, envelope: &EventEnvelope) -> anyhow::Result<()> {
        let mut writer = self.writer.borrow_mut();
        serde_json::to_writer(&mut *writer, &envelope.request_body())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

impl<W: Write> EventSink for WriterEventSink<W> {
    fn send(&self, envelope: EventEnvelope) {
        if let Err(err) = self.write_line(&envelope) {
            tracing::warn!(
                event = envelope.kind().as_str(),
                session_id = %envelope.session.session_id,
                error = %err,
                "failed to write survey event, dropping"
            );
        }
    }
}
