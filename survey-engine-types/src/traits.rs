use std::rc::Rc;

use crate::{Answers, EventEnvelope, StoreError};

/// Trait for the key-value store that keeps a session's answers.
///
/// Answers outlive a single mounted survey: mounting again for the same session
/// resumes from whatever the store holds.
pub trait AnswerStore {
    /// Get the answers recorded for a session, or `None` if nothing was stored yet.
    fn answers(&self, session_id: &str) -> Result<Option<Answers>, StoreError>;

    /// Replace the answers recorded for a session.
    fn set_answers(&self, session_id: &str, answers: Answers) -> Result<(), StoreError>;
}

/// Trait for the endpoint that receives lifecycle telemetry.
///
/// Delivery is fire-and-forget: the engine never waits on it and never learns
/// about failures. Implementations that can fail should log and drop.
pub trait EventSink {
    /// Hand an event over for delivery.
    fn send(&self, envelope: EventEnvelope);
}

impl<T: AnswerStore + ?Sized> AnswerStore for &T {
    fn answers(&self, session_id: &str) -> Result<Option<Answers>, StoreError> {
        (**self).answers(session_id)
    }

    fn set_answers(&self, session_id: &str, answers: Answers) -> Result<(), StoreError> {
        (**self).set_answers(session_id, answers)
    }
}

impl<T: AnswerStore + ?Sized> AnswerStore for Rc<T> {
    fn answers(&self, session_id: &str) -> Result<Option<Answers>, StoreError> {
        (**self).answers(session_id)
    }

    fn set_answers(&self, session_id: &str, answers: Answers) -> Result<(), StoreError> {
        (**self).set_answers(session_id, answers)
    }
}

impl<T: EventSink + ?Sized> EventSink for &T {
    fn send(&self, envelope: EventEnvelope) {
        (**self).send(envelope)
    }
}

impl<T: EventSink + ?Sized> EventSink for Rc<T> {
    fn send(&self, envelope: EventEnvelope) {
        (**self).send(envelope)
    }
}
