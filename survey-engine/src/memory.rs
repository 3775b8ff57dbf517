use std::cell::RefCell;
use std::collections::HashMap;

use survey_engine_types::{AnswerStore, Answers, EventEnvelope, EventKind, EventSink, StoreError};

/// Answer store backed by a map, keyed `survey-<session_id>`.
///
/// ```rust
/// use survey_engine::{AnswerRecord, AnswerStore, Answers, InMemoryAnswerStore};
///
/// let store = InMemoryAnswerStore::new()
///     .with_answers("session-1", Answers::from(vec![AnswerRecord::new(1, "Foobar")]));
///
/// assert_eq!(store.answers("session-1").unwrap().unwrap().len(), 1);
/// assert!(store.answers("session-2").unwrap().is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryAnswerStore {
    entries: RefCell<HashMap<String, Answers>>,
}

impl InMemoryAnswerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the answers for a session.
    pub fn with_answers(self, session_id: &str, answers: Answers) -> Self {
        self.entries.borrow_mut().insert(store_key(session_id), answers);
        self
    }

    /// Snapshot of the answers stored for a session.
    pub fn answers_for(&self, session_id: &str) -> Option<Answers> {
        self.entries.borrow().get(&store_key(session_id)).cloned()
    }

    /// Check if anything was stored under the given raw key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl AnswerStore for InMemoryAnswerStore {
    fn answers(&self, session_id: &str) -> Result<Option<Answers>, StoreError> {
        Ok(self.answers_for(session_id))
    }

    fn set_answers(&self, session_id: &str, answers: Answers) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(store_key(session_id), answers);
        Ok(())
    }
}

fn store_key(session_id: &str) -> String {
    format!("survey-{session_id}")
}

/// Event sink that keeps every envelope it receives, in order.
#[derive(Debug, Default)]
pub struct RecordingEventSink {
    events: RefCell<Vec<EventEnvelope>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every envelope received so far.
    pub fn events(&self) -> Vec<EventEnvelope> {
        self.events.borrow().clone()
    }

    /// The kinds of every envelope received so far.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.events.borrow().iter().map(EventEnvelope::kind).collect()
    }

    /// How many envelopes of one kind were received.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|envelope| envelope.kind() == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl EventSink for RecordingEventSink {
    fn send(&self, envelope: EventEnvelope) {
        self.events.borrow_mut().push(envelope);
    }
}
