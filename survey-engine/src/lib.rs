//! # survey-engine
//!
//! Runs a remote survey: asks its questions in order, records the answers,
//! picks the completion whose trigger matches, and reports lifecycle events.
//!
//! The engine owns no I/O. Answers go to an injected [`AnswerStore`] and
//! telemetry to an injected [`EventSink`]; frontends read [`View`]s and feed
//! user input back through the engine's methods.
//!
//! ## Usage
//!
//! ```rust
//! use survey_engine::{
//!     AnswerChoice, ChoiceQuestion, Completion, InMemoryAnswerStore, Question, QuestionKind,
//!     RecordingEventSink, Session, SurveyDefinition, SurveyEngine, View,
//! };
//!
//! let definition = SurveyDefinition::new(
//!     Session::new("session-1", "token"),
//!     vec![Question::new(
//!         1,
//!         "How satisfied are you?",
//!         QuestionKind::Rating(ChoiceQuestion::new(vec![
//!             AnswerChoice::new(1, "Unhappy"),
//!             AnswerChoice::new(2, "Delighted"),
//!         ])),
//!     )],
//!     vec![Completion::new(1, "Thanks for sharing your thoughts!")],
//! );
//!
//! let store = InMemoryAnswerStore::new();
//! let sink = RecordingEventSink::new();
//! let mut engine = SurveyEngine::mount(definition, &store, &sink);
//!
//! // Ratings are recorded as soon as a point is picked.
//! engine.select(2).unwrap();
//! assert!(matches!(engine.view(), View::Completion(_)));
//! assert_eq!(sink.len(), 3); // survey_shown, question_answered, completion_shown
//! ```
//!
//! ## State machine
//!
//! A mounted survey is in one of four states ([`EngineState`]):
//! - `Asking` - a question is on screen
//! - `Complete` - every question is answered and a completion was selected
//! - `Dismissed` - closed by the respondent; terminal
//! - `Unsupported` - the definition contains an unknown question type; terminal
//!
//! Events are entry actions of these states, so reading the view any number of
//! times never sends anything.

// Re-export all types from survey-engine-types
pub use survey_engine_types::*;

mod config;
pub use config::{DEFAULT_MAX_TEXT_LENGTH, EngineConfig, NoMatchPolicy};

mod draft;
pub use draft::{Draft, truncate_chars};

pub mod sequencer;

pub mod completion;

mod view;
pub use view::{CompletionView, OptionView, QuestionView, View};

mod engine;
pub use engine::{EngineState, Outcome, SurveyEngine};

mod error;
pub use error::EngineError;

// In-memory collaborators for tests and demos
mod memory;
pub use memory::{InMemoryAnswerStore, RecordingEventSink};

mod writer_sink;
pub use writer_sink::WriterEventSink;
