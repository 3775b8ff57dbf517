//! Core types for the survey-engine crate.
//!
//! This crate provides the foundational types for running a remote survey:
//! - `SurveyDefinition` - The questions and completions delivered for one session
//! - `Question` and `QuestionKind` - Individual questions and their types
//! - `Completion` and `TriggerCondition` - The closing screens and when they apply
//! - `AnswerRecord` and `Answers` - What the respondent answered
//! - `SurveyEvent` and `EventEnvelope` - Lifecycle telemetry
//! - `AnswerStore` and `EventSink` traits - The engine's external collaborators

mod session;
pub use session::Session;

mod question;
pub use question::{
    AnswerChoice, ChoiceQuestion, MultiSelectQuestion, OpenTextQuestion, Question, QuestionKind,
};

mod completion;
pub use completion::{Completion, FollowUp, TriggerCondition};

mod answer;
pub use answer::{AnswerRecord, AnswerValue, Answers, ChosenAnswer};

mod event;
pub use event::{EventEnvelope, EventKind, RequestBody, SurveyEvent};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod error;
pub use error::{DefinitionError, StoreError};

mod traits;
pub use traits::{AnswerStore, EventSink};
