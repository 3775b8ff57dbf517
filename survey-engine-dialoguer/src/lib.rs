//! # survey-engine-dialoguer
//!
//! Terminal frontend for survey-engine.
//!
//! Each question of a mounted [`SurveyEngine`](survey_engine::SurveyEngine) is
//! presented as a `dialoguer` prompt: ratings and single selects as a `Select`,
//! multi selects as a `MultiSelect`, and open text as an `Input`. Pressing
//! Escape or Ctrl+C dismisses the survey.
//!
//! ## Example
//!
//! ```rust,ignore
//! use survey_engine::{InMemoryAnswerStore, SurveyDefinition, SurveyEngine, WriterEventSink};
//! use survey_engine_dialoguer::DialoguerFrontend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let definition = SurveyDefinition::from_json(&std::fs::read_to_string("survey.json")?)?;
//!     let store = InMemoryAnswerStore::new();
//!     let sink = WriterEventSink::new(std::io::stderr());
//!
//!     let mut engine = SurveyEngine::mount(definition, &store, &sink);
//!     let state = DialoguerFrontend::new().run(&mut engine)?;
//!     println!("Survey ended: {state:?}");
//!     Ok(())
//! }
//! ```

mod frontend;

pub use frontend::{DialoguerFrontend, FrontendError};
