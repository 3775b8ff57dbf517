//! Loads a survey definition from a JSON file, or the bundled rating survey
//! when no path is given, and resumes from answers kept in a JSON file.
//!
//! Run with: cargo run -p survey-engine-dialoguer --example from_json -- [survey.json] [answers.json]

use std::path::PathBuf;

use anyhow::Context;
use example_surveys::RATING_JSON;
use survey_engine::{
    AnswerStore, Answers, EngineConfig, StoreError, SurveyDefinition, SurveyEngine,
    WriterEventSink,
};
use survey_engine_dialoguer::DialoguerFrontend;
use tracing_subscriber::EnvFilter;

/// Keeps one session's answers in a JSON file.
struct JsonFileStore {
    path: PathBuf,
}

impl AnswerStore for JsonFileStore {
    fn answers(&self, _session_id: &str) -> Result<Option<Answers>, StoreError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let json = std::fs::read_to_string(&self.path).map_err(StoreError::backend)?;
        let answers = serde_json::from_str(&json).map_err(StoreError::backend)?;
        Ok(Some(answers))
    }

    fn set_answers(&self, _session_id: &str, answers: Answers) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&answers).map_err(StoreError::backend)?;
        std::fs::write(&self.path, json).map_err(StoreError::backend)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let json = match args.next() {
        Some(path) => std::fs::read_to_string(&path).with_context(|| format!("read {path}"))?,
        None => RATING_JSON.to_string(),
    };
    let definition = SurveyDefinition::from_json(&json).context("parse survey definition")?;
    definition.validate().context("check survey definition")?;

    let store = JsonFileStore {
        path: args
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("survey-answers.json")),
    };
    let sink = WriterEventSink::new(std::io::stderr());
    let config = match std::env::var("SURVEY_ENGINE_CONFIG") {
        Ok(config) => EngineConfig::from_json(&config).context("parse SURVEY_ENGINE_CONFIG")?,
        Err(_) => EngineConfig::default(),
    };

    let mut engine = SurveyEngine::mount_with_config(definition, &store, &sink, config);
    let state = DialoguerFrontend::new().run(&mut engine)?;
    println!("Survey ended: {state:?}");
    Ok(())
}
