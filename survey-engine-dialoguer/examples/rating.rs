//! Terminal survey: a single rating question with triggered completions.
//!
//! Events are written to stderr as JSON lines.
//!
//! Run with: cargo run -p survey-engine-dialoguer --example rating

use example_surveys::satisfaction_rating;
use survey_engine::{InMemoryAnswerStore, SurveyEngine, WriterEventSink};
use survey_engine_dialoguer::DialoguerFrontend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let store = InMemoryAnswerStore::new();
    let sink = WriterEventSink::new(std::io::stderr());
    let mut engine = SurveyEngine::mount(satisfaction_rating(), &store, &sink);

    let state = DialoguerFrontend::new().run(&mut engine)?;
    println!("Survey ended: {state:?}");
    println!("{:#?}", engine.answers());
    Ok(())
}
