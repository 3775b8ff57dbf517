//! Terminal survey: a bounded multi select with an "other" write-in.
//!
//! Events are written to stderr as JSON lines.
//!
//! Run with: cargo run -p survey-engine-dialoguer --example pizza

use example_surveys::pizza_toppings;
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
    let mut engine = SurveyEngine::mount(pizza_toppings(), &store, &sink);

    let state = DialoguerFrontend::new().run(&mut engine)?;
    println!("Survey ended: {state:?}");
    println!("{:#?}", engine.answers());
    Ok(())
}
