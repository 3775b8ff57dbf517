use survey_engine_types::StoreError;

/// Error type for engine operations.
///
/// Only the answer store can fail an operation; disabled submits, over-long
/// text and out-of-bounds selections are reported as `Outcome::Ignored`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The answer could not be written; the engine did not advance.
    #[error("Failed to record answer to question {question_ordinal}: {source}")]
    RecordAnswer {
        question_ordinal: u32,
        #[source]
        source: StoreError,
    },
}
