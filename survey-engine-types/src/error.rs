/// Error type for answer store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store cannot be reached right now.
    #[error("Answer store unavailable: {0}")]
    Unavailable(String),

    /// Backend-specific failure (I/O, serialization, remote datastore, etc.)
    #[error("Answer store backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl StoreError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}

/// Error type for loading and checking survey definitions.
///
/// An unknown `question_type` is deliberately not an error: it parses into
/// `QuestionKind::Unsupported` and the engine renders nothing.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("Malformed survey definition: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Duplicate question ordinal {0}")]
    DuplicateQuestion(u32),

    #[error("Duplicate completion ordinal {0}")]
    DuplicateCompletion(u32),

    #[error("Question {0} has no answer choices")]
    NoChoices(u32),

    #[error("Question {0} has more than one write-in choice")]
    MultipleWriteIns(u32),

    #[error("Question {question}: min_choices {min} exceeds max_choices {max}")]
    InvertedBounds { question: u32, min: usize, max: usize },
}
