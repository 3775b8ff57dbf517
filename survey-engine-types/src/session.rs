use serde::{Deserialize, Serialize};

/// Opaque identifiers for one survey-taking instance.
///
/// The engine never interprets these; they are attached unchanged to every
/// emitted event and the id doubles as the answer store key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub session_token: String,
}

impl Session {
    /// Create a new session.
    pub fn new(session_id: impl Into<String>, session_token: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            session_token: session_token.into(),
        }
    }

    /// Get the session id.
    pub fn id(&self) -> &str {
        &self.session_id
    }
}
