use serde::{Deserialize, Serialize};

/// Default truncation bound, in characters, for free-text input.
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 100;

/// What to show when no completion trigger matches and there is no fallback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoMatchPolicy {
    /// Show the first completion in definition order.
    #[default]
    FirstCompletion,

    /// Show nothing.
    RenderNothing,
}

/// Engine settings. Every field has a default, so partial JSON is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Open text answers and "other" write-ins are cut to this many characters.
    pub max_text_length: usize,

    pub no_match_policy: NoMatchPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_text_length: DEFAULT_MAX_TEXT_LENGTH,
            no_match_policy: NoMatchPolicy::default(),
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set the free-text truncation bound.
    pub fn with_max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    /// Set the no-match policy.
    pub fn with_no_match_policy(mut self, policy: NoMatchPolicy) -> Self {
        self.no_match_policy = policy;
        self
    }
}
