use serde::{Deserialize, Serialize};
use vmlabel_model::DIRECTIVE_PREFIX;

/// Tokenizer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Prefix a key must start with to be accepted (e.g. `"traefik."`).
    pub prefix: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            prefix: DIRECTIVE_PREFIX.to_string(),
        }
    }
}

impl TokenizerConfig {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}
