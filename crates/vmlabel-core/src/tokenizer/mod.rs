//! Routing directive recovery from free-text descriptions.
//!
//! Pipeline:
//! 1. split the description on runs of whitespace ([`LabelTokenizer::tokens`]);
//! 2. keep directive-shaped tokens and split them at the first `=` ([`LabelTokenizer::directives`]);
//! 3. fold the directives into a [`ConfigMap`], later keys overwriting earlier ones ([`LabelTokenizer::tokenize`]).
//!
//! Newline-separated, space-separated and mixed descriptions yield the same tokens,
//! so the result does not depend on how the metadata source joined the labels.
//! A value containing a literal space is cut at that space.
mod config;
pub use config::TokenizerConfig;

mod shape;
pub use shape::DirectiveShape;

use tracing::{debug, trace};
use vmlabel_model::{ConfigMap, Directive};

/// Stateless directive tokenizer.
#[derive(Debug, Clone, Default)]
pub struct LabelTokenizer {
    shape: DirectiveShape,
}

impl LabelTokenizer {
    pub fn new(cfg: &TokenizerConfig) -> Self {
        Self {
            shape: DirectiveShape::new(cfg.prefix.clone()),
        }
    }

    /// Candidate tokens: the description split on whitespace runs.
    pub fn tokens<'a>(&self, text: &'a str) -> impl Iterator<Item = &'a str> {
        text.split_whitespace()
    }

    /// Directives in source order; duplicates are kept.
    pub fn directives<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Directive> + 'a {
        self.tokens(text).filter_map(|token| {
            let d = self.shape.split(token);
            if d.is_none() {
                trace!(token, "skipping non-directive token");
            }
            d
        })
    }

    /// Recover the configuration map from a description.
    ///
    /// Never fails: text without directives yields an empty map.
    pub fn tokenize(&self, text: &str) -> ConfigMap {
        let mut map = ConfigMap::new();
        let mut seen = 0usize;
        for d in self.directives(text) {
            seen += 1;
            let (key, value) = d.into_parts();
            if let Some(prev) = map.insert(key.as_str(), value) {
                debug!(key = %key, previous = %prev, "directive overwritten by later occurrence");
            }
        }
        debug!(
            prefix = self.shape.prefix(),
            directives = seen,
            keys = map.len(),
            "description tokenized"
        );
        map
    }
}

/// Tokenize a description with the default `traefik.` prefix.
pub fn tokenize(text: &str) -> ConfigMap {
    LabelTokenizer::default().tokenize(text)
}
