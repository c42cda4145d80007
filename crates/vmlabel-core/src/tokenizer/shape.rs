//! Directive shape predicate.
//!
//! A token is a directive when it contains `=` and the text before the first `=`
//! starts with the configured prefix. Only the first `=` separates key from value.
use vmlabel_model::{DIRECTIVE_PREFIX, Directive};

const SEPARATOR: char = '=';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveShape {
    prefix: String,
}

impl DirectiveShape {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns `true` if `token` has the directive shape.
    pub fn matches(&self, token: &str) -> bool {
        self.split_parts(token).is_some()
    }

    /// Split a directive-shaped token into key and value at the first `=`.
    ///
    /// Returns `None` for tokens that are not directives.
    pub fn split(&self, token: &str) -> Option<Directive> {
        self.split_parts(token)
            .map(|(key, value)| Directive::new(key, value))
    }

    fn split_parts<'a>(&self, token: &'a str) -> Option<(&'a str, &'a str)> {
        let (key, value) = token.split_once(SEPARATOR)?;
        key.starts_with(self.prefix.as_str()).then_some((key, value))
    }
}

impl Default for DirectiveShape {
    fn default() -> Self {
        Self::new(DIRECTIVE_PREFIX)
    }
}
