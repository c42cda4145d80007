//! Common model-level constants.

/// Prefix a description token must carry to be treated as a routing directive.
///
/// Tokens such as `traefik.enable=true` are recovered from free-text descriptions,
/// anything else is narrative text and is ignored.
/// Callers that route with a different proxy can supply their own prefix to the tokenizer.
pub const DIRECTIVE_PREFIX: &str = "traefik.";
