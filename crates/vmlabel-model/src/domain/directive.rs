use serde::{Deserialize, Serialize};

/// One `key=value` directive recovered from a description.
///
/// The value is kept verbatim, including any `=`, backticks or parentheses it carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Dotted configuration key, e.g. `traefik.http.routers.app.rule`.
    key: String,
    /// Raw value found after the first `=`; may be empty.
    value: String,
}

impl Directive {
    /// Create a new directive.
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Split into owned `(key, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl From<(&str, &str)> for Directive {
    fn from((key, value): (&str, &str)) -> Self {
        Self::new(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::Directive;

    #[test]
    fn new_sets_key_and_value() {
        let d = Directive::new("traefik.enable", "true");
        assert_eq!(d.key(), "traefik.enable");
        assert_eq!(d.value(), "true");
    }

    #[test]
    fn from_str_tuple_keeps_value_verbatim() {
        let d: Directive = ("traefik.http.routers.a.rule", "Host(`a.example.com`)").into();
        assert_eq!(d.value(), "Host(`a.example.com`)");
    }

    #[test]
    fn into_parts_returns_owned_pair() {
        let d = Directive::new("traefik.x", "");
        let (k, v) = d.into_parts();
        assert_eq!(k, "traefik.x");
        assert!(v.is_empty());
    }
}
