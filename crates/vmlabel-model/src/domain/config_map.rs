use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Directive;

/// Routing configuration recovered from a description, keyed by dotted directive key.
///
/// Keys are unique. Inserting an existing key replaces its value, so folding
/// directives in source order gives last-write-wins semantics.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMap(BTreeMap<String, String>);

impl ConfigMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if no directives were recovered.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Insert or overwrite a value.
    ///
    /// Returns the value previously stored under `key`, if any.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<String>
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.0.insert(key.into(), value.into())
    }

    /// Get the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(|s| s.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate through all entries as `(&str, &str)` pairs, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }
}

impl Extend<Directive> for ConfigMap {
    fn extend<I: IntoIterator<Item = Directive>>(&mut self, iter: I) {
        for d in iter {
            let (key, value) = d.into_parts();
            self.0.insert(key, value);
        }
    }
}

impl FromIterator<Directive> for ConfigMap {
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        let m = ConfigMap::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert!(m.get("traefik.enable").is_none());
    }

    #[test]
    fn insert_overwrites_and_returns_previous() {
        let mut m = ConfigMap::new();
        assert_eq!(m.insert("traefik.a", "1"), None);
        assert_eq!(m.insert("traefik.a", "2"), Some("1".to_string()));
        assert_eq!(m.get("traefik.a"), Some("2"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn collect_is_last_write_wins() {
        let m: ConfigMap = vec![
            Directive::new("traefik.a", "1"),
            Directive::new("traefik.b", "x"),
            Directive::new("traefik.a", "2"),
        ]
        .into_iter()
        .collect();

        assert_eq!(m.len(), 2);
        assert_eq!(m.get("traefik.a"), Some("2"));
        assert_eq!(m.get("traefik.b"), Some("x"));
    }

    #[test]
    fn iter_is_sorted_by_key() {
        let mut m = ConfigMap::new();
        m.insert("traefik.z", "1");
        m.insert("traefik.a", "2");

        let keys: Vec<_> = m.keys().collect();
        assert_eq!(keys, vec!["traefik.a", "traefik.z"]);
        assert!(m.contains_key("traefik.z"));
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut m = ConfigMap::new();
        m.insert("traefik.enable", "true");

        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"traefik.enable":"true"}"#);

        let back: ConfigMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
    }
}
