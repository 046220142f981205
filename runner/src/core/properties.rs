//! String property store backing every runner.
//!
//! Keys are unique and the last write wins. Readers outside the runner only
//! ever see [`Properties::snapshot`] copies, so nothing can alias the live map.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::{Deserialize, Serialize};

use crate::core::keys;
use crate::version;

/// Ordered mapping from property key to property value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties {
    entries: BTreeMap<String, String>,
}

impl Properties {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the four runner defaults and nothing else.
    pub fn with_defaults() -> Self {
        let mut props = Self::new();
        props.set(keys::HOST_URL, keys::DEFAULT_HOST_URL);
        props.set(keys::TASK, keys::DEFAULT_TASK);
        props.set(keys::APP_NAME, keys::DEFAULT_APP_NAME);
        props.set(keys::APP_VERSION, version::version());
        props
    }

    /// Merge every entry of `props`, overwriting keys that are already present.
    pub fn add_all<I, K, V>(&mut self, props: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.extend(props);
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Return the value stored under `key`, or `default` when the key is absent.
    pub fn get<'a>(&'a self, key: &str, default: Option<&'a str>) -> Option<&'a str> {
        self.entries.get(key).map(String::as_str).or(default)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Independent copy of all current entries.
    pub fn snapshot(&self) -> Properties {
        self.clone()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.entries.iter()
    }
}

impl<K, V> Extend<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Properties
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        props.extend(iter);
        props
    }
}

impl<'a> IntoIterator for &'a Properties {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_contain_exactly_four_keys() {
        let props = Properties::with_defaults();
        let names: Vec<&str> = props.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(
            names,
            vec![keys::APP_NAME, keys::APP_VERSION, keys::HOST_URL, keys::TASK]
        );
        assert_eq!(
            props.get(keys::HOST_URL, None),
            Some("http://localhost:9000")
        );
        assert_eq!(props.get(keys::TASK, None), Some("scan"));
        assert_eq!(props.get(keys::APP_NAME, None), Some("SonarRunner"));
        assert_eq!(
            props.get(keys::APP_VERSION, None),
            Some(env!("CARGO_PKG_VERSION"))
        );
    }

    #[test]
    fn set_overwrites_previous_value() {
        let mut props = Properties::new();
        props.set("sonar.projectKey", "first");
        props.set("sonar.projectKey", "second");
        assert_eq!(props.get("sonar.projectKey", None), Some("second"));
        assert_eq!(props.len(), 1);
        assert!(props.contains_key("sonar.projectKey"));
        assert!(!props.contains_key("sonar.projectName"));
    }

    #[test]
    fn get_falls_back_to_default_only_when_absent() {
        let mut props = Properties::new();
        assert_eq!(props.get("missing", Some("fallback")), Some("fallback"));
        assert_eq!(props.get("missing", None), None);

        props.set("empty", "");
        assert_eq!(props.get("empty", Some("fallback")), Some(""));
    }

    /// Merging overwrites shared keys, keeps the rest, and leaves the input alone.
    #[test]
    fn add_all_merges_without_touching_input() {
        let mut props = Properties::with_defaults();
        let input: Properties = [(keys::TASK, "views"), ("sonar.sources", "src")]
            .into_iter()
            .collect();

        props.add_all(&input);

        assert_eq!(props.get(keys::TASK, None), Some("views"));
        assert_eq!(props.get("sonar.sources", None), Some("src"));
        assert_eq!(
            props.get(keys::HOST_URL, None),
            Some(keys::DEFAULT_HOST_URL)
        );
        assert_eq!(input.len(), 2);
    }

    #[test]
    fn snapshot_is_independent() {
        let mut props = Properties::with_defaults();
        let mut copy = props.snapshot();

        copy.set(keys::TASK, "changed");
        props.set(keys::HOST_URL, "http://sonar.example.com");

        assert_eq!(props.get(keys::TASK, None), Some(keys::DEFAULT_TASK));
        assert_eq!(copy.get(keys::HOST_URL, None), Some(keys::DEFAULT_HOST_URL));
    }

    #[test]
    fn serializes_as_flat_json_object() {
        let props: Properties = [("b", "2"), ("a", "1")].into_iter().collect();
        let json = serde_json::to_string(&props).expect("serialize");
        assert_eq!(json, r#"{"a":"1","b":"2"}"#);
    }
}
