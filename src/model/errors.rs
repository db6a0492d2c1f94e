use std::collections::BTreeMap;

use serde::Deserialize;

/// Error key reserved for messages not tied to any field.
pub const GENERAL_ERROR_KEY: &str = "__general";

/// Message shown when a submission fails for any reason other than field validation.
pub const GENERAL_ERROR_MESSAGE: &str = "Oops. Something has gone wrong.";

/// Field name → error message, as returned by the server on `400 Bad Request`.
///
/// Replaced wholesale after every submission; an empty map means no errors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<String, String>);

impl ErrorMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the map used for transport failures and unexpected statuses.
    pub fn general_failure() -> Self {
        Self::from_iter([(GENERAL_ERROR_KEY, GENERAL_ERROR_MESSAGE)])
    }

    /// Returns `true` if there are no errors.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the message for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the general (non-field) message, if any.
    pub fn general(&self) -> Option<&str> {
        self.get(GENERAL_ERROR_KEY)
    }

    /// Iterates entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        assert!(ErrorMap::new().is_empty());
        assert_eq!(ErrorMap::new().len(), 0);
    }

    #[test]
    fn general_failure_has_only_general_key() {
        let map = ErrorMap::general_failure();
        assert_eq!(map.len(), 1);
        assert_eq!(map.general(), Some("Oops. Something has gone wrong."));
    }

    #[test]
    fn deserializes_from_json_object() {
        let map: ErrorMap =
            serde_json::from_str(r#"{"target": "Required", "declination": "Bad"}"#).unwrap();
        assert_eq!(map.get("target"), Some("Required"));
        assert_eq!(map.get("declination"), Some("Bad"));
        assert_eq!(map.general(), None);
    }

    #[test]
    fn iter_is_key_ordered() {
        let map = ErrorMap::from_iter([("b", "2"), ("a", "1")]);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
