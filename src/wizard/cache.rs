//! Form state cache carrying entered values across tab switches.

use std::collections::HashMap;

use super::form::Input;

/// Field name → last captured value, shared by every tab.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormCache {
    values: HashMap<String, String>,
}

impl FormCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges `(name, value)` pairs into the cache; later writes win.
    pub fn capture<'a>(&mut self, entries: impl IntoIterator<Item = (&'a str, &'a str)>) {
        for (name, value) in entries {
            self.values.insert(name.to_string(), value.to_string());
        }
    }

    /// Writes cached values back into text inputs with a matching name.
    ///
    /// Non-text inputs, inputs without a cached value and empty cached values
    /// are left alone. Returns the number of inputs written.
    pub fn restore<'a>(&self, inputs: impl IntoIterator<Item = &'a mut Input>) -> usize {
        let mut restored = 0;
        for input in inputs {
            if !input.kind().is_text() {
                continue;
            }
            if let Some(value) = self.get(input.name())
                && !value.is_empty()
            {
                input.set_value(value);
                restored += 1;
            }
        }
        restored
    }

    /// Returns the cached value for `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;
    use crate::wizard::form::InputKind;

    static FORMATS: &[&str] = &["pdf", "png"];

    #[test]
    fn capture_is_last_write_wins() {
        let mut cache = FormCache::new();
        cache.capture([("target", "M31"), ("target", "M33")]);
        cache.capture([("target", "M42")]);
        assert_eq!(cache.get("target"), Some("M42"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn restore_writes_text_inputs_only() {
        let mut cache = FormCache::new();
        cache.capture([
            ("target", "M31"),
            ("custom_fits", "/data/m31.fits"),
            ("output_format", "png"),
        ]);
        let mut inputs = vec![
            Input::new("target", InputKind::Text),
            Input::new("custom_fits", InputKind::File),
            Input::new("output_format", InputKind::Choice(FORMATS)),
        ];
        let restored = cache.restore(inputs.iter_mut());
        assert_eq!(restored, 1);
        assert_eq!(inputs[0].value(), "M31");
        assert_eq!(inputs[1].value(), "");
        assert_eq!(inputs[2].value(), "pdf");
    }

    #[test]
    fn restore_skips_names_not_cached() {
        let mut cache = FormCache::new();
        cache.capture([("target", "M31")]);
        let mut input = Input::new("slit_width", InputKind::Text);
        input.set_value("1.5");
        cache.restore([&mut input]);
        assert_eq!(input.value(), "1.5");
    }

    #[test]
    fn restore_skips_empty_cached_values() {
        let mut cache = FormCache::new();
        cache.capture([("target", "")]);
        let mut input = Input::new("target", InputKind::Text);
        input.set_value("M31");
        assert_eq!(cache.restore([&mut input]), 0);
        assert_eq!(input.value(), "M31");
    }

    #[test]
    fn empty_cache_restores_nothing() {
        let cache = FormCache::new();
        assert!(cache.is_empty());
        let mut input = Input::new("target", InputKind::Text);
        assert_eq!(cache.restore([&mut input]), 0);
    }

    #[quickcheck]
    fn captured_text_is_restored_unchanged(value: String) -> bool {
        let mut cache = FormCache::new();
        cache.capture([("target", value.as_str())]);
        let mut input = Input::new("target", InputKind::Text);
        cache.restore([&mut input]);
        input.value() == value
    }

    #[quickcheck]
    fn file_inputs_are_never_populated(value: String) -> bool {
        let mut cache = FormCache::new();
        cache.capture([("custom_fits", value.as_str())]);
        let mut input = Input::new("custom_fits", InputKind::File);
        cache.restore([&mut input]);
        input.value().is_empty()
    }
}
