//! One-of-N selection from a fixed table keyed by a discriminator.
//!
//! Tables are plain values built by a function and passed to whoever needs
//! them; there is no global registry. A key that is not in the table is an
//! [`PatternError::UnsupportedSelector`], never a silent default.

use crate::error::{PatternError, Result};

/// A table mapping discriminator keys to constructors.
///
/// `kind` names the discriminator ("country", "currency", ...) so errors say
/// which lookup failed.
pub struct SelectorTable<T: ?Sized> {
    kind: &'static str,
    entries: Vec<(&'static str, fn() -> Box<T>)>,
}

impl<T: ?Sized> SelectorTable<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Adds a key. Keys are stored lowercase; a repeated key replaces the
    /// earlier constructor.
    pub fn with(mut self, key: &'static str, make: fn() -> Box<T>) -> Self {
        debug_assert!(
            key == key.to_ascii_lowercase(),
            "selector keys are lowercase"
        );
        self.entries.retain(|(existing, _)| *existing != key);
        self.entries.push((key, make));
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Builds the implementation bound to `selector`.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn select(&self, selector: &str) -> Result<Box<T>> {
        let wanted = normalize(selector);
        match self.entries.iter().find(|(key, _)| *key == wanted) {
            Some((key, make)) => {
                tracing::debug!(kind = self.kind, key, "selector matched");
                Ok(make())
            }
            None => {
                tracing::debug!(kind = self.kind, selector, "selector not recognised");
                Err(PatternError::unsupported(self.kind, selector))
            }
        }
    }

    pub fn contains(&self, selector: &str) -> bool {
        let wanted = normalize(selector);
        self.entries.iter().any(|(key, _)| *key == wanted)
    }

    /// Registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }
}

/// Canonical form used for every discriminator comparison.
pub fn normalize(selector: &str) -> String {
    selector.trim().to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter {
        fn greet(&self) -> String;
    }

    struct English;
    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    struct French;
    impl Greeter for French {
        fn greet(&self) -> String {
            "bonjour".to_string()
        }
    }

    fn table() -> SelectorTable<dyn Greeter> {
        SelectorTable::<dyn Greeter>::new("language")
            .with("en", || Box::new(English))
            .with("fr", || Box::new(French))
    }

    #[test]
    fn test_known_selector() {
        let greeter = table().select("fr").unwrap();
        assert_eq!(greeter.greet(), "bonjour");
    }

    #[test]
    fn test_selector_is_trimmed_and_case_insensitive() {
        let greeter = table().select("  EN ").unwrap();
        assert_eq!(greeter.greet(), "hello");
        assert!(table().contains("Fr"));
    }

    #[test]
    fn test_unknown_selector_fails() {
        let err = table().select("de").err().unwrap();
        assert_eq!(
            err,
            PatternError::UnsupportedSelector {
                kind: "language",
                selector: "de".to_string()
            }
        );
    }

    #[test]
    fn test_empty_table_rejects_everything() {
        let empty: SelectorTable<dyn Greeter> = SelectorTable::new("language");
        assert!(empty.select("en").is_err());
    }

    #[test]
    fn test_repeated_key_replaces() {
        let table = table().with("en", || Box::new(French));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["fr", "en"]);
        assert_eq!(table.select("en").unwrap().greet(), "bonjour");
    }
}
