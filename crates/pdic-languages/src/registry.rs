use std::collections::HashMap;
use std::sync::LazyLock;

use crate::language::Language;

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::builtin);

#[derive(Debug, thiserror::Error)]
#[error("Unknown language: {0}")]
pub struct UnknownLanguage(pub String);

/// Catalog of languages keyed by their short codes
#[derive(Debug, Default)]
pub struct Registry {
    by_code: HashMap<&'static str, Language>,
    /// Registration order, used for listings
    order: Vec<Language>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every built-in language
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for language in Language::ALL {
            registry.register(language);
        }
        tracing::debug!("Registered {} languages", registry.order.len());
        registry
    }

    /// Add a language under each of its codes. Registering twice is a no-op.
    pub fn register(&mut self, language: Language) {
        if self.order.contains(&language) {
            return;
        }
        self.order.push(language);
        for code in language.codes() {
            self.by_code.insert(code, language);
        }
    }

    /// Look up a language by code, ignoring case
    pub fn resolve(&self, code: &str) -> Result<Language, UnknownLanguage> {
        self.by_code
            .get(code.to_lowercase().as_str())
            .copied()
            .ok_or_else(|| UnknownLanguage(code.to_string()))
    }

    /// Whether `code` names a registered language
    pub fn contains(&self, code: &str) -> bool {
        self.resolve(code).is_ok()
    }

    /// Display names with their sorted codes, in registration order.
    ///
    /// Languages without any reachable code are left out.
    pub fn list_all(&self) -> Vec<(&'static str, Vec<&'static str>)> {
        self.order
            .iter()
            .filter_map(|language| {
                let mut codes: Vec<&'static str> = language
                    .codes()
                    .filter(|code| self.by_code.get(code) == Some(language))
                    .collect();
                if codes.is_empty() {
                    return None;
                }
                codes.sort_unstable();
                Some((language.name(), codes))
            })
            .collect()
    }
}

/// The process-wide registry, built on first use
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// Resolve a code against the process-wide registry
pub fn resolve(code: &str) -> Result<Language, UnknownLanguage> {
    registry().resolve(code)
}

/// List the process-wide registry
pub fn list_languages() -> Vec<(&'static str, Vec<&'static str>)> {
    registry().list_all()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_ignores_case() {
        assert_eq!(resolve("epo").unwrap(), Language::Esperanto);
        assert_eq!(resolve("EO").unwrap(), Language::Esperanto);
        assert_eq!(resolve("Spa").unwrap(), Language::Spanish);
    }

    #[test]
    fn test_resolve_unknown() {
        let err = resolve("tlh").unwrap_err();
        assert_eq!(err.0, "tlh");
        assert_eq!(err.to_string(), "Unknown language: tlh");
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut registry = Registry::new();
        registry.register(Language::Esperanto);
        registry.register(Language::Esperanto);
        assert_eq!(registry.list_all(), vec![("Esperanto", vec!["eo", "epo"])]);
    }

    #[test]
    fn test_empty_registry() {
        let registry = Registry::new();
        assert!(registry.list_all().is_empty());
        assert!(!registry.contains("epo"));
    }

    #[test]
    fn test_list_all() {
        let listing = list_languages();
        assert_eq!(
            listing,
            vec![
                ("Bahasa Indonesia", vec!["id", "ind"]),
                ("English", vec!["en", "eng"]),
                ("Lojban", vec!["jbo"]),
                ("Esperanto", vec!["eo", "epo"]),
                ("Español", vec!["es", "spa"]),
            ]
        );
    }
}
