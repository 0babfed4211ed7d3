//! Surrogate registry
//!
//! Per-run cache enforcing the consistency invariant: within one run, every
//! occurrence of the same normalized original text with the same tag type
//! receives the same surrogate. The registry lives for one run only and is
//! exclusively owned by the sequential engine loop.

use crate::domain::phi::PhiType;
use crate::domain::result::Result;
use std::collections::HashMap;

/// Cache key: normalized original text plus tag type
///
/// Normalization is surrounding-whitespace trim plus Unicode-simple
/// lowercasing. Two textual occurrences are "the same value" exactly when
/// their normalized forms and types are equal; diacritics are preserved, so
/// `"Bénédicte"` and `"Benedicte"` are distinct originals.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryKey {
    normalized: String,
    phi_type: PhiType,
}

impl RegistryKey {
    /// Build a key from the raw matched text and its tag type
    pub fn new(raw: &str, phi_type: PhiType) -> Self {
        Self {
            normalized: normalize_original(raw),
            phi_type,
        }
    }
}

/// Normalization applied to original text before keying
pub fn normalize_original(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Per-run surrogate cache
#[derive(Debug, Default)]
pub struct SurrogateRegistry {
    entries: HashMap<RegistryKey, String>,
}

impl SurrogateRegistry {
    /// Create an empty registry for a new run
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached surrogate for `key`, or invoke `producer`, store
    /// its result and return it.
    ///
    /// The producer runs at most once per key per run; a producer error
    /// leaves no entry behind.
    pub fn resolve<F>(&mut self, key: RegistryKey, producer: F) -> Result<String>
    where
        F: FnOnce() -> Result<String>,
    {
        if let Some(existing) = self.entries.get(&key) {
            return Ok(existing.clone());
        }
        let surrogate = producer()?;
        self.entries.insert(key, surrogate.clone());
        Ok(surrogate)
    }

    /// Number of distinct resolved keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no key has been resolved yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::PlainsightError;

    #[test]
    fn test_resolve_caches_first_result() {
        let mut registry = SurrogateRegistry::new();
        let key = RegistryKey::new("<PERSOON>", PhiType::PersonName);

        let first = registry
            .resolve(key.clone(), || Ok("Jan de Vries".to_string()))
            .unwrap();
        let second = registry
            .resolve(key, || Ok("iets anders".to_string()))
            .unwrap();

        assert_eq!(first, "Jan de Vries");
        assert_eq!(second, "Jan de Vries");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_different_types_are_distinct_keys() {
        let mut registry = SurrogateRegistry::new();
        let name_key = RegistryKey::new("<X>", PhiType::PersonName);
        let city_key = RegistryKey::new("<X>", PhiType::Location);

        registry
            .resolve(name_key, || Ok("naam".to_string()))
            .unwrap();
        registry
            .resolve(city_key, || Ok("stad".to_string()))
            .unwrap();

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_normalization_folds_case_and_whitespace() {
        assert_eq!(normalize_original("  <PERSOON> "), "<persoon>");
        assert_eq!(
            RegistryKey::new("<PERSOON>", PhiType::PersonName),
            RegistryKey::new(" <persoon>", PhiType::PersonName)
        );
    }

    #[test]
    fn test_normalization_preserves_diacritics() {
        assert_ne!(normalize_original("Bénédicte"), normalize_original("Benedicte"));
    }

    #[test]
    fn test_producer_error_leaves_no_entry() {
        let mut registry = SurrogateRegistry::new();
        let key = RegistryKey::new("<BSN>", PhiType::Bsn);

        let result = registry.resolve(key.clone(), || {
            Err(PlainsightError::Generation("empty pool".to_string()))
        });
        assert!(result.is_err());
        assert!(registry.is_empty());

        let retry = registry.resolve(key, || Ok("123456782".to_string()));
        assert_eq!(retry.unwrap(), "123456782");
    }
}
