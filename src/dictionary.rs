//! User dictionary: household-specific name → category overrides.
//!
//! The classifier consults a [`UserDictionary`] before its own tables. The
//! port is optional; [`NoDictionary`] stands in when none is configured.
//! [`MemoryDictionary`] is the bundled implementation, persisted as TOML:
//!
//! ```toml
//! [entries]
//! "卵" = "卵・乳製品"
//! "おでん鍋セット" = "加工食品"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DictionaryError, DictionaryResult};

/// Read-only category lookup consulted first by the classifier.
///
/// Errors never abort an extraction; the classifier logs them and treats the
/// lookup as a miss.
pub trait UserDictionary: Send + Sync {
    fn lookup_category(&self, name: &str) -> DictionaryResult<Option<String>>;
}

/// The absent dictionary: every lookup misses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionary;

impl UserDictionary for NoDictionary {
    fn lookup_category(&self, _name: &str) -> DictionaryResult<Option<String>> {
        Ok(None)
    }
}

/// In-memory dictionary with TOML persistence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDictionary {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl MemoryDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, returning the previous category.
    pub fn insert(&mut self, name: impl Into<String>, category: impl Into<String>) -> Option<String> {
        self.entries.insert(name.into(), category.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.entries.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn from_toml(toml_str: &str) -> DictionaryResult<Self> {
        toml::from_str(toml_str).map_err(|e| DictionaryError::Parse {
            message: e.to_string(),
        })
    }

    pub fn to_toml(&self) -> DictionaryResult<String> {
        toml::to_string_pretty(self).map_err(|e| DictionaryError::Parse {
            message: e.to_string(),
        })
    }

    /// Load from `path`; a missing file yields an empty dictionary.
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::new()),
            Err(source) => Err(DictionaryError::Io {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    pub fn save(&self, path: &Path) -> DictionaryResult<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| DictionaryError::Io {
                path: parent.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| DictionaryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        tracing::info!(path = %path.display(), entries = self.len(), "user dictionary saved");
        Ok(())
    }
}

impl UserDictionary for MemoryDictionary {
    fn lookup_category(&self, name: &str) -> DictionaryResult<Option<String>> {
        Ok(self.entries.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_dictionary_always_misses() {
        assert_eq!(NoDictionary.lookup_category("牛乳").unwrap(), None);
    }

    #[test]
    fn insert_lookup_remove() {
        let mut dict = MemoryDictionary::new();
        assert_eq!(dict.insert("卵", "卵"), None);
        assert_eq!(dict.insert("卵", "その他"), Some("卵".to_string()));
        assert_eq!(dict.lookup_category("卵").unwrap(), Some("その他".to_string()));
        assert_eq!(dict.remove("卵"), Some("その他".to_string()));
        assert!(dict.is_empty());
    }

    #[test]
    fn toml_round_trip() {
        let mut dict = MemoryDictionary::new();
        dict.insert("おでん鍋セット", "加工食品");
        dict.insert("卵", "卵");
        let text = dict.to_toml().unwrap();
        assert!(text.contains("[entries]"));
        assert_eq!(MemoryDictionary::from_toml(&text).unwrap(), dict);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(matches!(
            MemoryDictionary::from_toml("[entries\n"),
            Err(DictionaryError::Parse { .. })
        ));
    }
}
