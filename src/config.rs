//! Runtime configuration, persisted as `config.toml`.
//!
//! Every key is optional:
//!
//! ```toml
//! lexicon_path = "/home/me/.config/reizoko/lexicon.toml"
//! dictionary_path = "/home/me/.local/share/reizoko/dictionary.toml"
//! pantry_path = "/home/me/.local/share/reizoko/pantry.json"
//! placeholder_name = "食材"
//! parallel_lookups = false
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dictionary::MemoryDictionary;
use crate::error::{ConfigError, ConfigResult, ReizokoResult};
use crate::extract::{DEFAULT_PLACEHOLDER, Extractor, LexiconBuilder, LexiconFile};
use crate::paths::ReizokoPaths;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReizokoConfig {
    /// TOML file extending the built-in lexicon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_path: Option<PathBuf>,
    /// User dictionary; defaults to `data_dir/dictionary.toml`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dictionary_path: Option<PathBuf>,
    /// Pantry file; defaults to `data_dir/pantry.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pantry_path: Option<PathBuf>,
    /// Name used when a number word leaves no ingredient name.
    #[serde(default = "default_placeholder_name")]
    pub placeholder_name: String,
    /// Run per-phrase lookups on the rayon pool.
    #[serde(default)]
    pub parallel_lookups: bool,
}

fn default_placeholder_name() -> String {
    DEFAULT_PLACEHOLDER.into()
}

impl Default for ReizokoConfig {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            dictionary_path: None,
            pantry_path: None,
            placeholder_name: default_placeholder_name(),
            parallel_lookups: false,
        }
    }
}

impl ReizokoConfig {
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load `path`, falling back to defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: parent.display().to_string(),
                source,
            })?;
        }
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn dictionary_file(&self, paths: &ReizokoPaths) -> PathBuf {
        self.dictionary_path
            .clone()
            .unwrap_or_else(|| paths.dictionary_file())
    }

    pub fn pantry_file(&self, paths: &ReizokoPaths) -> PathBuf {
        self.pantry_path.clone().unwrap_or_else(|| paths.pantry_file())
    }

    /// Assemble an extractor: the built-in lexicon plus the configured
    /// extension file, and the user dictionary if one is stored.
    pub fn build_extractor(&self, paths: &ReizokoPaths) -> ReizokoResult<Extractor> {
        let mut builder = LexiconBuilder::japanese();
        if let Some(lexicon_path) = &self.lexicon_path {
            let file = LexiconFile::load(lexicon_path)?;
            builder.apply(&file)?;
            tracing::info!(path = %lexicon_path.display(), "lexicon extension loaded");
        }
        let lexicon = builder.build();
        let dictionary = MemoryDictionary::load(&self.dictionary_file(paths))?;

        Ok(Extractor::new(Arc::new(lexicon))
            .with_dictionary(Arc::new(dictionary))
            .with_placeholder(self.placeholder_name.clone())
            .with_parallel_lookups(self.parallel_lookups))
    }
}
