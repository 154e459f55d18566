//! XDG-compliant path resolution for reizoko.
//!
//! Configuration lives in `$XDG_CONFIG_HOME/reizoko/`, the pantry and the
//! user dictionary in `$XDG_DATA_HOME/reizoko/`.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use thiserror::Error;

/// Errors from path resolution.
#[derive(Debug, Error, Diagnostic)]
pub enum PathError {
    #[error("cannot determine home directory")]
    #[diagnostic(
        code(reizoko::paths::no_home),
        help("Set the HOME environment variable, or pass --config and --data-dir explicitly.")
    )]
    NoHome,

    #[error("failed to create directory: {path}")]
    #[diagnostic(
        code(reizoko::paths::create_dir),
        help("Check that the parent directory exists and you have write permissions.")
    )]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type PathResult<T> = std::result::Result<T, PathError>;

const APP_DIR: &str = "reizoko";

/// Resolved directories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReizokoPaths {
    /// `$XDG_CONFIG_HOME/reizoko/`
    pub config_dir: PathBuf,
    /// `$XDG_DATA_HOME/reizoko/`
    pub data_dir: PathBuf,
}

impl ReizokoPaths {
    /// Resolve XDG directories from environment variables with standard fallbacks.
    pub fn resolve() -> PathResult<Self> {
        let home = std::env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| PathError::NoHome)?;

        let config_dir = std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".config"))
            .join(APP_DIR);

        let data_dir = std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| home.join(".local/share"))
            .join(APP_DIR);

        Ok(Self {
            config_dir,
            data_dir,
        })
    }

    /// Both directories rooted at one place; used by `--data-dir` and tests.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.to_path_buf(),
        }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn pantry_file(&self) -> PathBuf {
        self.data_dir.join("pantry.json")
    }

    pub fn dictionary_file(&self) -> PathBuf {
        self.data_dir.join("dictionary.toml")
    }

    /// Create both directories. Idempotent.
    pub fn ensure_dirs(&self) -> PathResult<()> {
        for dir in [&self.config_dir, &self.data_dir] {
            std::fs::create_dir_all(dir).map_err(|e| PathError::CreateDir {
                path: dir.display().to_string(),
                source: e,
            })?;
        }
        Ok(())
    }
}
