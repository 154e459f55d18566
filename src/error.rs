//! Diagnostic error types for reizoko.
//!
//! Extraction itself is infallible. Errors come from the edges: loading a
//! lexicon file, consulting or persisting the user dictionary, mutating the
//! pantry, and reading configuration. Each subsystem has its own enum with
//! miette codes and help text.

use miette::Diagnostic;
use thiserror::Error;

pub use crate::extract::error::{LexiconError, LexiconResult};
pub use crate::paths::{PathError, PathResult};

/// Top-level error type, preserving each subsystem's diagnostic.
#[derive(Debug, Error, Diagnostic)]
pub enum ReizokoError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Dictionary(#[from] DictionaryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Pantry(#[from] PantryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Path(#[from] PathError),
}

// ---------------------------------------------------------------------------
// User dictionary errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum DictionaryError {
    #[error("user dictionary I/O failed: {path}")]
    #[diagnostic(
        code(reizoko::dictionary::io),
        help("Check that the dictionary file and its directory are readable and writable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed user dictionary: {message}")]
    #[diagnostic(
        code(reizoko::dictionary::parse),
        help(
            "The dictionary is TOML with a single `[entries]` table mapping \
             names to categories, e.g. `\"卵\" = \"卵・乳製品\"`."
        )
    )]
    Parse { message: String },

    #[error("user dictionary lookup timed out for \"{name}\"")]
    #[diagnostic(
        code(reizoko::dictionary::timeout),
        help("The lookup is treated as a miss; the built-in tables decide the category.")
    )]
    Timeout { name: String },

    #[error("user dictionary unavailable: {message}")]
    #[diagnostic(
        code(reizoko::dictionary::unavailable),
        help("The lookup is treated as a miss; the built-in tables decide the category.")
    )]
    Unavailable { message: String },
}

pub type DictionaryResult<T> = std::result::Result<T, DictionaryError>;

// ---------------------------------------------------------------------------
// Pantry errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum PantryError {
    #[error("pantry I/O failed: {path}")]
    #[diagnostic(
        code(reizoko::pantry::io),
        help("Check that the pantry file and its directory are readable and writable.")
    )]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("pantry serialization failed: {message}")]
    #[diagnostic(
        code(reizoko::pantry::serialization),
        help(
            "The pantry file may be corrupt. It is JSON of the form \
             `{{\"next_id\": n, \"items\": [...]}}`; move it aside to start empty."
        )
    )]
    Serialization { message: String },

    #[error("no pantry item matches {item}")]
    #[diagnostic(
        code(reizoko::pantry::not_found),
        help("List the pantry with `reizoko list` to see stored names and units.")
    )]
    NotFound { item: String },

    #[error("invalid quantity: {quantity}")]
    #[diagnostic(
        code(reizoko::pantry::invalid_quantity),
        help("Quantities must be finite and greater than zero.")
    )]
    InvalidQuantity { quantity: f64 },
}

pub type PantryResult<T> = std::result::Result<T, PantryError>;

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read config: {path}")]
    #[diagnostic(
        code(reizoko::config::read),
        help("Check that the file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    #[diagnostic(
        code(reizoko::config::parse),
        help(
            "config.toml accepts `lexicon_path`, `dictionary_path`, `pantry_path`, \
             `placeholder_name` and `parallel_lookups`. Check the TOML syntax."
        )
    )]
    Parse { message: String },

    #[error("failed to write config: {path}")]
    #[diagnostic(
        code(reizoko::config::write),
        help("Check that the config directory is writable.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience result alias using the top-level error.
pub type ReizokoResult<T> = std::result::Result<T, ReizokoError>;
