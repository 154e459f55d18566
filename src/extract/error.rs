//! Diagnostic errors for lexicon construction.
//!
//! Extraction itself never fails; only loading an external lexicon file can.

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while building a lexicon from an external definition.
#[derive(Debug, Error, Diagnostic)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {path}")]
    #[diagnostic(
        code(reizoko::lexicon::read),
        help("Check that the `lexicon_path` in config.toml points to a readable file.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse lexicon file: {message}")]
    #[diagnostic(
        code(reizoko::lexicon::parse),
        help(
            "The lexicon file must be TOML with optional `default_category`, `fillers`, \
             and arrays of tables `[[categories]]`, `[[foods]]`, `[[specials]]`, `[[numbers]]`."
        )
    )]
    Parse { message: String },

    #[error("empty {kind} name in lexicon definition")]
    #[diagnostic(
        code(reizoko::lexicon::empty_name),
        help("Every category, food, special override and number word needs a non-empty name.")
    )]
    EmptyName { kind: &'static str },

    #[error("number word \"{phrase}\" has value 0")]
    #[diagnostic(
        code(reizoko::lexicon::zero_value),
        help("Extracted quantities are always positive. Use a value of 1 or more.")
    )]
    ZeroValue { phrase: String },

    #[error("unknown unit token \"{unit}\" for number word \"{phrase}\"")]
    #[diagnostic(
        code(reizoko::lexicon::unknown_unit),
        help(
            "Units come from a fixed set: 個 枚 本 片 つ ヶ パック 入り 袋 缶 箱 玉 束 丁 \
             切れ 尾 房 株 人前 ml cc l リットル g kg."
        )
    )]
    UnknownUnit { phrase: String, unit: String },
}

/// Result type for lexicon operations.
pub type LexiconResult<T> = std::result::Result<T, LexiconError>;
