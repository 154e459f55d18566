// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # reizoko
//!
//! The language core of a talking-fridge pantry assistant: turns a spoken or
//! typed Japanese grocery utterance into structured ingredient records
//! (name, quantity, unit, category).
//!
//! ## Architecture
//!
//! - **Extraction** (`extract`): segmenter, quantity normalizer, name
//!   resolver and category classifier over an immutable `Lexicon`
//! - **User dictionary** (`dictionary`): household overrides consulted first
//! - **Pantry** (`pantry`): inventory merged by `(name, unit)`, stored as JSON
//! - **Configuration** (`config`, `paths`): XDG directories and `config.toml`
//!
//! ## Library usage
//!
//! ```
//! use std::sync::Arc;
//! use reizoko::extract::{Extractor, Lexicon};
//!
//! let extractor = Extractor::new(Arc::new(Lexicon::default_japanese()));
//! let result = extractor.extract("鶏肉2枚と玉ねぎみっつ、牛乳");
//! assert_eq!(result.ingredients.len(), 3);
//! assert_eq!(result.ingredients[1].quantity, 3.0);
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod pantry;
pub mod paths;
