//! Text-to-ingredient extraction engine.
//!
//! Turns a free-form Japanese utterance ("鶏肉2枚と玉ねぎみっつ、牛乳") into
//! structured ingredient records.
//!
//! ## Architecture
//!
//! ```text
//! utterance ─→ NFKC ─→ segment ─→ per phrase: quantity ─→ resolve ─→ classify
//!                         │                       │           │          │
//!                      Lexicon                 Lexicon     Lexicon   Lexicon +
//!                 (names, fillers)         (number words)  (names)  UserDictionary
//! ```
//!
//! Extraction never fails. Unknown phrases pass through verbatim with the
//! default quantity, unit and category; a number word with no name left over
//! yields a placeholder name and is reported in
//! [`ExtractionDebug::degraded`].
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use reizoko::extract::{Extractor, Lexicon};
//!
//! let extractor = Extractor::new(Arc::new(Lexicon::default_japanese()));
//! let result = extractor.extract("鶏肉2枚");
//! assert_eq!(result.ingredients[0].name, "鶏肉");
//! assert_eq!(result.ingredients[0].unit, "枚");
//! ```

pub mod classify;
pub mod error;
pub mod lexicon;
pub mod quantity;
pub mod resolve;
pub mod script;
pub mod segment;
pub mod tables;
pub mod unit;

use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::dictionary::{NoDictionary, UserDictionary};

pub use classify::{CategoryClassifier, CategorySource, Classification};
pub use error::{LexiconError, LexiconResult};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconFile};
pub use quantity::{QuantityParse, QuantityStrategy};
pub use unit::Unit;

/// Name used when a number word leaves nothing else in the phrase.
pub const DEFAULT_PLACEHOLDER: &str = "食材";

/// One structured ingredient record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedIngredient {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    pub category: String,
}

/// Diagnostic trace of one extraction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionDebug {
    /// The utterance as received.
    pub original_text: String,
    /// Phrases produced by the segmenter, in order.
    pub parsed_items: Vec<String>,
    pub success_count: usize,
    /// Phrases whose name had to be replaced by the placeholder.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<String>,
}

/// Result of [`Extractor::extract`]. `success` is always true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    pub ingredients: Vec<ExtractedIngredient>,
    pub debug: ExtractionDebug,
}

/// Per-phrase outcome before assembly.
struct PhraseOutcome {
    ingredient: ExtractedIngredient,
    degraded: bool,
}

/// The extraction orchestrator.
///
/// Cheap to clone; the lexicon and the dictionary are shared.
#[derive(Clone)]
pub struct Extractor {
    lexicon: Arc<Lexicon>,
    dictionary: Arc<dyn UserDictionary>,
    placeholder: String,
    parallel: bool,
}

impl std::fmt::Debug for Extractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Extractor")
            .field("names", &self.lexicon.entries().len())
            .field("placeholder", &self.placeholder)
            .field("parallel", &self.parallel)
            .finish()
    }
}

impl Extractor {
    /// An extractor without a user dictionary.
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self {
            lexicon,
            dictionary: Arc::new(NoDictionary),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            parallel: false,
        }
    }

    pub fn with_dictionary(mut self, dictionary: Arc<dyn UserDictionary>) -> Self {
        self.dictionary = dictionary;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Process the phrases of one utterance on the rayon pool. Useful when
    /// the user dictionary is slow; output order is unaffected.
    pub fn with_parallel_lookups(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Extract ingredients from one utterance.
    pub fn extract(&self, utterance: &str) -> ExtractionResult {
        let normalized: String = utterance.nfkc().collect();
        let phrases = segment::segment(&normalized, &self.lexicon);
        tracing::debug!(?phrases, "segmented utterance");

        let outcomes: Vec<PhraseOutcome> = if self.parallel {
            phrases.par_iter().map(|p| self.extract_phrase(p)).collect()
        } else {
            phrases.iter().map(|p| self.extract_phrase(p)).collect()
        };

        let degraded = phrases
            .iter()
            .zip(&outcomes)
            .filter(|(_, o)| o.degraded)
            .map(|(p, _)| p.clone())
            .collect();
        let ingredients: Vec<ExtractedIngredient> =
            outcomes.into_iter().map(|o| o.ingredient).collect();

        tracing::debug!(count = ingredients.len(), "extraction complete");

        ExtractionResult {
            success: true,
            debug: ExtractionDebug {
                original_text: utterance.to_string(),
                parsed_items: phrases,
                success_count: ingredients.len(),
                degraded,
            },
            ingredients,
        }
    }

    /// Extract several utterances in parallel; results keep input order.
    pub fn extract_batch(&self, utterances: &[&str]) -> Vec<ExtractionResult> {
        utterances.par_iter().map(|u| self.extract(u)).collect()
    }

    /// Classify a single name with this extractor's lexicon and dictionary.
    pub fn classify(&self, name: &str) -> Classification {
        CategoryClassifier::new(&self.lexicon, self.dictionary.as_ref()).classify(name)
    }

    fn extract_phrase(&self, phrase: &str) -> PhraseOutcome {
        let lexicon = self.lexicon.as_ref();

        let (name, quantity, unit, degraded) =
            match quantity::parse_quantity(phrase, lexicon, &self.placeholder) {
                Some(q) if q.ambiguous => {
                    tracing::warn!(phrase, placeholder = %q.name, "number word left no name, using placeholder");
                    (q.name, q.quantity, q.unit, true)
                }
                Some(q) => {
                    let name = resolve::resolve(&q.name, lexicon)
                        .map(str::to_string)
                        .unwrap_or(q.name);
                    (name, q.quantity, q.unit, false)
                }
                None => {
                    let name = resolve::resolve(phrase, lexicon).unwrap_or(phrase);
                    (name.to_string(), 1.0, Unit::DEFAULT, false)
                }
            };

        let category = self.classify(&name).category;
        tracing::debug!(phrase, name = %name, quantity, unit = %unit, category = %category, "extracted");

        PhraseOutcome {
            ingredient: ExtractedIngredient {
                name,
                quantity,
                unit: unit.as_str().to_string(),
                category,
            },
            degraded,
        }
    }
}
