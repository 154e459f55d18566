//! Category inference through a fixed priority chain.
//!
//! 1. user dictionary (exact name)
//! 2. lexicon dictionary (exact name)
//! 3. special overrides (case-insensitive substring, longest override first)
//! 4. lexicon dictionary substring, either direction, longer string as haystack
//! 5. keyword scan
//! 6. default category

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;
use super::script::char_len;
use crate::dictionary::UserDictionary;

/// Which step of the chain decided the category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategorySource {
    UserDictionary,
    Dictionary,
    Special,
    DictionarySubstring,
    Keyword,
    Default,
}

impl std::fmt::Display for CategorySource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UserDictionary => write!(f, "user-dictionary"),
            Self::Dictionary => write!(f, "dictionary"),
            Self::Special => write!(f, "special"),
            Self::DictionarySubstring => write!(f, "dictionary-substring"),
            Self::Keyword => write!(f, "keyword"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// A category together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: String,
    pub source: CategorySource,
}

/// Minimum length of a name looked up inside longer dictionary entries.
/// A single character ("ね") would otherwise match half the dictionary.
const MIN_REVERSE_MATCH_CHARS: usize = 2;

/// Assigns categories; never fails.
pub struct CategoryClassifier<'a> {
    lexicon: &'a Lexicon,
    dictionary: &'a dyn UserDictionary,
}

impl<'a> CategoryClassifier<'a> {
    pub fn new(lexicon: &'a Lexicon, dictionary: &'a dyn UserDictionary) -> Self {
        Self { lexicon, dictionary }
    }

    pub fn classify(&self, name: &str) -> Classification {
        let classification = self.classify_inner(name);
        tracing::debug!(
            name,
            category = %classification.category,
            source = %classification.source,
            "classified"
        );
        classification
    }

    fn classify_inner(&self, name: &str) -> Classification {
        match self.dictionary.lookup_category(name) {
            Ok(Some(category)) => return hit(category, CategorySource::UserDictionary),
            Ok(None) => {}
            Err(e) => tracing::warn!(name, error = %e, "user dictionary lookup failed, treating as miss"),
        }

        if let Some(category) = self.lexicon.category_of(name) {
            return hit(category, CategorySource::Dictionary);
        }

        let folded = name.to_lowercase();

        if let Some(entry) = self
            .lexicon
            .specials()
            .iter()
            .find(|entry| folded.contains(entry.folded.as_str()))
        {
            return hit(&entry.category, CategorySource::Special);
        }

        let name_len = char_len(&folded);
        if let Some(entry) = self.lexicon.entries_by_length().find(|entry| {
            let entry_len = char_len(&entry.folded);
            if name_len >= entry_len {
                folded.contains(entry.folded.as_str())
            } else {
                name_len >= MIN_REVERSE_MATCH_CHARS && entry.folded.contains(folded.as_str())
            }
        }) {
            return hit(&entry.category, CategorySource::DictionarySubstring);
        }

        for list in self.lexicon.keyword_scan_order() {
            if list
                .keywords
                .iter()
                .any(|keyword| folded.contains(keyword.to_lowercase().as_str()))
            {
                return hit(&list.category, CategorySource::Keyword);
            }
        }

        hit(self.lexicon.default_category(), CategorySource::Default)
    }
}

fn hit(category: impl Into<String>, source: CategorySource) -> Classification {
    Classification {
        category: category.into(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{MemoryDictionary, NoDictionary};
    use crate::error::{DictionaryError, DictionaryResult};
    use crate::extract::lexicon::LexiconBuilder;

    struct FailingDictionary;

    impl UserDictionary for FailingDictionary {
        fn lookup_category(&self, name: &str) -> DictionaryResult<Option<String>> {
            Err(DictionaryError::Timeout {
                name: name.to_string(),
            })
        }
    }

    struct OfflineDictionary;

    impl UserDictionary for OfflineDictionary {
        fn lookup_category(&self, _name: &str) -> DictionaryResult<Option<String>> {
            Err(DictionaryError::Unavailable {
                message: "connection refused".to_string(),
            })
        }
    }

    fn classify(lex: &Lexicon, name: &str) -> Classification {
        CategoryClassifier::new(lex, &NoDictionary).classify(name)
    }

    #[test]
    fn exact_dictionary_hit() {
        let lex = Lexicon::default_japanese();
        let c = classify(&lex, "鶏肉");
        assert_eq!(c.category, "肉");
        assert_eq!(c.source, CategorySource::Dictionary);
    }

    #[test]
    fn user_dictionary_wins() {
        let lex = Lexicon::default_japanese();
        let mut dict = MemoryDictionary::new();
        dict.insert("鶏肉", "冷凍");
        let c = CategoryClassifier::new(&lex, &dict).classify("鶏肉");
        assert_eq!(c.category, "冷凍");
        assert_eq!(c.source, CategorySource::UserDictionary);
    }

    #[test]
    fn failing_user_dictionary_is_a_miss() {
        let lex = Lexicon::default_japanese();
        let c = CategoryClassifier::new(&lex, &FailingDictionary).classify("牛乳");
        assert_eq!(c.category, "乳製品");
        assert_eq!(c.source, CategorySource::Dictionary);
    }

    #[test]
    fn unavailable_user_dictionary_is_a_miss() {
        let lex = Lexicon::default_japanese();
        let dict = OfflineDictionary;
        let c = CategoryClassifier::new(&lex, &dict).classify("鶏肉");
        assert_eq!(c.category, "肉");
        assert_eq!(c.source, CategorySource::Dictionary);
        let c = CategoryClassifier::new(&lex, &dict).classify("卵");
        assert_eq!(c.source, CategorySource::Default);
    }

    #[test]
    fn special_override_beats_keyword_scan() {
        let lex = LexiconBuilder::new()
            .category("飲料", ["ミルク", "ティー"])
            .special("ミルク", "乳製品")
            .build();
        let c = classify(&lex, "ミルクティー");
        assert_eq!(c.category, "乳製品");
        assert_eq!(c.source, CategorySource::Special);
    }

    #[test]
    fn special_override_is_case_insensitive() {
        let lex = Lexicon::default_japanese();
        let c = classify(&lex, "PUCHITTO NABE キムチ");
        assert_eq!(c.category, "加工食品");
        assert_eq!(c.source, CategorySource::Special);
    }

    #[test]
    fn dictionary_substring_both_directions() {
        let lex = Lexicon::default_japanese();
        // Name contains a known name.
        let c = classify(&lex, "国産ブロッコリー");
        assert_eq!(c.category, "野菜");
        assert_eq!(c.source, CategorySource::DictionarySubstring);
        // Known name contains the (shorter) name.
        let c = classify(&lex, "ヨーグル");
        assert_eq!(c.category, "乳製品");
        assert_eq!(c.source, CategorySource::DictionarySubstring);
    }

    #[test]
    fn single_char_name_does_not_match_inside_entries() {
        let lex = Lexicon::default_japanese();
        let c = classify(&lex, "卵");
        assert_eq!(c.category, "その他");
        assert_eq!(c.source, CategorySource::Default);
    }

    #[test]
    fn keyword_scan_prefers_larger_categories() {
        let lex = LexiconBuilder::new()
            .category("small", ["ab"])
            .category("big", ["a", "x", "y"])
            .build();
        let c = classify(&lex, "ab");
        assert_eq!(c.category, "big");
        assert_eq!(c.source, CategorySource::Keyword);
    }

    #[test]
    fn keyword_scan_default_lexicon() {
        let lex = Lexicon::default_japanese();
        let c = classify(&lex, "さんまの開き");
        assert_eq!(c.category, "肉");
        assert_eq!(c.source, CategorySource::Keyword);
    }

    #[test]
    fn default_category() {
        let lex = Lexicon::default_japanese();
        let c = classify(&lex, "謎の物体");
        assert_eq!(c.category, "その他");
        assert_eq!(c.source, CategorySource::Default);
    }
}
