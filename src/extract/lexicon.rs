//! The lexicon: immutable tables of known names, categories and number words.
//!
//! A `Lexicon` is assembled once through [`LexiconBuilder`] and then shared
//! read-only (usually behind an `Arc`). All derived orderings the matchers
//! need are computed at build time:
//!
//! - known names sorted longest first (stable, so table order breaks ties)
//! - special overrides sorted longest first
//! - the keyword scan order: categories by descending keyword count, keywords
//!   by descending length
//! - protected names: known names that contain a split delimiter
//!
//! External definitions are read from TOML via [`LexiconFile`].

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{LexiconError, LexiconResult};
use super::script::char_len;
use super::tables;
use super::unit::Unit;

/// A known food or product name and its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub name: String,
    pub category: String,
    /// Lowercased `name`, for case-insensitive matching.
    pub(crate) folded: String,
}

impl LexiconEntry {
    fn new(name: &str, category: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            folded: name.to_lowercase(),
        }
    }
}

/// Keyword list for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryKeywords {
    pub category: String,
    pub keywords: Vec<String>,
}

/// A native-language number word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberWord {
    pub phrase: String,
    pub value: u32,
    /// Counter implied by the word itself ("にほん" → 本).
    pub unit: Option<Unit>,
}

/// Immutable lexicon shared by every extraction component.
#[derive(Debug, Clone)]
pub struct Lexicon {
    keywords: Vec<CategoryKeywords>,
    keyword_scan: Vec<CategoryKeywords>,
    entries: Vec<LexiconEntry>,
    index: HashMap<String, usize>,
    names_by_length: Vec<String>,
    protected: Vec<String>,
    specials: Vec<LexiconEntry>,
    numbers: Vec<NumberWord>,
    fillers: Vec<String>,
    default_category: String,
}

impl Lexicon {
    /// The built-in Japanese tables.
    pub fn default_japanese() -> Self {
        LexiconBuilder::japanese().build()
    }

    /// Keyword lists in insertion order.
    pub fn keywords(&self) -> &[CategoryKeywords] {
        &self.keywords
    }

    /// Keyword lists in scan order (most keywords first, longest keyword first).
    pub fn keyword_scan_order(&self) -> &[CategoryKeywords] {
        &self.keyword_scan
    }

    /// Known names in table order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// Known names, longest first; ties keep table order.
    pub fn names_by_length(&self) -> &[String] {
        &self.names_by_length
    }

    /// Entries in the same order as [`names_by_length`](Self::names_by_length).
    pub fn entries_by_length(&self) -> impl Iterator<Item = &LexiconEntry> {
        self.names_by_length
            .iter()
            .filter_map(|name| self.index.get(name).map(|&i| &self.entries[i]))
    }

    /// Known names that contain a split delimiter and must not be shredded.
    pub fn protected_names(&self) -> &[String] {
        &self.protected
    }

    /// Whether `name` is exactly a known name.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Canonical stored form of an exactly known name.
    pub fn known_name(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].name.as_str())
    }

    /// Dictionary category of an exactly known name.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.index.get(name).map(|&i| self.entries[i].category.as_str())
    }

    /// Special overrides, longest first.
    pub fn specials(&self) -> &[LexiconEntry] {
        &self.specials
    }

    pub fn numbers(&self) -> &[NumberWord] {
        &self.numbers
    }

    pub fn fillers(&self) -> &[String] {
        &self.fillers
    }

    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// All category names that appear anywhere in the lexicon, first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let all = self
            .keywords
            .iter()
            .map(|k| k.category.as_str())
            .chain(self.entries.iter().map(|e| e.category.as_str()))
            .chain(self.specials.iter().map(|e| e.category.as_str()))
            .chain(std::iter::once(self.default_category.as_str()));
        for category in all {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::default_japanese()
    }
}

/// Incremental lexicon construction.
///
/// Re-adding an existing name replaces its category but keeps its original
/// position, so table-order tie-breaks stay stable across extensions.
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    keywords: Vec<CategoryKeywords>,
    entries: Vec<LexiconEntry>,
    specials: Vec<LexiconEntry>,
    numbers: Vec<NumberWord>,
    fillers: Vec<String>,
    default_category: Option<String>,
}

impl LexiconBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A builder preloaded with the built-in Japanese tables.
    pub fn japanese() -> Self {
        let mut builder = Self::new();
        builder.default_category(tables::DEFAULT_CATEGORY);
        for (category, keywords) in tables::CATEGORY_KEYWORDS {
            builder.category(category, keywords.iter().copied());
        }
        for (name, category) in tables::FOOD_NAMES {
            builder.food(name, category);
        }
        for (name, category) in tables::SPECIAL_MATCHES {
            builder.special(name, category);
        }
        for &(phrase, value, unit) in tables::NUMBER_WORDS {
            builder.number(phrase, value, unit);
        }
        for filler in tables::FILLERS {
            builder.filler(filler);
        }
        builder
    }

    pub fn default_category(&mut self, category: &str) -> &mut Self {
        self.default_category = Some(category.to_string());
        self
    }

    /// Add keywords to a category, creating it at the end if new.
    pub fn category<'a>(
        &mut self,
        category: &str,
        keywords: impl IntoIterator<Item = &'a str>,
    ) -> &mut Self {
        let idx = match self.keywords.iter().position(|k| k.category == category) {
            Some(idx) => idx,
            None => {
                self.keywords.push(CategoryKeywords {
                    category: category.to_string(),
                    keywords: Vec::new(),
                });
                self.keywords.len() - 1
            }
        };
        let list = &mut self.keywords[idx].keywords;
        for keyword in keywords {
            if !keyword.is_empty() && !list.iter().any(|k| k == keyword) {
                list.push(keyword.to_string());
            }
        }
        self
    }

    pub fn food(&mut self, name: &str, category: &str) -> &mut Self {
        upsert_entry(&mut self.entries, name, category);
        self
    }

    pub fn special(&mut self, name: &str, category: &str) -> &mut Self {
        upsert_entry(&mut self.specials, name, category);
        self
    }

    pub fn number(&mut self, phrase: &str, value: u32, unit: Option<Unit>) -> &mut Self {
        match self.numbers.iter_mut().find(|n| n.phrase == phrase) {
            Some(existing) => {
                existing.value = value;
                existing.unit = unit;
            }
            None => self.numbers.push(NumberWord {
                phrase: phrase.to_string(),
                value,
                unit,
            }),
        }
        self
    }

    pub fn filler(&mut self, filler: &str) -> &mut Self {
        if !self.fillers.iter().any(|f| f == filler) {
            self.fillers.push(filler.to_string());
        }
        self
    }

    /// Merge an external definition, validating it first.
    pub fn apply(&mut self, file: &LexiconFile) -> LexiconResult<&mut Self> {
        file.validate()?;
        if let Some(category) = &file.default_category {
            self.default_category(category);
        }
        for def in &file.categories {
            self.category(&def.name, def.keywords.iter().map(String::as_str));
        }
        for def in &file.foods {
            self.food(&def.name, &def.category);
        }
        for def in &file.specials {
            self.special(&def.name, &def.category);
        }
        for def in &file.numbers {
            // validate() has already checked the unit token.
            let unit = def.unit.as_deref().and_then(Unit::parse);
            self.number(&def.phrase, def.value, unit);
        }
        for filler in &file.fillers {
            self.filler(filler);
        }
        Ok(self)
    }

    /// Freeze into an immutable [`Lexicon`], computing the derived orderings.
    pub fn build(&self) -> Lexicon {
        let entries = self.entries.clone();
        let index: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.name.clone(), i))
            .collect();

        let mut names_by_length: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        names_by_length.sort_by_key(|name| std::cmp::Reverse(char_len(name)));

        let protected = names_by_length
            .iter()
            .filter(|name| name.chars().any(|c| c == 'と' || c.is_whitespace()))
            .cloned()
            .collect();

        let mut specials = self.specials.clone();
        specials.sort_by_key(|e| std::cmp::Reverse(char_len(&e.name)));

        let mut keyword_scan = self.keywords.clone();
        keyword_scan.sort_by_key(|k| std::cmp::Reverse(k.keywords.len()));
        for list in &mut keyword_scan {
            list.keywords.sort_by_key(|k| std::cmp::Reverse(char_len(k)));
        }

        Lexicon {
            keywords: self.keywords.clone(),
            keyword_scan,
            entries,
            index,
            names_by_length,
            protected,
            specials,
            numbers: self.numbers.clone(),
            fillers: self.fillers.clone(),
            default_category: self
                .default_category
                .clone()
                .unwrap_or_else(|| tables::DEFAULT_CATEGORY.to_string()),
        }
    }
}

fn upsert_entry(list: &mut Vec<LexiconEntry>, name: &str, category: &str) {
    match list.iter_mut().find(|e| e.name == name) {
        Some(existing) => existing.category = category.to_string(),
        None => list.push(LexiconEntry::new(name, category)),
    }
}

// ---------------------------------------------------------------------------
// TOML definition
// ---------------------------------------------------------------------------

/// External lexicon definition, read from TOML.
///
/// ```toml
/// default_category = "その他"
/// fillers = ["とかも"]
///
/// [[categories]]
/// name = "飲料"
/// keywords = ["お茶", "ジュース"]
///
/// [[foods]]
/// name = "卵"
/// category = "卵"
///
/// [[numbers]]
/// phrase = "ひとたま"
/// value = 1
/// unit = "玉"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub default_category: Option<String>,
    #[serde(default)]
    pub fillers: Vec<String>,
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
    #[serde(default)]
    pub foods: Vec<EntryDef>,
    #[serde(default)]
    pub specials: Vec<EntryDef>,
    #[serde(default)]
    pub numbers: Vec<NumberDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryDef {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntryDef {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumberDef {
    pub phrase: String,
    pub value: u32,
    #[serde(default)]
    pub unit: Option<String>,
}

impl LexiconFile {
    pub fn from_toml(toml_str: &str) -> LexiconResult<Self> {
        toml::from_str(toml_str).map_err(|e| LexiconError::Parse {
            message: e.to_string(),
        })
    }

    pub fn load(path: &Path) -> LexiconResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Reject empty names, zero-valued number words and unknown unit tokens.
    pub fn validate(&self) -> LexiconResult<()> {
        if self.default_category.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(LexiconError::EmptyName { kind: "default category" });
        }
        if self.categories.iter().any(|c| c.name.trim().is_empty()) {
            return Err(LexiconError::EmptyName { kind: "category" });
        }
        if self
            .foods
            .iter()
            .any(|e| e.name.trim().is_empty() || e.category.trim().is_empty())
        {
            return Err(LexiconError::EmptyName { kind: "food" });
        }
        if self
            .specials
            .iter()
            .any(|e| e.name.trim().is_empty() || e.category.trim().is_empty())
        {
            return Err(LexiconError::EmptyName { kind: "special" });
        }
        if self.fillers.iter().any(|f| f.trim().is_empty()) {
            return Err(LexiconError::EmptyName { kind: "filler" });
        }
        for def in &self.numbers {
            if def.phrase.trim().is_empty() {
                return Err(LexiconError::EmptyName { kind: "number word" });
            }
            if def.value == 0 {
                return Err(LexiconError::ZeroValue {
                    phrase: def.phrase.clone(),
                });
            }
            if let Some(unit) = &def.unit {
                if Unit::parse(unit).is_none() {
                    return Err(LexiconError::UnknownUnit {
                        phrase: def.phrase.clone(),
                        unit: unit.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
