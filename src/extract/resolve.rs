//! Name resolution: map a phrase onto the most specific known name.
//!
//! Exact match first, then substring matches scanned longest name first.
//! A substring only counts when it does not cut through a word:
//!
//! - if the phrase and the name are both pure native script there are no
//!   word boundaries to check, so the name must sit at the start or the end
//!   of the phrase ("おでん鍋" yields "鍋", "おでん鍋セット" does not);
//! - otherwise both neighbouring characters must be valid boundaries
//!   (absent, a delimiter, or not a native-script letter).

use super::lexicon::Lexicon;
use super::script::{is_all_native, is_boundary};

/// Resolve `phrase` to a known name, or `None` when it is unrecognized.
pub fn resolve<'a>(phrase: &str, lexicon: &'a Lexicon) -> Option<&'a str> {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return None;
    }

    if let Some(name) = lexicon.known_name(phrase) {
        return Some(name);
    }

    let native_phrase = is_all_native(phrase);
    lexicon
        .names_by_length()
        .iter()
        .map(String::as_str)
        .find(|name| {
            let edge_only = native_phrase && is_all_native(name);
            phrase
                .match_indices(*name)
                .any(|(start, m)| accepts(phrase, start, start + m.len(), edge_only))
        })
}

fn accepts(phrase: &str, start: usize, end: usize, edge_only: bool) -> bool {
    if edge_only {
        return start == 0 || end == phrase.len();
    }
    let before = phrase[..start].chars().next_back();
    let after = phrase[end..].chars().next();
    is_boundary(before) && is_boundary(after)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::lexicon::LexiconBuilder;

    #[test]
    fn exact_match() {
        let lex = Lexicon::default_japanese();
        assert_eq!(resolve("玉ねぎ", &lex), Some("玉ねぎ"));
        assert_eq!(resolve("  牛乳 ", &lex), Some("牛乳"));
    }

    #[test]
    fn longest_name_wins() {
        let lex = LexiconBuilder::new().food("A", "x").food("AB", "x").build();
        assert_eq!(resolve("AB", &lex), Some("AB"));

        let lex = Lexicon::default_japanese();
        assert_eq!(resolve("プチッと鍋", &lex), Some("プチッと鍋"));
    }

    #[test]
    fn native_name_at_phrase_edge() {
        let lex = LexiconBuilder::new().food("鍋", "加工食品").build();
        assert_eq!(resolve("おでん鍋", &lex), Some("鍋"));
        assert_eq!(resolve("鍋つゆ", &lex), Some("鍋"));
    }

    #[test]
    fn native_name_in_interior_rejected() {
        let lex = LexiconBuilder::new().food("鍋", "加工食品").build();
        assert_eq!(resolve("おでん鍋セット", &lex), None);
    }

    #[test]
    fn mixed_script_requires_boundaries() {
        let lex = Lexicon::default_japanese();
        assert_eq!(resolve("new Puchitto Nabe 2", &lex), Some("Puchitto Nabe"));
        // Latin phrase around a native name: neighbours are non-native letters.
        assert_eq!(resolve("Xトマトy", &lex), Some("トマト"));

        let lex = LexiconBuilder::new().food("鍋", "加工食品").build();
        // The phrase is not pure native script, and "ん" is not a boundary.
        assert_eq!(resolve("おでん鍋 2", &lex), None);
        assert_eq!(resolve("おでん 鍋 2", &lex), Some("鍋"));
    }

    #[test]
    fn unknown_phrase() {
        let lex = Lexicon::default_japanese();
        assert_eq!(resolve("卵", &lex), None);
        assert_eq!(resolve("", &lex), None);
    }
}
