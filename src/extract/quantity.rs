//! Quantity normalization: numeral + unit suffixes and native number words.

use serde::{Deserialize, Serialize};

use super::lexicon::Lexicon;
use super::script::char_len;
use super::unit::Unit;

/// Which strategy produced a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityStrategy {
    /// `<name><digits><unit>`
    Numeral,
    /// A native number word found in the phrase.
    NumberWord,
}

/// A phrase split into a name fragment and an explicit quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityParse {
    pub name: String,
    pub quantity: f64,
    pub unit: Unit,
    pub strategy: QuantityStrategy,
    /// The number word consumed the whole phrase and `name` is a placeholder.
    pub ambiguous: bool,
}

/// Try the numeral-suffix strategy, then the number-word strategy.
pub fn parse_quantity(phrase: &str, lexicon: &Lexicon, placeholder: &str) -> Option<QuantityParse> {
    parse_numeral_suffix(phrase).or_else(|| parse_number_word(phrase, lexicon, placeholder))
}

/// Match `<name><digits[.digits]><unit>` anchored at the end of `phrase`.
///
/// The name must be non-empty and the quantity strictly positive.
pub fn parse_numeral_suffix(phrase: &str) -> Option<QuantityParse> {
    let phrase = phrase.trim();
    let (rest, unit) = Unit::strip_suffix(phrase)?;
    let (name, quantity) = split_trailing_numeral(rest)?;
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(QuantityParse {
        name: name.to_string(),
        quantity,
        unit,
        strategy: QuantityStrategy::Numeral,
        ambiguous: false,
    })
}

/// Find the longest number word whose trailing remainder is empty or exactly
/// one unit token, and remove it from the phrase.
///
/// A run of kanji numerals ("二十", "百五") counts as one number word, so a
/// bare "十" never matches inside "二十". An explicit trailing unit token wins
/// over the unit a word implies.
pub fn parse_number_word(phrase: &str, lexicon: &Lexicon, placeholder: &str) -> Option<QuantityParse> {
    let phrase = phrase.trim();
    let found = find_number_word(phrase, lexicon)?;

    let name = phrase[..found.start].trim();
    let unit = found.explicit.or(found.implied).unwrap_or(Unit::DEFAULT);
    let ambiguous = name.is_empty();
    let name = if ambiguous { placeholder } else { name };

    Some(QuantityParse {
        name: name.to_string(),
        quantity: f64::from(found.value),
        unit,
        strategy: QuantityStrategy::NumberWord,
        ambiguous,
    })
}

/// An accepted number-word occurrence.
#[derive(Debug, Clone, Copy)]
struct NumberMatch {
    /// Byte offset in the phrase.
    start: usize,
    chars: usize,
    value: u32,
    implied: Option<Unit>,
    explicit: Option<Unit>,
}

/// Longest acceptable number-word occurrence; equal lengths go to the table
/// entry listed first, then to kanji numeral runs.
fn find_number_word(phrase: &str, lexicon: &Lexicon) -> Option<NumberMatch> {
    let mut best: Option<NumberMatch> = None;
    let mut offer = |candidate: NumberMatch| {
        if best.is_none_or(|b| candidate.chars > b.chars) {
            best = Some(candidate);
        }
    };

    for word in lexicon.numbers() {
        // Rightmost occurrence first: the quantity trails the name.
        for (start, _) in phrase.rmatch_indices(word.phrase.as_str()) {
            if starts_inside_numeral(phrase, start, &word.phrase) {
                continue;
            }
            if let Some(explicit) = tail_unit(&phrase[start + word.phrase.len()..]) {
                offer(NumberMatch {
                    start,
                    chars: char_len(&word.phrase),
                    value: word.value,
                    implied: word.unit,
                    explicit,
                });
                break;
            }
        }
    }

    for (start, end) in kanji_runs(phrase).into_iter().rev() {
        let Some(value) = kanji_value(&phrase[start..end]) else {
            continue;
        };
        if let Some(explicit) = tail_unit(&phrase[end..]) {
            offer(NumberMatch {
                start,
                chars: char_len(&phrase[start..end]),
                value,
                implied: None,
                explicit,
            });
            break;
        }
    }

    best
}

/// `Some(None)` for an empty tail, `Some(Some(unit))` for exactly one unit
/// token, `None` otherwise.
fn tail_unit(tail: &str) -> Option<Option<Unit>> {
    if tail.trim().is_empty() {
        Some(None)
    } else {
        Unit::parse(tail).map(Some)
    }
}

/// Whether a word starting with a kanji numeral continues a numeral run that
/// begins before `start`.
fn starts_inside_numeral(phrase: &str, start: usize, word: &str) -> bool {
    word.chars().next().is_some_and(is_kanji_numeral)
        && phrase[..start].chars().next_back().is_some_and(is_kanji_numeral)
}

pub(crate) fn is_kanji_numeral(c: char) -> bool {
    matches!(
        c,
        '一' | '二' | '三' | '四' | '五' | '六' | '七' | '八' | '九' | '十' | '百' | '千'
    )
}

/// Byte ranges of maximal kanji numeral runs, left to right.
fn kanji_runs(phrase: &str) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut open: Option<usize> = None;
    for (i, c) in phrase.char_indices() {
        match (is_kanji_numeral(c), open) {
            (true, None) => open = Some(i),
            (false, Some(start)) => {
                runs.push((start, i));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        runs.push((start, phrase.len()));
    }
    runs
}

/// Length in bytes and value of a kanji numeral run at the start of `text`.
pub(crate) fn kanji_numeral_prefix(text: &str) -> Option<(usize, u32)> {
    let len = text
        .char_indices()
        .take_while(|(_, c)| is_kanji_numeral(*c))
        .last()
        .map(|(i, c)| i + c.len_utf8())?;
    kanji_value(&text[..len]).map(|value| (len, value))
}

/// Value of a kanji numeral such as "二十", "十二" or "三百五". Multipliers
/// must descend and digits may not repeat ("二三" is not a number).
fn kanji_value(run: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut digit: Option<u32> = None;
    let mut last_multiplier = u32::MAX;

    for c in run.chars() {
        let multiplier = match c {
            '十' => 10,
            '百' => 100,
            '千' => 1000,
            _ => {
                if digit.is_some() {
                    return None;
                }
                digit = Some(kanji_digit(c)?);
                continue;
            }
        };
        if multiplier >= last_multiplier {
            return None;
        }
        total += digit.take().unwrap_or(1) * multiplier;
        last_multiplier = multiplier;
    }

    let value = total + digit.unwrap_or(0);
    (value > 0).then_some(value)
}

fn kanji_digit(c: char) -> Option<u32> {
    Some(match c {
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    })
}

/// Split `s` into a prefix and a trailing `digits[.digits]` numeral. A
/// leading dot reads as a decimal fraction (".5" is 0.5).
fn split_trailing_numeral(s: &str) -> Option<(&str, f64)> {
    let start = s
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map(|(i, _)| i)?;

    let numeral = &s[start..];
    if numeral.matches('.').count() > 1 || numeral.ends_with('.') {
        return None;
    }

    let quantity: f64 = if numeral.starts_with('.') {
        format!("0{numeral}").parse().ok()?
    } else {
        numeral.parse().ok()?
    };
    if quantity <= 0.0 || !quantity.is_finite() {
        return None;
    }
    Some((&s[..start], quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> Lexicon {
        Lexicon::default_japanese()
    }

    #[test]
    fn numeral_suffix() {
        let q = parse_numeral_suffix("鶏肉2枚").unwrap();
        assert_eq!(q.name, "鶏肉");
        assert_eq!(q.quantity, 2.0);
        assert_eq!(q.unit, Unit::Sheet);
        assert_eq!(q.strategy, QuantityStrategy::Numeral);
    }

    #[test]
    fn numeral_decimal_and_latin_units() {
        let q = parse_numeral_suffix("豚肉1.5kg").unwrap();
        assert_eq!(q.name, "豚肉");
        assert_eq!(q.quantity, 1.5);
        assert_eq!(q.unit, Unit::Kilogram);

        let q = parse_numeral_suffix("牛乳500ml").unwrap();
        assert_eq!(q.quantity, 500.0);
        assert_eq!(q.unit, Unit::Milliliter);
    }

    #[test]
    fn numeral_requires_name_and_positive_quantity() {
        assert!(parse_numeral_suffix("2個").is_none());
        assert!(parse_numeral_suffix("卵0個").is_none());
        assert!(parse_numeral_suffix("卵1.2.3個").is_none());
        assert!(parse_numeral_suffix("卵個").is_none());
        assert!(parse_numeral_suffix("玉ねぎ").is_none());
    }

    #[test]
    fn number_word_default_unit() {
        let lex = lexicon();
        let q = parse_number_word("玉ねぎみっつ", &lex, "食材").unwrap();
        assert_eq!(q.name, "玉ねぎ");
        assert_eq!(q.quantity, 3.0);
        assert_eq!(q.unit, Unit::Piece);
        assert!(!q.ambiguous);
    }

    #[test]
    fn number_word_longest_match_wins() {
        let lex = lexicon();
        // "三つ" must beat the bare "三" so the name is not "キャベツ三".
        let q = parse_number_word("キャベツ三つ", &lex, "食材").unwrap();
        assert_eq!(q.name, "キャベツ");
        assert_eq!(q.quantity, 3.0);
    }

    #[test]
    fn number_word_with_explicit_unit() {
        let lex = lexicon();
        let q = parse_number_word("卵二個", &lex, "食材").unwrap();
        assert_eq!(q.name, "卵");
        assert_eq!(q.quantity, 2.0);
        assert_eq!(q.unit, Unit::Piece);

        let q = parse_number_word("キャベツ一玉", &lex, "食材").unwrap();
        assert_eq!(q.unit, Unit::Head);
    }

    #[test]
    fn explicit_unit_beats_implied_unit() {
        let lex = lexicon();
        let q = parse_number_word("にんじんにほん", &lex, "食材").unwrap();
        assert_eq!(q.name, "にんじん");
        assert_eq!(q.unit, Unit::Stick);

        let q = parse_number_word("ねぎにほん袋", &lex, "食材").unwrap();
        assert_eq!(q.quantity, 2.0);
        assert_eq!(q.unit, Unit::Bag);
    }

    #[test]
    fn number_word_inside_a_name_is_ignored() {
        let lex = lexicon();
        // 三つ葉 is an herb, not "three leaves".
        assert!(parse_number_word("三つ葉", &lex, "食材").is_none());
        assert!(parse_number_word("にんじん", &lex, "食材").is_none());
    }

    #[test]
    fn kanji_numeral_runs_are_one_quantity() {
        let lex = lexicon();
        let q = parse_number_word("卵二十個", &lex, "食材").unwrap();
        assert_eq!(q.name, "卵");
        assert_eq!(q.quantity, 20.0);
        assert_eq!(q.unit, Unit::Piece);

        let q = parse_number_word("卵十二個", &lex, "食材").unwrap();
        assert_eq!(q.name, "卵");
        assert_eq!(q.quantity, 12.0);

        let q = parse_number_word("牛乳二十本", &lex, "食材").unwrap();
        assert_eq!(q.name, "牛乳");
        assert_eq!(q.quantity, 20.0);
        assert_eq!(q.unit, Unit::Stick);

        let q = parse_number_word("米三百五十", &lex, "食材").unwrap();
        assert_eq!(q.quantity, 350.0);
    }

    #[test]
    fn malformed_kanji_numerals_are_ignored() {
        assert_eq!(kanji_value("二三"), None);
        assert_eq!(kanji_value("十十"), None);
        assert_eq!(kanji_value("百千"), None);
        assert_eq!(kanji_value("千二百"), Some(1200));
        assert_eq!(kanji_numeral_prefix("十本"), Some(("十".len(), 10)));
        assert_eq!(kanji_numeral_prefix("本"), None);
    }

    #[test]
    fn leading_dot_is_a_fraction() {
        let q = parse_numeral_suffix("卵.5個").unwrap();
        assert_eq!(q.name, "卵");
        assert_eq!(q.quantity, 0.5);
        assert!(parse_numeral_suffix("卵..5個").is_none());
        assert!(parse_numeral_suffix("卵5.個").is_none());
    }

    #[test]
    fn bare_number_word_is_ambiguous() {
        let lex = lexicon();
        let q = parse_number_word("みっつ", &lex, "食材").unwrap();
        assert_eq!(q.name, "食材");
        assert_eq!(q.quantity, 3.0);
        assert!(q.ambiguous);
    }

    #[test]
    fn numeral_tried_before_number_word() {
        let lex = lexicon();
        let q = parse_quantity("卵10個", &lex, "食材").unwrap();
        assert_eq!(q.strategy, QuantityStrategy::Numeral);
        assert_eq!(q.quantity, 10.0);
        assert!(parse_quantity("牛乳", &lex, "食材").is_none());
    }
}
