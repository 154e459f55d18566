//! Phrase segmentation: one utterance in, ordered item phrases out.
//!
//! The strategy chain:
//! 1. an utterance that is exactly a known name is returned whole;
//! 2. fillers ("とか") become commas, then the text is split on commas, the
//!    conjunction "と" and whitespace, never inside a protected known name;
//!    a bare quantity after whitespace ("にんじん 2本") stays with its name;
//! 3. if that leaves a single part, a greedy longest-prefix walk over the
//!    known names cuts unpunctuated speech-recognizer output apart.

use super::lexicon::Lexicon;
use super::quantity::kanji_numeral_prefix;
use super::script::{char_len, is_comma};
use super::unit::Unit;

/// The conjunction "and".
const CONJUNCTION: char = 'と';

/// Split an utterance into candidate item phrases, in order.
pub fn segment(utterance: &str, lexicon: &Lexicon) -> Vec<String> {
    let trimmed = utterance.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    if lexicon.contains(trimmed) {
        return vec![trimmed.to_string()];
    }

    let normalized = normalize_fillers(trimmed, lexicon);
    let parts: Vec<String> = split_delimited(&normalized, lexicon, |c| is_comma(c) || c == CONJUNCTION)
        .iter()
        .flat_map(|part| split_whitespace(part, lexicon))
        .collect();

    // Whitespace is already a delimiter above, so a second whitespace-only
    // split could not produce more parts; go straight to the greedy walk.
    match parts.as_slice() {
        [single] => greedy_walk(single, lexicon),
        _ => parts,
    }
}

/// Replace colloquial fillers with a comma, except inside a known name that
/// contains one.
fn normalize_fillers(text: &str, lexicon: &Lexicon) -> String {
    let fillers = lexicon.fillers();
    let protected = spans(
        text,
        lexicon
            .names_by_length()
            .iter()
            .map(String::as_str)
            .filter(|name| fillers.iter().any(|f| name.contains(f.as_str()))),
    );

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while let Some(c) = text[i..].chars().next() {
        let filler = fillers
            .iter()
            .filter(|f| text[i..].starts_with(f.as_str()))
            .max_by_key(|f| f.len());
        match filler {
            Some(f) if !protected.iter().any(|&(s, e)| s < i + f.len() && i < e) => {
                out.push('、');
                i += f.len();
            }
            _ => {
                out.push(c);
                i += c.len_utf8();
            }
        }
    }
    out
}

/// Byte ranges of every occurrence of `names` in `text`.
fn spans<'a>(text: &str, names: impl Iterator<Item = &'a str>) -> Vec<(usize, usize)> {
    names
        .flat_map(|name| {
            text.match_indices(name)
                .map(|(start, m)| (start, start + m.len()))
        })
        .collect()
}

/// Split on `is_delimiter`, skipping delimiters that fall inside an
/// occurrence of a protected known name or a number word.
fn split_delimited(text: &str, lexicon: &Lexicon, is_delimiter: impl Fn(char) -> bool) -> Vec<String> {
    // Number words like "ひとつ" contain the conjunction too. One that starts
    // with it ("とお") stays splittable, or "なすとおくら" would never split.
    let number_words = lexicon
        .numbers()
        .iter()
        .map(|w| w.phrase.as_str())
        .filter(|phrase| phrase.chars().skip(1).any(|c| c == CONJUNCTION));
    let protected = spans(
        text,
        lexicon
            .protected_names()
            .iter()
            .map(String::as_str)
            .chain(number_words),
    );
    let is_protected = |i: usize| protected.iter().any(|&(start, end)| start <= i && i < end);

    let mut parts = Vec::new();
    let mut start = 0;
    for (i, c) in text.char_indices() {
        if is_delimiter(c) && !is_protected(i) {
            push_part(&mut parts, &text[start..i]);
            start = i + c.len_utf8();
        }
    }
    push_part(&mut parts, &text[start..]);
    parts
}

/// Split one part on whitespace. A piece that is nothing but a quantity
/// clause ("2本", "みっつ") belongs to the piece before it.
fn split_whitespace(part: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut pieces: Vec<String> = Vec::new();
    for piece in split_delimited(part, lexicon, char::is_whitespace) {
        let quantity_only = quantity_clause_len(&piece, lexicon) == piece.len();
        match pieces.last_mut() {
            Some(previous) if quantity_only => previous.push_str(&piece),
            _ => pieces.push(piece),
        }
    }
    pieces
}

fn push_part(parts: &mut Vec<String>, part: &str) {
    let part = part.trim();
    if !part.is_empty() {
        parts.push(part.to_string());
    }
}

/// Repeatedly emit the longest known name prefixing the remainder, together
/// with a quantity clause directly following it. When no known name prefixes
/// the remainder, it is emitted whole and the walk stops.
fn greedy_walk(text: &str, lexicon: &Lexicon) -> Vec<String> {
    let mut phrases = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let Some(name) = longest_prefix(rest, lexicon) else {
            phrases.push(rest.to_string());
            break;
        };
        let end = name.len() + quantity_clause_len(&rest[name.len()..], lexicon);
        phrases.push(rest[..end].to_string());
        rest = rest[end..].trim_start();
    }

    phrases
}

/// Longest known name that prefixes `text`; equal lengths go to the name
/// listed first in the lexicon.
fn longest_prefix<'a>(text: &str, lexicon: &'a Lexicon) -> Option<&'a str> {
    lexicon
        .names_by_length()
        .iter()
        .map(String::as_str)
        .find(|name| text.starts_with(*name))
}

/// Byte length of a quantity clause at the start of `text`: digits followed
/// by a unit, or a number word (or kanji numeral run) with an optional unit.
fn quantity_clause_len(text: &str, lexicon: &Lexicon) -> usize {
    let digits = text
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.')
        .last()
        .map_or(0, |(i, c)| i + c.len_utf8());
    if text[..digits].contains(|c: char| c.is_ascii_digit()) {
        let unit = unit_prefix_len(&text[digits..], lexicon);
        return if unit > 0 { digits + unit } else { 0 };
    }

    let table = lexicon
        .numbers()
        .iter()
        .filter(|w| text.starts_with(w.phrase.as_str()))
        .min_by_key(|w| std::cmp::Reverse(char_len(&w.phrase)))
        .map(|w| w.phrase.len());
    let run = kanji_numeral_prefix(text).map(|(len, _)| len);
    let len = match (table, run) {
        (Some(t), Some(r)) if char_len(&text[..r]) > char_len(&text[..t]) => r,
        (Some(t), _) => t,
        (None, Some(r)) => r,
        (None, None) => return 0,
    };
    // A known name that starts here and is at least as long is not a number.
    if longest_prefix(text, lexicon).is_some_and(|name| char_len(name) >= char_len(&text[..len])) {
        return 0;
    }
    len + unit_prefix_len(&text[len..], lexicon)
}

/// Byte length of a unit token at the start of `text`, unless a longer known
/// name starts there ("玉ねぎ" is not the unit "玉").
fn unit_prefix_len(text: &str, lexicon: &Lexicon) -> usize {
    let Some((_, rest)) = Unit::strip_prefix(text) else {
        return 0;
    };
    let unit_len = text.len() - rest.len();
    match longest_prefix(text, lexicon) {
        Some(name) if name.len() > unit_len => 0,
        _ => unit_len,
    }
}
