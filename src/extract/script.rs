//! Character classes used by the segmenter and the name resolver.
//!
//! "Native" means the Japanese writing system: hiragana, katakana and CJK
//! ideographs, plus the two marks that only ever occur inside such words
//! (the prolonged sound mark `ー` and the iteration mark `々`).

/// Whether `c` is a letter of the native script.
pub fn is_native_letter(c: char) -> bool {
    matches!(
        c,
        // Hiragana (ぁ..ゖ)
        '\u{3041}'..='\u{3096}'
        // Katakana (ァ..ヺ), excluding the middle dot ・ at U+30FB
        | '\u{30A1}'..='\u{30FA}'
        // Prolonged sound mark
        | '\u{30FC}'
        // Iteration mark
        | '\u{3005}'
        // Katakana phonetic extensions (small ㇰ..ㇿ)
        | '\u{31F0}'..='\u{31FF}'
        // CJK unified ideographs + extension A
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
    )
}

/// Comma-equivalents that always separate items.
pub fn is_comma(c: char) -> bool {
    matches!(c, '、' | '，' | ',' | '。' | '；' | ';' | '\n')
}

/// Delimiter, punctuation, or whitespace.
pub fn is_delimiter(c: char) -> bool {
    c.is_whitespace() || is_comma(c) || c.is_ascii_punctuation() || matches!(c, '・' | '！' | '？')
}

/// A neighbouring character is a valid match boundary when it is absent,
/// a delimiter, or anything other than a native-script letter.
pub fn is_boundary(c: Option<char>) -> bool {
    match c {
        None => true,
        Some(c) => is_delimiter(c) || !is_native_letter(c),
    }
}

/// Whether every character of a non-empty string is a native-script letter.
pub fn is_all_native(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_native_letter)
}

/// Number of characters (not bytes) in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_letters() {
        assert!(is_native_letter('あ'));
        assert!(is_native_letter('ッ'));
        assert!(is_native_letter('ー'));
        assert!(is_native_letter('鍋'));
        assert!(!is_native_letter('・'));
        assert!(!is_native_letter('a'));
        assert!(!is_native_letter('2'));
    }

    #[test]
    fn boundaries() {
        assert!(is_boundary(None));
        assert!(is_boundary(Some(' ')));
        assert!(is_boundary(Some('、')));
        assert!(is_boundary(Some('3')));
        assert!(is_boundary(Some('N')));
        assert!(!is_boundary(Some('ん')));
    }

    #[test]
    fn all_native() {
        assert!(is_all_native("おでん鍋"));
        assert!(is_all_native("カレー"));
        assert!(!is_all_native("Puchitto鍋"));
        assert!(!is_all_native("鍋 2"));
        assert!(!is_all_native(""));
    }
}
