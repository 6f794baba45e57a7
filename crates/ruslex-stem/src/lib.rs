//! Suffix-stripping rules that group Russian word forms by a crude root.
//!
//! This is deliberately not a real stemmer or lemmatizer: a fixed, ordered
//! table of endings is scanned top to bottom and the first match is stripped.
//! Table order is load-bearing — `ся` must beat the bare `я`, `ями` must beat
//! `ям` — so the rules live in a plain slice, never a hash lookup.
//!
//! # How it works
//! 1. Words of three characters or fewer pass through untouched.
//! 2. The `ер`/`р` alternation is checked ahead of the table.
//! 3. The first table ending that matches the tail and leaves at least two
//!    characters is stripped.
//! 4. Anything else (including non-Cyrillic input) comes back unchanged.
//!
//! # Example
//! ```rust
//! use ruslex_stem::{clean, stem};
//!
//! assert_eq!(clean("добро!".as_bytes()), "добро".as_bytes());
//! assert_eq!(stem("добрым".as_bytes()).as_ref(), "добр".as_bytes());
//! assert_eq!(stem("дом".as_bytes()).as_ref(), "дом".as_bytes());
//! ```
//!
//! For a runnable demo, see `cargo run -p ruslex-stem --example stem -- [word...]`.

use std::borrow::Cow;

use ruslex_utf8::{char_count, pop_last_char, prev_char_start};

/// Words of at most this many characters are never stripped.
///
/// Protects short closed-class words (`эти`, `или`, `к`) from losing their
/// only vowel.
pub const SHORT_WORD_CHARS: usize = 3;

/// Ordered ending table: `(ending, characters to strip)`.
///
/// First matching entry wins; stripping must leave at least two characters
/// or the scan moves on to the next rule.
const ENDINGS: &[(&str, usize)] = &[
    // verb and gerund endings
    ("ся", 2),
    ("сь", 2),
    ("ует", 3),
    ("уя", 2),
    ("ает", 3),
    ("яет", 3),
    ("ют", 2),
    ("ив", 2),
    // adjective and case endings
    ("ями", 3),
    ("ами", 3),
    ("ыми", 3),
    ("ими", 3),
    ("ым", 2),
    ("им", 2),
    ("ах", 2),
    ("ях", 2),
    ("ам", 2),
    ("ям", 2),
    ("ом", 2),
    ("ем", 2),
    ("ов", 2),
    ("ев", 2),
    ("ой", 2),
    ("ей", 2),
    ("ый", 2),
    ("ий", 2),
    ("ая", 2),
    ("яя", 2),
    ("ые", 2),
    ("ие", 2),
    ("ых", 2),
    ("их", 2),
    ("ую", 2),
    ("юю", 2),
    // single-character endings
    ("а", 1),
    ("я", 1),
    ("ы", 1),
    ("и", 1),
    ("о", 1),
    ("е", 1),
    ("у", 1),
    ("ю", 1),
    ("ь", 1),
    ("й", 1),
];

/// Trim leading and trailing ASCII punctuation from a raw token.
///
/// Runs on raw bytes before case folding. Multi-byte lead and continuation
/// bytes never classify as ASCII punctuation, so non-ASCII characters
/// (guillemets, dashes outside ASCII) survive intact. A token made entirely
/// of punctuation trims to empty; the bare `-` token is the driver's problem,
/// not this function's.
pub fn clean(raw: &[u8]) -> &[u8] {
    let mut start = 0;
    let mut end = raw.len();
    while end > start && raw[end - 1].is_ascii_punctuation() {
        end -= 1;
    }
    while start < end && raw[start].is_ascii_punctuation() {
        start += 1;
    }
    &raw[start..end]
}

/// Strip one recognized ending from a cleaned, lowercased word.
///
/// Total over arbitrary byte sequences: no matching ending means the word is
/// returned as-is. Borrows from the input except for the `ер` alternation,
/// which has to rebuild the word (`ядер` -> `ядр`, `вёдер` -> `вёдр`).
pub fn stem(word: &[u8]) -> Cow<'_, [u8]> {
    let len = char_count(word);
    if len <= SHORT_WORD_CHARS {
        return Cow::Borrowed(word);
    }

    if word.ends_with("ер".as_bytes()) {
        let mut stemmed = word.to_vec();
        pop_last_char(&mut stemmed);
        pop_last_char(&mut stemmed);
        stemmed.extend_from_slice("р".as_bytes());
        return Cow::Owned(stemmed);
    }

    for &(ending, strip) in ENDINGS {
        if word.ends_with(ending.as_bytes()) && len > strip + 1 {
            let mut end = word.len();
            for _ in 0..strip {
                end = prev_char_start(word, end);
            }
            return Cow::Borrowed(&word[..end]);
        }
    }

    Cow::Borrowed(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stem_str(word: &str) -> String {
        String::from_utf8(stem(word.as_bytes()).into_owned()).expect("utf8 stem")
    }

    #[test]
    fn trims_ascii_punctuation_both_ends() {
        assert_eq!(clean("продаются,".as_bytes()), "продаются".as_bytes());
        assert_eq!(clean("(слово)".as_bytes()), "слово".as_bytes());
        assert_eq!(clean(b"\"quoted!\""), b"quoted");
        assert_eq!(clean(b"---"), b"");
    }

    #[test]
    fn never_strips_non_ascii_bytes() {
        // Guillemets are U+00AB/U+00BB, outside the ASCII classifier.
        assert_eq!(clean("«тире»".as_bytes()), "«тире»".as_bytes());
    }

    #[test]
    fn keeps_short_words_whole() {
        for word in ["и", "к", "эти", "дом", "юля"] {
            assert_eq!(stem_str(word), word);
        }
    }

    #[test]
    fn applies_er_alternation_before_table() {
        assert_eq!(stem_str("ядер"), "ядр");
        assert_eq!(stem_str("вёдер"), "вёдр");
    }

    #[test]
    fn strips_first_matching_ending() {
        assert_eq!(stem_str("добрым"), "добр");
        assert_eq!(stem_str("людям"), "люд");
        assert_eq!(stem_str("добро"), "добр");
        assert_eq!(stem_str("полями"), "пол");
        assert_eq!(stem_str("разрывает"), "разрыв");
    }

    #[test]
    fn earlier_rule_beats_later_overlap() {
        // `продаются` ends with `ся` (strip 2) and with the bare `я`
        // (strip 1); the reflexive rule sits first and must win.
        assert_eq!(stem_str("продаются"), "продают");
        // Same for `ая` over `я`.
        assert_eq!(stem_str("молодая"), "молод");
    }

    #[test]
    fn skips_rules_that_leave_too_little() {
        // `нами` matches `ами` but stripping three of four characters would
        // leave a single letter, so the scan falls through to `и`.
        assert_eq!(stem_str("нами"), "нам");
    }

    #[test]
    fn leaves_unmatched_words_alone() {
        assert_eq!(stem_str("слон"), "слон");
        assert_eq!(stem_str("hello"), "hello");
        assert_eq!(stem_str("прекрасен"), "прекрасен");
    }

    #[test]
    fn stripping_reduces_by_rule_count() {
        for (word, strip) in [("добрым", 2), ("людям", 2), ("ыми", 0), ("полями", 3)] {
            let stemmed = stem(word.as_bytes());
            assert_eq!(
                char_count(&stemmed),
                char_count(word.as_bytes()) - strip,
                "word {word}"
            );
            assert!(char_count(&stemmed) >= 2);
        }
    }
}
