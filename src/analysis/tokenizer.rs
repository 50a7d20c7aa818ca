//! Tokenizer for query and field text.
//!
//! One normalization pipeline is shared by the query side and the item side
//! so that tokens compare by exact string equality:
//!
//! 1. lower-case the text
//! 2. apply Unicode compatibility decomposition (NFKD) so precomposed
//!    accented and full-width forms match their decomposed equivalents
//! 3. replace every character that is not a word character, whitespace,
//!    hyphen, dot, or slash with a space
//! 4. split on runs of whitespace, dropping empty tokens
//!
//! The function is total and deterministic; empty input yields no tokens.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    static ref STRIP_PATTERN: Regex =
        Regex::new(r"[^\w\s\-./]").expect("strip pattern should be valid");
}

/// Produce normalized tokens from a text string.
pub fn tokenize(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lowered = text.to_lowercase();
    let decomposed: String = lowered.nfkd().collect();
    let stripped = STRIP_PATTERN.replace_all(&decomposed, " ");
    stripped
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_tokenization() {
        assert_eq!(tokenize("Hello, World!"), vec!["hello", "world"]);
    }

    #[test]
    fn test_preserved_characters() {
        // Hyphen, dot, and slash survive; underscores are word characters.
        assert_eq!(
            tokenize("v1.2.3-beta foo/bar snake_case"),
            vec!["v1.2.3-beta", "foo/bar", "snake_case"]
        );
    }

    #[test]
    fn test_punctuation_becomes_whitespace() {
        assert_eq!(tokenize("budget(Q3)+plan"), vec!["budget", "q3", "plan"]);
    }

    #[test]
    fn test_empty_and_blank_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("!!!").is_empty());
    }

    #[test]
    fn test_nfkd_unifies_composed_and_decomposed() {
        // "é" precomposed (U+00E9) vs decomposed (e + U+0301)
        assert_eq!(tokenize("Caf\u{00e9}"), tokenize("Cafe\u{0301}"));
    }

    #[test]
    fn test_nfkd_folds_fullwidth_forms() {
        assert_eq!(tokenize("\u{ff21}\u{ff22}\u{ff23}"), vec!["abc"]);
    }

    #[test]
    fn test_deterministic() {
        let text = "The quick brown fox";
        assert_eq!(tokenize(text), tokenize(text));
    }
}
