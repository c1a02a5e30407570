//! Text normalization
//!
//! Turns raw text into the lowercase, single-space separated token stream
//! that every later stage works on. Punctuation that sits directly before a
//! word character is dropped so that contractions and abbreviations stay in
//! one token ("don't" -> "dont", "U.S.A" -> "usa").
//!
//! Word characters are ASCII letters, digits and underscore. Any other
//! character, accented letters included, separates tokens.

use regex::Regex;
use std::sync::LazyLock;

/// `? . ! " '` directly followed by a word character
static JOINING_PUNCT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[?.!"']([A-Za-z0-9_])"#).expect("joining punctuation pattern is valid")
});

/// Any maximal run of non-word characters
static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").expect("non-word pattern is valid"));

/// Normalizes raw text into a token stream
#[derive(Debug, Clone, Copy, Default)]
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }

    /// Clean and lowercase `text`, leaving tokens separated by single spaces
    pub fn normalize(&self, text: &str) -> String {
        // The capture keeps the word character; only the punctuation goes.
        let joined = JOINING_PUNCT.replace_all(text, "$1");
        let spaced = NON_WORD_RUN.replace_all(&joined, " ");
        spaced.trim().to_lowercase()
    }

    /// Normalize `text` and split it into tokens.
    ///
    /// Empty or punctuation-only input yields no tokens.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.normalize(text)
            .split(' ')
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_collapses_punctuation() {
        let n = Normalizer::new();
        assert_eq!(
            n.normalize("  Hello,   World!  How are   you?  "),
            "hello world how are you"
        );
    }

    #[test]
    fn test_merges_contractions_and_abbreviations() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("Don't stop"), "dont stop");
        assert_eq!(n.normalize("the U.S.A. team"), "the usa team");
        assert_eq!(n.normalize("say \"hi\" now"), "say hi now");
    }

    #[test]
    fn test_punctuation_before_non_word_is_kept_as_separator() {
        let n = Normalizer::new();
        // Only the second dot touches a word character.
        assert_eq!(n.normalize("a..b"), "a b");
        assert_eq!(n.normalize("end. Next"), "end next");
    }

    #[test]
    fn test_other_punctuation_splits_words() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("graph-based ranking"), "graph based ranking");
        assert_eq!(n.normalize("a,b;c"), "a b c");
    }

    #[test]
    fn test_empty_and_punctuation_only_input() {
        let n = Normalizer::new();
        assert!(n.tokenize("").is_empty());
        assert!(n.tokenize("  ?! ... ").is_empty());
        assert_eq!(n.normalize("   "), "");
    }

    #[test]
    fn test_non_ascii_letters_split_words() {
        let n = Normalizer::new();
        assert_eq!(n.normalize("Café crème"), "caf cr me");
        assert_eq!(n.tokenize("naïve"), vec!["na", "ve"]);
        // An accented letter is not a word character, so the quote stays.
        assert_eq!(n.normalize("l'été"), "l t");
    }

    #[test]
    fn test_tokenize() {
        let n = Normalizer::new();
        assert_eq!(
            n.tokenize("The quick, brown fox."),
            vec!["the", "quick", "brown", "fox"]
        );
    }
}
