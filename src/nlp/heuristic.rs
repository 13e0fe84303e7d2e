//! Built-in suffix-based tagger
//!
//! A lightweight stand-in for a statistical part-of-speech model. Tokens are
//! maximal runs of alphanumeric characters (plus interior apostrophes and
//! hyphens); classification looks at capitalization and common English
//! suffixes. Precision is modest, but the compressor only needs a coarse
//! content/non-content split.

use crate::nlp::stopwords::is_stop_word;
use crate::nlp::{PosClass, TaggedToken, Tagger};

/// Suffixes that mark adjectives. Checked after the adverb test.
const ADJECTIVE_SUFFIXES: &[&str] = &["able", "ible", "ful", "less", "ous", "ive", "ish", "est"];

/// Suffixes that mark verb forms (gerunds, past tense, derivational verbs).
const VERB_SUFFIXES: &[&str] = &["ing", "ed", "ize", "ise", "ify"];

/// The default tagger implementation
#[derive(Debug, Clone, Default)]
pub struct HeuristicTagger;

impl HeuristicTagger {
    pub fn new() -> Self {
        Self
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        tokenize(text)
            .into_iter()
            .map(|surface| {
                let lower = surface.to_lowercase();
                let pos = classify(&surface, &lower);
                let is_stop = is_stop_word(&lower);
                TaggedToken {
                    surface,
                    lower,
                    pos,
                    is_stop,
                }
            })
            .collect()
    }
}

/// Splits text into word tokens, dropping punctuation. Apostrophes and
/// hyphens survive only in token-interior positions ("don't", "re-use").
fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        if c.is_alphanumeric() || c == '\'' || c == '-' {
            current.push(c);
        } else if !current.is_empty() {
            push_token(&mut tokens, &current);
            current.clear();
        }
    }
    if !current.is_empty() {
        push_token(&mut tokens, &current);
    }

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let trimmed = raw.trim_matches(|c| c == '\'' || c == '-');
    if !trimmed.is_empty() {
        tokens.push(trimmed.to_string());
    }
}

/// Assigns a part-of-speech class from capitalization and suffix shape.
fn classify(surface: &str, lower: &str) -> PosClass {
    if lower.chars().any(|c| c.is_ascii_digit()) {
        return PosClass::Other;
    }

    if surface.chars().next().map_or(false, char::is_uppercase) {
        return PosClass::ProperNoun;
    }

    if lower.len() > 4 && lower.ends_with("ly") {
        return PosClass::Adverb;
    }

    for suffix in ADJECTIVE_SUFFIXES {
        if lower.len() > suffix.len() + 1 && lower.ends_with(suffix) {
            return PosClass::Adjective;
        }
    }

    for suffix in VERB_SUFFIXES {
        if lower.len() > suffix.len() + 1 && lower.ends_with(suffix) {
            return PosClass::Verb;
        }
    }

    PosClass::Noun
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag_one(text: &str) -> TaggedToken {
        let tokens = HeuristicTagger::new().tag(text);
        assert_eq!(tokens.len(), 1, "expected one token from {:?}", text);
        tokens.into_iter().next().unwrap()
    }

    #[test]
    fn test_tokenize_splits_on_punctuation() {
        let tokens = tokenize("Hello, world! foo.bar");
        assert_eq!(tokens, vec!["Hello", "world", "foo", "bar"]);
    }

    #[test]
    fn test_tokenize_keeps_interior_apostrophe() {
        let tokens = tokenize("don't stop");
        assert_eq!(tokens, vec!["don't", "stop"]);
    }

    #[test]
    fn test_tokenize_trims_edge_hyphens() {
        let tokens = tokenize("-draft- re-use");
        assert_eq!(tokens, vec!["draft", "re-use"]);
    }

    #[test]
    fn test_capitalized_token_is_proper_noun() {
        let token = tag_one("Helsinki");
        assert_eq!(token.pos, PosClass::ProperNoun);
        assert_eq!(token.lower, "helsinki");
    }

    #[test]
    fn test_gerund_is_verb() {
        assert_eq!(tag_one("running").pos, PosClass::Verb);
        assert_eq!(tag_one("jumped").pos, PosClass::Verb);
    }

    #[test]
    fn test_adjective_suffixes() {
        assert_eq!(tag_one("beautiful").pos, PosClass::Adjective);
        assert_eq!(tag_one("famous").pos, PosClass::Adjective);
        assert_eq!(tag_one("readable").pos, PosClass::Adjective);
    }

    #[test]
    fn test_adverb_suffix() {
        assert_eq!(tag_one("quickly").pos, PosClass::Adverb);
    }

    #[test]
    fn test_plain_word_is_noun() {
        assert_eq!(tag_one("fox").pos, PosClass::Noun);
        assert_eq!(tag_one("growth").pos, PosClass::Noun);
    }

    #[test]
    fn test_numeric_token_is_other() {
        assert_eq!(tag_one("2024").pos, PosClass::Other);
        assert_eq!(tag_one("v2").pos, PosClass::Other);
    }

    #[test]
    fn test_stop_word_flagged() {
        let token = tag_one("the");
        assert!(token.is_stop);
        assert!(!tag_one("fox").is_stop);
    }

    #[test]
    fn test_short_words_not_suffix_matched() {
        // "ed" and "fly" are too short for suffix rules to apply
        assert_eq!(tag_one("bed").pos, PosClass::Noun);
        assert_eq!(tag_one("fly").pos, PosClass::Noun);
    }
}
