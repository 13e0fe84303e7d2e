//! Token tagging capability
//!
//! The compressor needs, for every token of input text, its part-of-speech
//! class and stop-word status. That capability is modeled as the [`Tagger`]
//! trait so it can be injected: the built-in [`HeuristicTagger`] covers the
//! common case, and tests substitute a scripted fake for exact control over
//! tags.

mod heuristic;
mod stopwords;

pub use heuristic::HeuristicTagger;
pub use stopwords::is_stop_word;

/// Part-of-speech class assigned to a token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosClass {
    Noun,
    ProperNoun,
    Verb,
    Adjective,
    Adverb,
    Other,
}

impl PosClass {
    /// Whether tokens of this class carry enough content to be counted.
    /// Only nouns, proper nouns, and verbs rank in the frequency tables.
    pub fn is_content(self) -> bool {
        matches!(self, PosClass::Noun | PosClass::ProperNoun | PosClass::Verb)
    }
}

/// A single tagged token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    /// The token as it appeared in the text
    pub surface: String,

    /// Lowercased surface form, used as the aggregation key
    pub lower: String,

    /// Part-of-speech class
    pub pos: PosClass,

    /// Whether the lowercased form is a stop word
    pub is_stop: bool,
}

/// Tagging capability: splits text into tokens and annotates each with its
/// part-of-speech class and stop-word status.
pub trait Tagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}
