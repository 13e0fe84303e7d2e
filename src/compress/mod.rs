//! Frequency-based text compression
//!
//! Reduces extracted page text to the top-N most frequent content-bearing
//! words. Tokens are tagged by the injected [`Tagger`], filtered to nouns,
//! proper nouns, and verbs that are not stop words, and counted
//! case-insensitively under their lowercased form.

use crate::config::CompressionConfig;
use crate::crawler::PageRecord;
use crate::nlp::Tagger;
use serde::Serialize;
use std::collections::HashMap;

/// A ranked word with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Header content of a compressed page: either the full header texts or
/// their ranked word counts, depending on the `compress-headers` setting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HeaderSummary {
    Full(Vec<String>),
    Ranked(Vec<WordCount>),
}

/// The compressed representation of one crawled page
#[derive(Debug, Clone, Serialize)]
pub struct PageBrief {
    /// URL the page was fetched from
    pub url: String,

    /// Page title, empty if the page had none
    pub title: String,

    /// Header content, full or ranked per configuration
    pub headers: HeaderSummary,

    /// Ranked paragraph words, descending by count
    pub paragraphs: Vec<WordCount>,
}

/// Compresses text into ranked word counts using an injected tagger
pub struct TextCompressor<T: Tagger> {
    tagger: T,
}

impl<T: Tagger> TextCompressor<T> {
    pub fn new(tagger: T) -> Self {
        Self { tagger }
    }

    /// Returns the `limit` most frequent content words of `text`, descending
    /// by count. Ties are broken by first occurrence in the text: the
    /// counting pass records words in encounter order and the sort is
    /// stable, so an earlier word never ranks below a later one with the
    /// same count.
    pub fn top_words(&self, text: &str, limit: usize) -> Vec<WordCount> {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut counts: Vec<WordCount> = Vec::new();

        for token in self.tagger.tag(text) {
            if !token.pos.is_content() || token.is_stop {
                continue;
            }
            match index.get(&token.lower) {
                Some(&at) => counts[at].count += 1,
                None => {
                    index.insert(token.lower.clone(), counts.len());
                    counts.push(WordCount {
                        word: token.lower,
                        count: 1,
                    });
                }
            }
        }

        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(limit);
        counts
    }

    /// Compresses an extracted page into a [`PageBrief`]. Header and
    /// paragraph segments are joined with single spaces before tagging;
    /// headers stay verbatim when `compress-headers` is off.
    pub fn compress_page(
        &self,
        url: &str,
        record: &PageRecord,
        config: &CompressionConfig,
    ) -> PageBrief {
        let headers = if config.compress_headers {
            let header_text = record.headers.join(" ");
            HeaderSummary::Ranked(self.top_words(&header_text, config.header_word_limit))
        } else {
            HeaderSummary::Full(record.headers.clone())
        };

        let paragraph_text = record.paragraphs.join(" ");
        let paragraphs = self.top_words(&paragraph_text, config.paragraph_word_limit);

        PageBrief {
            url: url.to_string(),
            title: record.title.clone(),
            headers,
            paragraphs,
        }
    }
}

/// Renders crawled briefs into a single prompt-context string for the LLM.
pub fn render_context(briefs: &[PageBrief]) -> String {
    let mut out = String::from("Summary of the crawled website, as ranked word frequencies.\n");

    for brief in briefs {
        out.push('\n');
        if brief.title.is_empty() {
            out.push_str(&format!("Page: {}\n", brief.url));
        } else {
            out.push_str(&format!("Page: {} ({})\n", brief.title, brief.url));
        }

        match &brief.headers {
            HeaderSummary::Full(headers) => {
                if !headers.is_empty() {
                    out.push_str(&format!("Headers: {}\n", headers.join("; ")));
                }
            }
            HeaderSummary::Ranked(words) => {
                if !words.is_empty() {
                    out.push_str(&format!("Header terms: {}\n", render_words(words)));
                }
            }
        }

        if !brief.paragraphs.is_empty() {
            out.push_str(&format!(
                "Paragraph terms: {}\n",
                render_words(&brief.paragraphs)
            ));
        }
    }

    out
}

fn render_words(words: &[WordCount]) -> String {
    words
        .iter()
        .map(|w| format!("{} ({})", w.word, w.count))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::{HeuristicTagger, PosClass, TaggedToken};
    use std::collections::HashMap;

    /// Scripted tagger: whitespace tokenization with a lookup table for POS
    /// and stop-word status, defaulting to a non-stop noun.
    struct FakeTagger {
        table: HashMap<String, (PosClass, bool)>,
    }

    impl FakeTagger {
        fn new(entries: &[(&str, PosClass, bool)]) -> Self {
            let table = entries
                .iter()
                .map(|(word, pos, stop)| (word.to_string(), (*pos, *stop)))
                .collect();
            Self { table }
        }
    }

    impl Tagger for FakeTagger {
        fn tag(&self, text: &str) -> Vec<TaggedToken> {
            text.split_whitespace()
                .map(|surface| {
                    let lower = surface.to_lowercase();
                    let (pos, is_stop) = self
                        .table
                        .get(&lower)
                        .copied()
                        .unwrap_or((PosClass::Noun, false));
                    TaggedToken {
                        surface: surface.to_string(),
                        lower,
                        pos,
                        is_stop,
                    }
                })
                .collect()
        }
    }

    fn record(headers: &[&str], paragraphs: &[&str]) -> PageRecord {
        PageRecord {
            title: "Test".to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            paragraphs: paragraphs.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_counts_descending_and_bounded() {
        let compressor = TextCompressor::new(FakeTagger::new(&[]));
        let words = compressor.top_words("b a a c b a", 2);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0], WordCount { word: "a".into(), count: 3 });
        assert_eq!(words[1], WordCount { word: "b".into(), count: 2 });
    }

    #[test]
    fn test_case_insensitive_aggregation() {
        let compressor = TextCompressor::new(HeuristicTagger::new());
        let words = compressor.top_words("Data data DATA", 1);

        assert_eq!(words, vec![WordCount { word: "data".into(), count: 3 }]);
    }

    #[test]
    fn test_pos_and_stop_word_filter() {
        let tagger = FakeTagger::new(&[
            ("the", PosClass::Other, true),
            ("quick", PosClass::Adjective, false),
            ("brown", PosClass::Adjective, false),
            ("fox", PosClass::Noun, false),
            ("jumps", PosClass::Verb, false),
        ]);
        let compressor = TextCompressor::new(tagger);
        let words = compressor.top_words("The quick brown fox jumps", 10);

        let ranked: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(ranked, vec!["fox", "jumps"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let compressor = TextCompressor::new(FakeTagger::new(&[]));
        let words = compressor.top_words("zebra apple zebra apple mango", 10);

        // zebra and apple tie at 2; zebra appeared first
        let ranked: Vec<&str> = words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(ranked, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_empty_input_yields_empty() {
        let compressor = TextCompressor::new(HeuristicTagger::new());
        assert!(compressor.top_words("", 10).is_empty());
        assert!(compressor.top_words("words here", 0).is_empty());
    }

    #[test]
    fn test_compress_page_ranked_headers() {
        let compressor = TextCompressor::new(FakeTagger::new(&[]));
        let config = CompressionConfig {
            compress_headers: true,
            header_word_limit: 5,
            paragraph_word_limit: 5,
        };
        let record = record(&["alpha beta", "alpha"], &["gamma gamma delta"]);

        let brief = compressor.compress_page("https://example.com/", &record, &config);

        assert_eq!(
            brief.headers,
            HeaderSummary::Ranked(vec![
                WordCount { word: "alpha".into(), count: 2 },
                WordCount { word: "beta".into(), count: 1 },
            ])
        );
        assert_eq!(
            brief.paragraphs,
            vec![
                WordCount { word: "gamma".into(), count: 2 },
                WordCount { word: "delta".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_compress_page_full_headers() {
        let compressor = TextCompressor::new(FakeTagger::new(&[]));
        let config = CompressionConfig {
            compress_headers: false,
            header_word_limit: 5,
            paragraph_word_limit: 5,
        };
        let record = record(&["About Us", "Contact"], &[]);

        let brief = compressor.compress_page("https://example.com/", &record, &config);

        assert_eq!(
            brief.headers,
            HeaderSummary::Full(vec!["About Us".to_string(), "Contact".to_string()])
        );
        assert!(brief.paragraphs.is_empty());
    }

    #[test]
    fn test_segments_joined_with_spaces() {
        // Words at segment boundaries must not fuse together
        let compressor = TextCompressor::new(FakeTagger::new(&[]));
        let config = CompressionConfig {
            compress_headers: false,
            header_word_limit: 5,
            paragraph_word_limit: 5,
        };
        let record = record(&[], &["alpha", "alpha"]);

        let brief = compressor.compress_page("https://example.com/", &record, &config);
        assert_eq!(
            brief.paragraphs,
            vec![WordCount { word: "alpha".into(), count: 2 }]
        );
    }

    #[test]
    fn test_render_context_includes_pages_and_terms() {
        let brief = PageBrief {
            url: "https://example.com/".to_string(),
            title: "Example".to_string(),
            headers: HeaderSummary::Ranked(vec![WordCount { word: "news".into(), count: 4 }]),
            paragraphs: vec![WordCount { word: "growth".into(), count: 7 }],
        };

        let context = render_context(&[brief]);
        assert!(context.contains("Page: Example (https://example.com/)"));
        assert!(context.contains("Header terms: news (4)"));
        assert!(context.contains("Paragraph terms: growth (7)"));
    }
}
