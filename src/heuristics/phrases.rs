//! Noun-phrase chunking behind a narrow capability trait.

use super::stopwords::{is_determiner, is_stop_word, is_verb};

pub trait PhraseChunker {
    /// Noun phrases found in one sentence, in order of appearance.
    fn phrases_in(&self, sentence: &str) -> Vec<String>;
}

/// Shallow chunker: a phrase is a maximal run of content words, optionally
/// led by a determiner or possessive. Stop words, verbs and clause
/// punctuation end a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct StopwordChunker;

const CLAUSE_BREAKS: &[char] = &[',', ':', '(', ')', '"', '“', '”'];

impl PhraseChunker for StopwordChunker {
    fn phrases_in(&self, sentence: &str) -> Vec<String> {
        let mut phrases = Vec::new();
        let mut current: Vec<&str> = Vec::new();
        let mut content_words = 0;

        let mut flush = |current: &mut Vec<&str>, content_words: &mut usize| {
            if *content_words > 0 {
                phrases.push(current.join(" "));
            }
            current.clear();
            *content_words = 0;
        };

        for raw in sentence.split_whitespace() {
            let breaks_after = raw.ends_with(CLAUSE_BREAKS);
            let word = raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '-' && c != '\'');
            if word.is_empty() {
                if breaks_after {
                    flush(&mut current, &mut content_words);
                }
                continue;
            }

            let lower = word.to_lowercase();
            if is_determiner(&lower) {
                flush(&mut current, &mut content_words);
                current.push(word);
            } else if is_stop_word(&lower) || is_verb(&lower) {
                flush(&mut current, &mut content_words);
            } else {
                current.push(word);
                content_words += 1;
            }

            if breaks_after {
                flush(&mut current, &mut content_words);
            }
        }
        flush(&mut current, &mut content_words);

        phrases
    }
}

/// Splits free text into sentences on terminal punctuation and line breaks.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| matches!(c, '.' | '!' | '?' | ';' | '\n'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
