use super::phrases::{sentences, PhraseChunker, StopwordChunker};
use super::sentiment::{LexiconPolarity, PolarityScorer};
use super::taxonomy::{ADVOCACY, ADVOCACY_KEYWORDS};
use crate::config::AdvocacyParams;
use crate::metrics::round1;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvocacySignals {
    // Blend of advocate share and advocate sentiment, 0..=100
    pub strength: f64,
    pub advocates_percentage: f64,
    pub key_advocacy_phrases: Vec<String>,
}

impl AdvocacySignals {
    pub fn none() -> Self {
        Self {
            strength: 0.0,
            advocates_percentage: 0.0,
            key_advocacy_phrases: Vec::new(),
        }
    }
}

pub fn detect_advocacy<S: AsRef<str>>(texts: &[S]) -> AdvocacySignals {
    detect_advocacy_with(
        texts,
        &AdvocacyParams::default(),
        &LexiconPolarity,
        &StopwordChunker,
    )
}

pub fn detect_advocacy_with<S: AsRef<str>>(
    texts: &[S],
    params: &AdvocacyParams,
    polarity: &dyn PolarityScorer,
    chunker: &dyn PhraseChunker,
) -> AdvocacySignals {
    let mut scanned = 0usize;
    let mut advocate_texts: Vec<&str> = Vec::new();

    for text in texts.iter().map(AsRef::as_ref) {
        if text.trim().is_empty() {
            continue;
        }
        scanned += 1;
        if ADVOCACY.classify(&text.to_lowercase()).is_some() {
            advocate_texts.push(text);
        }
    }

    if advocate_texts.is_empty() {
        return AdvocacySignals::none();
    }

    let advocates_percentage = advocate_texts.len() as f64 / scanned as f64 * 100.0;

    let mean_compound = advocate_texts
        .iter()
        .map(|t| polarity.compound(t))
        .sum::<f64>()
        / advocate_texts.len() as f64;
    let sentiment_score = (mean_compound + 1.0) / 2.0 * 100.0;

    let strength = (advocates_percentage + sentiment_score) / 2.0;

    AdvocacySignals {
        strength: round1(strength),
        advocates_percentage: round1(advocates_percentage),
        key_advocacy_phrases: key_phrases(&advocate_texts, params, chunker),
    }
}

/// Noun phrases that carry an advocacy keyword, first-seen order, deduplicated.
fn key_phrases(texts: &[&str], params: &AdvocacyParams, chunker: &dyn PhraseChunker) -> Vec<String> {
    let mut phrases: Vec<String> = Vec::new();

    let candidates = texts
        .iter()
        .take(params.advocacy_text_limit)
        .flat_map(|t| sentences(t))
        .flat_map(|s| chunker.phrases_in(s));

    for phrase in candidates {
        if phrases.len() >= params.max_key_phrases {
            break;
        }
        let lower = phrase.to_lowercase();
        if ADVOCACY_KEYWORDS.iter().any(|k| lower.contains(k)) && !phrases.contains(&phrase) {
            phrases.push(phrase);
        }
    }
    phrases
}
