//! Lexicon-based polarity and the five-bucket sentiment distribution.

use super::distribution::Distribution;
use super::taxonomy::SENTIMENT_LABELS;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::{Display, EnumIter};
use tracing::debug;

const LEXICON_DATA: &str = include_str!("../../data/sentiment_lexicon.tsv");

static LEXICON: Lazy<HashMap<String, f64>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for line in LEXICON_DATA.lines() {
        if line.starts_with('#') {
            continue;
        }
        if let Some((word, valence)) = line.split_once('\t') {
            if let Ok(v) = valence.trim().parse::<f64>() {
                map.insert(word.trim().to_lowercase(), v);
            }
        }
    }
    debug!("Sentiment lexicon loaded: {} entries", map.len());
    map
});

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "none", "nobody", "nothing", "neither", "nor", "cannot", "cant",
    "can't", "dont", "don't", "doesnt", "doesn't", "didnt", "didn't", "isnt", "isn't", "wasnt",
    "wasn't", "arent", "aren't", "werent", "weren't", "wont", "won't", "wouldnt", "wouldn't",
    "shouldnt", "shouldn't", "couldnt", "couldn't", "aint", "ain't", "without", "hardly",
];

const BOOSTERS: &[&str] = &[
    "absolutely", "amazingly", "completely", "deeply", "especially", "extremely", "fully",
    "greatly", "highly", "hugely", "incredibly", "insanely", "really", "so", "super", "totally",
    "truly", "very", "most", "more",
];

const DAMPENERS: &[&str] = &[
    "barely", "kinda", "kindof", "less", "little", "marginally", "partly", "slightly",
    "somewhat", "sorta",
];

const BOOST_STEP: f64 = 0.293;
const CAPS_STEP: f64 = 0.733;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Anything that can rate a sentence on the [-1, 1] compound scale.
pub trait PolarityScorer {
    fn compound(&self, text: &str) -> f64;
}

/// Valence-lexicon scorer with negation, intensifier, contrast and
/// exclamation handling.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconPolarity;

impl LexiconPolarity {
    pub fn lexicon_size(&self) -> usize {
        LEXICON.len()
    }

    pub fn valence(&self, word: &str) -> Option<f64> {
        LEXICON.get(&word.to_lowercase()).copied()
    }
}

struct Token<'a> {
    raw: &'a str,
    lower: String,
}

fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'' && c != '-'))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(|raw| Token {
            raw,
            lower: raw.to_lowercase(),
        })
        .collect()
}

fn is_shouting(raw: &str) -> bool {
    raw.chars().any(char::is_alphabetic) && !raw.chars().any(char::is_lowercase)
}

impl PolarityScorer for LexiconPolarity {
    fn compound(&self, text: &str) -> f64 {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return 0.0;
        }

        // Emphasis only counts when the text is not shouting throughout.
        let shouting = tokens.iter().filter(|t| is_shouting(t.raw)).count();
        let mixed_case = shouting > 0 && shouting < tokens.len();

        let mut valences = vec![0.0; tokens.len()];
        for (i, token) in tokens.iter().enumerate() {
            let Some(&base) = LEXICON.get(&token.lower) else {
                continue;
            };
            let mut v = base;

            if mixed_case && is_shouting(token.raw) {
                v += CAPS_STEP * v.signum();
            }

            for distance in 1..=3 {
                let Some(prev) = i.checked_sub(distance).map(|j| &tokens[j]) else {
                    break;
                };
                let decay = match distance {
                    1 => 1.0,
                    2 => 0.95,
                    _ => 0.9,
                };
                if BOOSTERS.contains(&prev.lower.as_str()) {
                    v += BOOST_STEP * decay * v.signum();
                } else if DAMPENERS.contains(&prev.lower.as_str()) {
                    v -= BOOST_STEP * decay * v.signum();
                }
                if NEGATIONS.contains(&prev.lower.as_str()) || prev.lower.ends_with("n't") {
                    v *= NEGATION_SCALAR;
                }
            }

            valences[i] = v;
        }

        // Contrast: the clause after "but" dominates the one before it.
        if let Some(pivot) = tokens.iter().position(|t| t.lower == "but") {
            for (i, v) in valences.iter_mut().enumerate() {
                if i < pivot {
                    *v *= 0.5;
                } else if i > pivot {
                    *v *= 1.5;
                }
            }
        }

        let mut sum: f64 = valences.iter().sum();
        if sum != 0.0 {
            let bangs = text.matches('!').count().min(MAX_EXCLAMATIONS) as f64;
            sum += bangs * EXCLAMATION_STEP * sum.signum();
        }

        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        compound.clamp(-1.0, 1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display, Serialize, Deserialize)]
pub enum SentimentBucket {
    #[strum(serialize = "Very Positive")]
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    #[strum(serialize = "Very Negative")]
    VeryNegative,
}

impl SentimentBucket {
    pub fn from_compound(compound: f64) -> Self {
        if compound >= 0.5 {
            Self::VeryPositive
        } else if compound >= 0.1 {
            Self::Positive
        } else if compound > -0.1 {
            Self::Neutral
        } else if compound > -0.5 {
            Self::Negative
        } else {
            Self::VeryNegative
        }
    }

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        SENTIMENT_LABELS[self.index()]
    }
}

/// Sentiment distribution over non-blank mentions with the built-in lexicon.
pub fn analyze_sentiment<S: AsRef<str>>(texts: &[S]) -> Distribution {
    analyze_sentiment_with(texts, &LexiconPolarity)
}

/// Sentiment distribution with a caller-supplied polarity scorer.
/// Empty or all-blank input yields all zeros.
pub fn analyze_sentiment_with<S: AsRef<str>>(
    texts: &[S],
    scorer: &dyn PolarityScorer,
) -> Distribution {
    let mut counts = [0usize; SENTIMENT_LABELS.len()];
    let mut total = 0;

    for text in texts.iter().map(AsRef::as_ref) {
        if text.trim().is_empty() {
            continue;
        }
        let bucket = SentimentBucket::from_compound(scorer.compound(text));
        counts[bucket.index()] += 1;
        total += 1;
    }

    Distribution::from_counts(SENTIMENT_LABELS, &counts, total)
}
