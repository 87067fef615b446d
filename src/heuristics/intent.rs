use super::distribution::Distribution;
use super::taxonomy::INTENT;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Purchase-funnel stage distribution plus the cue words that placed
/// mentions in each stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSignals {
    pub categories: Distribution,
    pub key_phrases: BTreeMap<String, Vec<String>>,
    // Non-blank mentions that carried any intent cue
    pub matched: usize,
    pub scanned: usize,
}

impl IntentSignals {
    /// Share of scanned mentions with an intent cue, 0..=1.
    pub fn coverage(&self) -> f64 {
        if self.scanned == 0 {
            0.0
        } else {
            self.matched as f64 / self.scanned as f64
        }
    }
}

pub fn detect_intent_signals<S: AsRef<str>>(texts: &[S]) -> Distribution {
    analyze_intent(texts).categories
}

pub fn analyze_intent<S: AsRef<str>>(texts: &[S]) -> IntentSignals {
    let tally = INTENT.tally(texts);
    let categories = INTENT.distribution_from(&tally);

    let key_phrases = INTENT
        .labels()
        .zip(tally.hits.iter())
        .map(|(label, hits)| {
            (
                label.to_string(),
                hits.iter().map(|k| k.to_string()).collect(),
            )
        })
        .collect();

    IntentSignals {
        categories,
        key_phrases,
        matched: tally.matched,
        scanned: tally.scanned,
    }
}
