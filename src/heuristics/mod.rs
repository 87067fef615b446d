//! Keyword and lexicon heuristics over free-text brand mentions.
//!
//! Every entry point is infallible: blank mentions are skipped, empty signal
//! falls back to the taxonomy default, and topic extraction failures degrade
//! to placeholders with a warning.

pub mod advocacy;
pub mod audience;
pub mod distribution;
pub mod intent;
pub mod phrases;
pub mod sentiment;
pub mod stopwords;
pub mod taxonomy;
pub mod topics;

pub use self::advocacy::{detect_advocacy, detect_advocacy_with, AdvocacySignals};
pub use self::audience::{extract_demographic_mentions, extract_geographic_mentions, DemographicMix};
pub use self::distribution::Distribution;
pub use self::intent::{analyze_intent, detect_intent_signals, IntentSignals};
pub use self::phrases::{PhraseChunker, StopwordChunker};
pub use self::sentiment::{
    analyze_sentiment, analyze_sentiment_with, LexiconPolarity, PolarityScorer, SentimentBucket,
};
pub use self::topics::{extract_topics, TopicSummary};

use crate::config::AnalysisConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Everything the pipeline derives from one batch of mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicReport {
    pub mention_count: usize,
    // Mean word count over non-blank mentions
    pub mean_words: f64,
    pub topics: Vec<TopicSummary>,
    pub sentiment: Distribution,
    pub intent: IntentSignals,
    pub advocacy: AdvocacySignals,
    pub geography: Distribution,
    pub demographics: DemographicMix,
}

/// Pluggable NLP capabilities used by the pipeline.
pub struct Pipeline<'a> {
    pub config: &'a AnalysisConfig,
    pub polarity: &'a dyn PolarityScorer,
    pub chunker: &'a dyn PhraseChunker,
}

impl<'a> Pipeline<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self {
            config,
            polarity: &LexiconPolarity,
            chunker: &StopwordChunker,
        }
    }

    pub fn with_polarity(mut self, polarity: &'a dyn PolarityScorer) -> Self {
        self.polarity = polarity;
        self
    }

    pub fn with_chunker(mut self, chunker: &'a dyn PhraseChunker) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn run<S: AsRef<str>>(&self, texts: &[S]) -> HeuristicReport {
        let non_blank: Vec<&str> = texts
            .iter()
            .map(AsRef::as_ref)
            .filter(|t| !t.trim().is_empty())
            .collect();
        info!(
            "Analyzing {} mentions ({} blank skipped)",
            non_blank.len(),
            texts.len() - non_blank.len()
        );

        let mean_words = if non_blank.is_empty() {
            0.0
        } else {
            non_blank
                .iter()
                .map(|t| t.split_whitespace().count())
                .sum::<usize>() as f64
                / non_blank.len() as f64
        };

        let report = HeuristicReport {
            mention_count: non_blank.len(),
            mean_words,
            topics: extract_topics(texts, &self.config.topics),
            sentiment: analyze_sentiment_with(texts, self.polarity),
            intent: analyze_intent(texts),
            advocacy: detect_advocacy_with(texts, &self.config.advocacy, self.polarity, self.chunker),
            geography: extract_geographic_mentions(texts),
            demographics: extract_demographic_mentions(texts),
        };

        debug!(
            "Pipeline done: advocacy strength {:.1}, intent coverage {:.2}",
            report.advocacy.strength,
            report.intent.coverage()
        );
        report
    }
}

/// Runs the whole pipeline with the built-in capabilities.
pub fn analyze_mentions<S: AsRef<str>>(texts: &[S], config: &AnalysisConfig) -> HeuristicReport {
    Pipeline::new(config).run(texts)
}
