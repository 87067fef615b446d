//! Metric sources: anything that can produce the five sub-metric readings
//! for a brand.

use crate::config::AnalysisConfig;
use crate::error::{ResonanceError, RsResult};
use crate::heuristics::audience::evenness;
use crate::heuristics::{analyze_mentions, HeuristicReport};
use crate::metrics::{round1, Metric, MetricScoreSet, MAX_METRIC_SCORE, MIN_METRIC_SCORE};
use crate::model::{AnalysisMode, AnalysisRequest};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::info;

// Mentions averaging this many words count as fully in-depth.
const DEPTH_SATURATION_WORDS: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricReading {
    pub score: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default)]
    pub key_insights: Vec<String>,
}

/// Readings keyed by metric name. Names are kept raw so the scorer can
/// report unknown or missing metrics itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricReadings(BTreeMap<String, MetricReading>);

impl MetricReadings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, metric: Metric, reading: MetricReading) {
        self.0.insert(metric.to_string(), reading);
    }

    pub fn get(&self, metric: Metric) -> Option<&MetricReading> {
        self.0.get(metric.to_string().as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn score_set(&self) -> MetricScoreSet {
        self.0
            .iter()
            .map(|(name, reading)| (name.as_str(), reading.score))
            .collect()
    }
}

pub trait MetricSource {
    fn mode(&self) -> AnalysisMode;

    fn generate(&self, request: &AnalysisRequest) -> RsResult<MetricReadings>;
}

/// Readings fixed up front, typically a saved model response.
#[derive(Debug, Clone)]
pub struct StaticMetricSource {
    readings: MetricReadings,
}

impl StaticMetricSource {
    pub fn new(readings: MetricReadings) -> Self {
        Self { readings }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let readings: MetricReadings = serde_json::from_str(&content)?;
        Ok(Self::new(readings))
    }
}

impl MetricSource for StaticMetricSource {
    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Ai
    }

    fn generate(&self, request: &AnalysisRequest) -> RsResult<MetricReadings> {
        info!("Using stored metric readings for '{}'", request.brand_name);
        Ok(self.readings.clone())
    }
}

/// Derives the five metrics from brand mentions through the heuristics
/// pipeline.
#[derive(Debug, Clone)]
pub struct HeuristicMetricSource {
    report: HeuristicReport,
}

impl HeuristicMetricSource {
    /// Runs the pipeline once up front; `generate` reuses the report.
    pub fn new<S: AsRef<str>>(mentions: &[S], config: &AnalysisConfig) -> Self {
        Self::from_report(analyze_mentions(mentions, config))
    }

    pub fn from_report(report: HeuristicReport) -> Self {
        Self { report }
    }

    pub fn report(&self) -> &HeuristicReport {
        &self.report
    }

    pub fn readings_from(report: &HeuristicReport) -> MetricReadings {
        let mut readings = MetricReadings::new();
        readings.insert(Metric::ConversationalDepth, conversational_depth(report));
        readings.insert(Metric::CommunitySpread, community_spread(report));
        readings.insert(Metric::EmotionalIntensity, emotional_intensity(report));
        readings.insert(Metric::IntentSignals, intent_signals(report));
        readings.insert(Metric::AdvocacyLanguage, advocacy_language(report));
        readings
    }
}

impl MetricSource for HeuristicMetricSource {
    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Hybrid
    }

    fn generate(&self, request: &AnalysisRequest) -> RsResult<MetricReadings> {
        let report = &self.report;
        if report.mention_count == 0 {
            return Err(ResonanceError::Validation(format!(
                "No usable mentions supplied for '{}'; hybrid analysis needs at least one non-blank mention",
                request.brand_name
            )));
        }
        Ok(Self::readings_from(report))
    }
}

fn clamp_score(value: f64) -> f64 {
    round1(value.clamp(MIN_METRIC_SCORE, MAX_METRIC_SCORE))
}

fn conversational_depth(report: &HeuristicReport) -> MetricReading {
    let score = clamp_score(report.mean_words / DEPTH_SATURATION_WORDS * 100.0);
    let named_topics = report.topics.iter().filter(|t| !t.words.is_empty()).count();

    let mut key_insights = vec![format!(
        "{} mentions averaging {:.1} words",
        report.mention_count, report.mean_words
    )];
    if let Some(top) = report
        .topics
        .iter()
        .filter(|t| !t.words.is_empty())
        .max_by(|a, b| a.weight.total_cmp(&b.weight))
    {
        key_insights.push(format!("Leading topic terms: {}", top.words.join(", ")));
    }

    MetricReading {
        score,
        reasoning: format!(
            "Mention length against a {} word saturation point; {} distinct topics surfaced",
            DEPTH_SATURATION_WORDS, named_topics
        ),
        key_insights,
    }
}

fn community_spread(report: &HeuristicReport) -> MetricReading {
    let axes = [
        &report.geography,
        &report.demographics.age_groups,
        &report.demographics.gender,
        &report.demographics.income_levels,
    ];
    let mean_evenness = axes.iter().map(|d| evenness(d)).sum::<f64>() / axes.len() as f64;

    let mut key_insights = Vec::new();
    if let Some((region, share)) = report.geography.dominant() {
        key_insights.push(format!("{} leads regional mentions at {:.1}%", region, share));
    }
    if let Some((age, share)) = report.demographics.age_groups.dominant() {
        key_insights.push(format!("Largest age group: {} ({:.1}%)", age, share));
    }

    MetricReading {
        score: clamp_score(mean_evenness * 100.0),
        reasoning: "Evenness of the regional and demographic spreads".to_string(),
        key_insights,
    }
}

fn emotional_intensity(report: &HeuristicReport) -> MetricReading {
    let very_positive = report.sentiment.get("Very Positive").unwrap_or(0.0);
    let very_negative = report.sentiment.get("Very Negative").unwrap_or(0.0);

    MetricReading {
        score: clamp_score(very_positive + very_negative),
        reasoning: "Share of mentions with strongly polarized sentiment".to_string(),
        key_insights: vec![
            format!("Very positive: {:.1}%", very_positive),
            format!("Very negative: {:.1}%", very_negative),
        ],
    }
}

fn intent_signals(report: &HeuristicReport) -> MetricReading {
    let intent = &report.intent;
    let stage = |label: &str| intent.categories.get(label).unwrap_or(0.0) / 100.0;

    // Awareness counts a third, consideration two thirds, conversion fully.
    let funnel_depth = (stage("awareness") + 2.0 * stage("consideration") + 3.0 * stage("conversion")) / 3.0;
    let score = if intent.matched == 0 {
        0.0
    } else {
        (intent.coverage() + funnel_depth) / 2.0 * 100.0
    };

    let key_insights = intent
        .key_phrases
        .iter()
        .filter(|(_, cues)| !cues.is_empty())
        .map(|(stage, cues)| format!("{} cues: {}", stage, cues.join(", ")))
        .collect();

    MetricReading {
        score: clamp_score(score),
        reasoning: format!(
            "{:.1}% of mentions carry a purchase-funnel cue; deeper stages weigh more",
            intent.coverage() * 100.0
        ),
        key_insights,
    }
}

fn advocacy_language(report: &HeuristicReport) -> MetricReading {
    let advocacy = &report.advocacy;
    let mut key_insights = vec![format!(
        "{:.1}% of mentions use advocacy language",
        advocacy.advocates_percentage
    )];
    if !advocacy.key_advocacy_phrases.is_empty() {
        key_insights.push(format!(
            "Advocate phrases: {}",
            advocacy.key_advocacy_phrases.join("; ")
        ));
    }

    MetricReading {
        score: clamp_score(advocacy.strength),
        reasoning: "Advocate share blended with the sentiment of advocate mentions".to_string(),
        key_insights,
    }
}
