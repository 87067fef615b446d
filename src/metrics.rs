use crate::error::{ResonanceError, RsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

pub const METRIC_COUNT: usize = 5;
pub const MIN_METRIC_SCORE: f64 = 0.0;
pub const MAX_METRIC_SCORE: f64 = 100.0;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// The five resonance sub-metrics, in declaration order.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    ConversationalDepth,
    CommunitySpread,
    EmotionalIntensity,
    IntentSignals,
    AdvocacyLanguage,
}

impl Metric {
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::ConversationalDepth => "Conversational Depth",
            Self::CommunitySpread => "Community Spread",
            Self::EmotionalIntensity => "Emotional Intensity",
            Self::IntentSignals => "Intent Signals",
            Self::AdvocacyLanguage => "Advocacy Language",
        }
    }

    pub fn expected_names() -> String {
        Metric::iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Weight per metric, indexed by `Metric::index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricWeights([f64; METRIC_COUNT]);

impl MetricWeights {
    pub const STANDARD: MetricWeights = MetricWeights([0.10, 0.15, 0.20, 0.30, 0.25]);

    /// Builds a weight table, rejecting tables that do not sum to 1.0.
    pub fn new(weights: [f64; METRIC_COUNT]) -> RsResult<Self> {
        let table = Self(weights);
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> RsResult<()> {
        if let Some(m) = Metric::iter().find(|m| {
            let w = self.0[m.index()];
            !w.is_finite() || w < 0.0
        }) {
            return Err(ResonanceError::Configuration(format!(
                "Weight for {} must be a non-negative number, got {}",
                m,
                self.0[m.index()]
            )));
        }

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ResonanceError::Configuration(format!(
                "Metric weights must sum to 1.0, got {}",
                total
            )));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn get(&self, metric: Metric) -> f64 {
        self.0[metric.index()]
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::iter().map(move |m| (m, self.0[m.index()]))
    }
}

impl Default for MetricWeights {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Raw metric name -> score mapping as submitted by a metric source or a caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricScoreSet(BTreeMap<String, f64>);

impl MetricScoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, score: f64) -> Option<f64> {
        self.0.insert(name.into(), score)
    }

    pub fn with(mut self, metric: Metric, score: f64) -> Self {
        self.insert(metric.to_string(), score);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn remove(&mut self, name: &str) -> Option<f64> {
        self.0.remove(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Checks the set against the fixed metric table and returns the scores
    /// in declaration order.
    ///
    /// Missing metrics are reported before unknown ones, and both before
    /// range violations, so the first error always names a specific key.
    pub fn validate(&self) -> RsResult<ValidatedScores> {
        for metric in Metric::iter() {
            if !self.0.contains_key(metric.to_string().as_str()) {
                return Err(ResonanceError::MissingMetric {
                    metric: metric.to_string(),
                });
            }
        }

        for name in self.0.keys() {
            if name.parse::<Metric>().is_err() {
                return Err(ResonanceError::UnknownMetric {
                    metric: name.clone(),
                    expected: Metric::expected_names(),
                });
            }
        }

        let mut scores = [0.0; METRIC_COUNT];
        for metric in Metric::iter() {
            let name = metric.to_string();
            let value = self.0[name.as_str()];
            if !value.is_finite() || !(MIN_METRIC_SCORE..=MAX_METRIC_SCORE).contains(&value) {
                return Err(ResonanceError::MetricOutOfRange {
                    metric: name,
                    value,
                });
            }
            scores[metric.index()] = value;
        }

        Ok(ValidatedScores(scores))
    }
}

impl FromIterator<(Metric, f64)> for MetricScoreSet {
    fn from_iter<I: IntoIterator<Item = (Metric, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(m, s)| (m.to_string(), s)).collect())
    }
}

impl FromIterator<(String, f64)> for MetricScoreSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, f64)> for MetricScoreSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

/// Scores that passed validation, indexed by `Metric::index`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidatedScores([f64; METRIC_COUNT]);

impl ValidatedScores {
    #[inline(always)]
    pub fn get(&self, metric: Metric) -> f64 {
        self.0[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::iter().map(move |m| (m, self.0[m.index()]))
    }
}

/// Rounds to one decimal place, the precision every public score uses.
/// Exact halves go to the even neighbour (0.25 -> 0.2, 0.35 -> 0.4).
#[inline(always)]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
