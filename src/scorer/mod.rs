pub mod category;
pub mod types;

pub use self::category::ScoreCategory;
pub use self::types::{MetricContribution, ScoreSummary};
use crate::error::RsResult;
use crate::metrics::{round1, MetricScoreSet, MetricWeights, ValidatedScores};
use std::cmp::Ordering;
use tracing::debug;

/// Weighted resonance scorer over the five sub-metrics.
#[derive(Debug, Clone)]
pub struct ResonanceScorer {
    weights: MetricWeights,
}

impl ResonanceScorer {
    pub fn new() -> RsResult<Self> {
        Self::with_weights(MetricWeights::STANDARD)
    }

    pub fn with_weights(weights: MetricWeights) -> RsResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &MetricWeights {
        &self.weights
    }

    /// Overall score in [0, 100], rounded to one decimal.
    pub fn calculate_score(&self, metrics: &MetricScoreSet) -> RsResult<f64> {
        let scores = metrics.validate()?;
        let raw = self.weighted_sum(&scores);
        debug!("Weighted resonance sum: {:.4}", raw);
        Ok(round1(raw))
    }

    /// Per-metric contributions, highest contribution first.
    pub fn get_metric_breakdown(&self, metrics: &MetricScoreSet) -> RsResult<Vec<MetricContribution>> {
        let scores = metrics.validate()?;
        let overall = round1(self.weighted_sum(&scores));

        let mut breakdown: Vec<MetricContribution> = self
            .weights
            .iter()
            .map(|(metric, weight)| {
                let score = scores.get(metric);
                let contribution = score * weight;
                let percentage_of_total = if overall > 0.0 {
                    round1(contribution / overall * 100.0)
                } else {
                    0.0
                };
                MetricContribution {
                    name: metric,
                    score,
                    weight,
                    contribution,
                    percentage_of_total,
                }
            })
            .collect();

        // Stable sort keeps declaration order among equal contributions.
        breakdown.sort_by(|a, b| {
            b.contribution
                .partial_cmp(&a.contribution)
                .unwrap_or(Ordering::Equal)
        });
        Ok(breakdown)
    }

    pub fn get_score_category(&self, score: f64) -> (&'static str, &'static str) {
        let category = ScoreCategory::from_score(score);
        (category.into(), category.description())
    }

    /// Score, category and breakdown in one validated pass.
    pub fn summarize(&self, metrics: &MetricScoreSet) -> RsResult<ScoreSummary> {
        let overall_score = self.calculate_score(metrics)?;
        let breakdown = self.get_metric_breakdown(metrics)?;
        let category = ScoreCategory::from_score(overall_score);

        Ok(ScoreSummary {
            overall_score,
            category: category.to_string(),
            category_description: category.description().to_string(),
            breakdown,
        })
    }

    fn weighted_sum(&self, scores: &ValidatedScores) -> f64 {
        self.weights
            .iter()
            .map(|(metric, weight)| scores.get(metric) * weight)
            .sum()
    }
}
