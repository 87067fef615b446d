use crate::metrics::Metric;
use serde::{Deserialize, Serialize};

/// One row of a score breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricContribution {
    pub name: Metric,
    pub score: f64,
    pub weight: f64,
    // Unrounded weight * score
    pub contribution: f64,
    // Share of the rounded overall score, one decimal
    pub percentage_of_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub overall_score: f64,
    pub category: String,
    pub category_description: String,
    pub breakdown: Vec<MetricContribution>,
}
