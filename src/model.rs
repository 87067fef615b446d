use crate::heuristics::{AdvocacySignals, DemographicMix, Distribution, TopicSummary};
use crate::metrics::Metric;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum_macros::{Display, EnumString};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    // Metrics from a generative model
    #[default]
    Ai,
    // Metrics derived from mention heuristics
    Hybrid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: Uuid,
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Brand {
    pub fn new(name: impl Into<String>, industry: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            industry: industry.into(),
            description: None,
            logo_url: None,
            website: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub brand_name: String,
    pub industry: String,
    #[serde(default)]
    pub additional_context: Option<String>,
    #[serde(default)]
    pub mode: AnalysisMode,
}

impl AnalysisRequest {
    pub fn new(brand_name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            brand_name: brand_name.into(),
            industry: industry.into(),
            additional_context: None,
            mode: AnalysisMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub metric_name: Metric,
    pub score: f64,
    pub reasoning: String,
    pub key_insights: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

/// The scored payload served and persisted by outer layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResonanceResult {
    pub id: Uuid,
    pub brand_id: Uuid,
    pub brand_name: String,
    pub overall_score: f64,
    pub category: String,
    pub category_description: String,
    pub metrics: BTreeMap<Metric, MetricScore>,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub mode: AnalysisMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub id: Uuid,
    pub brands: Vec<String>,
    pub overall_scores: BTreeMap<String, f64>,
    pub metric_scores: BTreeMap<Metric, BTreeMap<String, f64>>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicAnalysis {
    pub brand_id: Uuid,
    pub topics: Vec<TopicSummary>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentDistribution {
    pub brand_id: Uuid,
    pub distribution: Distribution,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvocacyAnalysis {
    pub brand_id: Uuid,
    #[serde(flatten)]
    pub signals: AdvocacySignals,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeographicSpread {
    pub brand_id: Uuid,
    pub regions: Distribution,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicSpread {
    pub brand_id: Uuid,
    #[serde(flatten)]
    pub mix: DemographicMix,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentAnalysis {
    pub brand_id: Uuid,
    pub categories: Distribution,
    pub key_phrases: BTreeMap<String, Vec<String>>,
    pub timestamp: DateTime<Utc>,
}

/// Per-brand analysis records derived from one heuristic run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAnalyses {
    pub topics: TopicAnalysis,
    pub sentiment: SentimentDistribution,
    pub advocacy: AdvocacyAnalysis,
    pub geographic: GeographicSpread,
    pub demographic: DemographicSpread,
    pub intent: IntentAnalysis,
}
