use crate::error::{ResonanceError, RsResult};
use crate::heuristics::HeuristicReport;
use crate::metrics::Metric;
use crate::model::{
    AdvocacyAnalysis, AnalysisRequest, BrandAnalyses, ComparisonResult, DemographicSpread,
    GeographicSpread, IntentAnalysis, MetricScore, ResonanceResult, SentimentDistribution,
    TopicAnalysis,
};
use crate::scorer::ResonanceScorer;
use crate::source::MetricSource;
use chrono::Utc;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;
use tracing::{debug, info};
use uuid::Uuid;

/// Service: Generate metric readings for a brand and score them.
pub fn analyze_brand(
    scorer: &ResonanceScorer,
    source: &dyn MetricSource,
    request: &AnalysisRequest,
    brand_id: Uuid,
) -> RsResult<ResonanceResult> {
    info!(
        "Analyzing '{}' ({}) in {} mode",
        request.brand_name,
        request.industry,
        source.mode()
    );

    let readings = source.generate(request)?;
    let summary = scorer.summarize(&readings.score_set())?;
    let timestamp = Utc::now();

    // The summary already validated that every metric is present.
    let metrics = Metric::iter()
        .filter_map(|metric| {
            readings.get(metric).map(|reading| {
                (
                    metric,
                    MetricScore {
                        metric_name: metric,
                        score: reading.score,
                        reasoning: reading.reasoning.clone(),
                        key_insights: reading.key_insights.clone(),
                        timestamp,
                    },
                )
            })
        })
        .collect();

    info!(
        "'{}' scored {:.1} ({})",
        request.brand_name, summary.overall_score, summary.category
    );

    Ok(ResonanceResult {
        id: Uuid::new_v4(),
        brand_id,
        brand_name: request.brand_name.clone(),
        overall_score: summary.overall_score,
        category: summary.category,
        category_description: summary.category_description,
        metrics,
        timestamp,
        mode: source.mode(),
    })
}

/// Service: Split one heuristic run into the per-brand analysis records.
pub fn build_brand_analyses(brand_id: Uuid, report: &HeuristicReport) -> BrandAnalyses {
    let timestamp = Utc::now();
    BrandAnalyses {
        topics: TopicAnalysis {
            brand_id,
            topics: report.topics.clone(),
            timestamp,
        },
        sentiment: SentimentDistribution {
            brand_id,
            distribution: report.sentiment.clone(),
            timestamp,
        },
        advocacy: AdvocacyAnalysis {
            brand_id,
            signals: report.advocacy.clone(),
            timestamp,
        },
        geographic: GeographicSpread {
            brand_id,
            regions: report.geography.clone(),
            timestamp,
        },
        demographic: DemographicSpread {
            brand_id,
            mix: report.demographics.clone(),
            timestamp,
        },
        intent: IntentAnalysis {
            brand_id,
            categories: report.intent.categories.clone(),
            key_phrases: report.intent.key_phrases.clone(),
            timestamp,
        },
    }
}

/// Service: Compare the most recent result of each brand.
///
/// Brands are listed in order of first appearance. Fails validation when
/// fewer than two distinct brands are present.
pub fn compare_results(results: &[ResonanceResult]) -> RsResult<ComparisonResult> {
    let mut order: Vec<&str> = Vec::new();
    let mut latest: BTreeMap<&str, &ResonanceResult> = BTreeMap::new();

    for result in results {
        let name = result.brand_name.as_str();
        match latest.get(name) {
            Some(current) if current.timestamp >= result.timestamp => {}
            Some(_) => {
                latest.insert(name, result);
            }
            None => {
                order.push(name);
                latest.insert(name, result);
            }
        }
    }

    if order.len() < 2 {
        return Err(ResonanceError::Validation(format!(
            "Comparison needs results for at least 2 brands, got {}",
            order.len()
        )));
    }
    debug!(
        "Comparing {} brands from {} results",
        order.len(),
        results.len()
    );

    let mut overall_scores = BTreeMap::new();
    let mut metric_scores: BTreeMap<Metric, BTreeMap<String, f64>> = BTreeMap::new();

    for name in &order {
        let result = latest[name];
        overall_scores.insert(name.to_string(), result.overall_score);
        for (metric, score) in &result.metrics {
            metric_scores
                .entry(*metric)
                .or_default()
                .insert(name.to_string(), score.score);
        }
    }

    Ok(ComparisonResult {
        id: Uuid::new_v4(),
        brands: order.iter().map(|n| n.to_string()).collect(),
        overall_scores,
        metric_scores,
        timestamp: Utc::now(),
    })
}
