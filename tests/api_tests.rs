use chrono::{Duration, TimeZone, Utc};
use resonance::api::{analyze_brand, build_brand_analyses, compare_results};
use resonance::config::AnalysisConfig;
use resonance::error::ResonanceError;
use resonance::metrics::Metric;
use resonance::model::{AnalysisMode, AnalysisRequest, MetricScore, ResonanceResult};
use resonance::scorer::ResonanceScorer;
use resonance::source::{
    HeuristicMetricSource, MetricReading, MetricReadings, MetricSource, StaticMetricSource,
};
use std::io::Write;
use strum::IntoEnumIterator;
use tempfile::NamedTempFile;
use uuid::Uuid;

fn reading(score: f64) -> MetricReading {
    MetricReading {
        score,
        reasoning: format!("scored {}", score),
        key_insights: vec!["insight".to_string()],
    }
}

fn static_source(scores: [f64; 5]) -> StaticMetricSource {
    let mut readings = MetricReadings::new();
    for (metric, score) in Metric::iter().zip(scores) {
        readings.insert(metric, reading(score));
    }
    StaticMetricSource::new(readings)
}

fn stored_result(brand: &str, score: f64, minutes: i64) -> ResonanceResult {
    let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes);
    let metrics = Metric::iter()
        .map(|metric| {
            (
                metric,
                MetricScore {
                    metric_name: metric,
                    score,
                    reasoning: String::new(),
                    key_insights: Vec::new(),
                    timestamp,
                },
            )
        })
        .collect();

    ResonanceResult {
        id: Uuid::new_v4(),
        brand_id: Uuid::new_v4(),
        brand_name: brand.to_string(),
        overall_score: score,
        category: "Developing".to_string(),
        category_description: String::new(),
        metrics,
        timestamp,
        mode: AnalysisMode::Ai,
    }
}

// --- ANALYZE ---

#[test]
fn test_analyze_with_static_readings() {
    let scorer = ResonanceScorer::new().unwrap();
    let source = static_source([80.0, 70.0, 60.0, 50.0, 90.0]);
    let request = AnalysisRequest::new("Acme", "Consumer Electronics");
    let brand_id = Uuid::new_v4();

    let result = analyze_brand(&scorer, &source, &request, brand_id).unwrap();

    assert_eq!(result.brand_id, brand_id);
    assert_eq!(result.brand_name, "Acme");
    assert_eq!(result.overall_score, 68.0);
    assert_eq!(result.category, "Established");
    assert_eq!(result.mode, AnalysisMode::Ai);
    assert_eq!(result.metrics.len(), 5);

    let advocacy = &result.metrics[&Metric::AdvocacyLanguage];
    assert_eq!(advocacy.metric_name, Metric::AdvocacyLanguage);
    assert_eq!(advocacy.score, 90.0);
    assert_eq!(advocacy.reasoning, "scored 90");
    assert_eq!(advocacy.key_insights, vec!["insight"]);
}

#[test]
fn test_analyze_propagates_validation_errors() {
    let scorer = ResonanceScorer::new().unwrap();
    let source = static_source([80.0, 70.0, 160.0, 50.0, 90.0]);
    let request = AnalysisRequest::new("Acme", "Retail");

    let err = analyze_brand(&scorer, &source, &request, Uuid::new_v4()).unwrap_err();
    assert!(matches!(err, ResonanceError::MetricOutOfRange { .. }));
}

#[test]
fn test_static_source_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "conversational_depth": {{ "score": 40, "reasoning": "short threads" }},
            "community_spread": {{ "score": 40 }},
            "emotional_intensity": {{ "score": 40 }},
            "intent_signals": {{ "score": 40 }}
        }}"#
    )
    .unwrap();

    let source = StaticMetricSource::load_from_file(file.path()).unwrap();
    let readings = source
        .generate(&AnalysisRequest::new("Acme", "Retail"))
        .unwrap();
    assert_eq!(readings.len(), 4);
    assert_eq!(
        readings.get(Metric::ConversationalDepth).unwrap().reasoning,
        "short threads"
    );

    let scorer = ResonanceScorer::new().unwrap();
    let err = analyze_brand(&scorer, &source, &AnalysisRequest::new("Acme", "Retail"), Uuid::new_v4())
        .unwrap_err();
    assert!(
        matches!(err, ResonanceError::MissingMetric { ref metric } if metric == "advocacy_language")
    );
}

// --- HEURISTIC SOURCE ---

fn sample_mentions() -> Vec<&'static str> {
    vec![
        "I love Acme, honestly the best headphones I have owned and I recommend them to every student",
        "Thinking about Acme versus Zenith, is the price worth it?",
        "Just bought Acme in Germany, shipping was quick",
        "The worst customer service, I hate waiting",
        "My mom uses Acme at home in Canada",
    ]
}

#[test]
fn test_heuristic_source_scores_every_metric() {
    let source = HeuristicMetricSource::new(&sample_mentions(), &AnalysisConfig::default());
    assert_eq!(source.mode(), AnalysisMode::Hybrid);

    let readings = source
        .generate(&AnalysisRequest::new("Acme", "Audio"))
        .unwrap();
    assert_eq!(readings.len(), 5);
    for metric in Metric::iter() {
        let reading = readings.get(metric).unwrap();
        assert!(
            (0.0..=100.0).contains(&reading.score),
            "{} out of range: {}",
            metric,
            reading.score
        );
        assert!(!reading.reasoning.is_empty());
    }

    let scorer = ResonanceScorer::new().unwrap();
    assert!(scorer.calculate_score(&readings.score_set()).is_ok());
}

#[test]
fn test_heuristic_readings_follow_report() {
    let source = HeuristicMetricSource::new(&sample_mentions(), &AnalysisConfig::default());
    let report = source.report();
    let readings = HeuristicMetricSource::readings_from(report);

    let very_positive = report.sentiment.get("Very Positive").unwrap();
    let very_negative = report.sentiment.get("Very Negative").unwrap();
    let emotion = readings.get(Metric::EmotionalIntensity).unwrap().score;
    assert!((emotion - (very_positive + very_negative)).abs() < 0.051);

    let advocacy = readings.get(Metric::AdvocacyLanguage).unwrap().score;
    assert_eq!(advocacy, report.advocacy.strength);

    // 3 of 5 mentions carry an intent cue.
    assert_eq!(report.intent.matched, 3);
    assert!(readings.get(Metric::IntentSignals).unwrap().score > 0.0);
}

#[test]
fn test_heuristic_source_without_mentions_fails() {
    let source = HeuristicMetricSource::new(&["", "  "], &AnalysisConfig::default());
    let err = source
        .generate(&AnalysisRequest::new("Acme", "Audio"))
        .unwrap_err();
    assert!(matches!(err, ResonanceError::Validation(_)));
}

#[test]
fn test_hybrid_analysis_end_to_end() {
    let scorer = ResonanceScorer::new().unwrap();
    let source = HeuristicMetricSource::new(&sample_mentions(), &AnalysisConfig::default());
    let brand_id = Uuid::new_v4();

    let result = analyze_brand(&scorer, &source, &AnalysisRequest::new("Acme", "Audio"), brand_id)
        .unwrap();
    assert_eq!(result.mode, AnalysisMode::Hybrid);
    assert!((0.0..=100.0).contains(&result.overall_score));

    let analyses = build_brand_analyses(brand_id, source.report());
    assert_eq!(analyses.topics.brand_id, brand_id);
    assert_eq!(analyses.sentiment.distribution, source.report().sentiment);
    assert_eq!(analyses.geographic.regions.get("Europe"), Some(50.0));
    assert_eq!(analyses.geographic.regions.get("North America"), Some(50.0));
    assert_eq!(analyses.intent.categories, source.report().intent.categories);

    let json = serde_json::to_value(&analyses.advocacy).unwrap();
    assert!(json.get("strength").is_some());
    assert!(json.get("brand_id").is_some());
}

// --- COMPARE ---

#[test]
fn test_compare_two_brands() {
    let results = vec![stored_result("Acme", 55.0, 0), stored_result("Zenith", 72.5, 5)];
    let comparison = compare_results(&results).unwrap();

    assert_eq!(comparison.brands, vec!["Acme", "Zenith"]);
    assert_eq!(comparison.overall_scores["Acme"], 55.0);
    assert_eq!(comparison.overall_scores["Zenith"], 72.5);
    assert_eq!(comparison.metric_scores.len(), 5);
    assert_eq!(comparison.metric_scores[&Metric::IntentSignals]["Zenith"], 72.5);
}

#[test]
fn test_compare_uses_most_recent_per_brand() {
    let results = vec![
        stored_result("Acme", 40.0, 10),
        stored_result("Zenith", 60.0, 0),
        stored_result("Acme", 90.0, 30),
        stored_result("Acme", 10.0, 20),
    ];
    let comparison = compare_results(&results).unwrap();

    assert_eq!(comparison.brands.len(), 2);
    assert_eq!(comparison.overall_scores["Acme"], 90.0);
    assert_eq!(comparison.overall_scores["Zenith"], 60.0);
}

#[test]
fn test_compare_needs_two_brands() {
    let err = compare_results(&[]).unwrap_err();
    assert!(matches!(err, ResonanceError::Validation(_)));

    let same_brand = vec![stored_result("Acme", 40.0, 0), stored_result("Acme", 50.0, 5)];
    let err = compare_results(&same_brand).unwrap_err();
    assert!(matches!(err, ResonanceError::Validation(_)));
    assert!(err.is_validation());
}

#[test]
fn test_comparison_serializes_metric_keys() {
    let results = vec![stored_result("Acme", 55.0, 0), stored_result("Zenith", 72.5, 5)];
    let comparison = compare_results(&results).unwrap();
    let json = serde_json::to_value(&comparison).unwrap();
    assert_eq!(json["metric_scores"]["advocacy_language"]["Acme"], 55.0);
    assert_eq!(json["overall_scores"]["Zenith"], 72.5);
    assert_eq!(json["brands"][0], "Acme");
}
