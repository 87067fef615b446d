use resonance::error::ResonanceError;
use resonance::metrics::{Metric, MetricScoreSet, MetricWeights};
use resonance::scorer::ResonanceScorer;
use strum::IntoEnumIterator;

fn uniform(score: f64) -> MetricScoreSet {
    Metric::iter().map(|m| (m, score)).collect()
}

fn sample_set() -> MetricScoreSet {
    MetricScoreSet::new()
        .with(Metric::ConversationalDepth, 80.0)
        .with(Metric::CommunitySpread, 70.0)
        .with(Metric::EmotionalIntensity, 60.0)
        .with(Metric::IntentSignals, 50.0)
        .with(Metric::AdvocacyLanguage, 90.0)
}

// --- OVERALL SCORE ---

#[test]
fn test_extremes() {
    let scorer = ResonanceScorer::new().unwrap();
    assert_eq!(scorer.calculate_score(&uniform(100.0)).unwrap(), 100.0);
    assert_eq!(scorer.calculate_score(&uniform(0.0)).unwrap(), 0.0);
}

#[test]
fn test_weighted_sum() {
    let scorer = ResonanceScorer::new().unwrap();
    // 8 + 10.5 + 12 + 15 + 22.5
    assert_eq!(scorer.calculate_score(&sample_set()).unwrap(), 68.0);
}

#[test]
fn test_score_is_rounded_to_one_decimal() {
    let scorer = ResonanceScorer::new().unwrap();
    let set = uniform(0.0).with(Metric::ConversationalDepth, 33.33);
    // 0.1 * 33.33 = 3.333
    assert_eq!(scorer.calculate_score(&set).unwrap(), 3.3);
}

#[test]
fn test_exact_half_rounds_to_even() {
    let scorer = ResonanceScorer::new().unwrap();
    // 0.25 * 1 = 0.25 sits exactly between 0.2 and 0.3.
    let set = uniform(0.0).with(Metric::AdvocacyLanguage, 1.0);
    assert_eq!(scorer.calculate_score(&set).unwrap(), 0.2);

    // 0.25 * 3 = 0.75 goes up to the even 0.8.
    let set = uniform(0.0).with(Metric::AdvocacyLanguage, 3.0);
    assert_eq!(scorer.calculate_score(&set).unwrap(), 0.8);
}

#[test]
fn test_standard_weights() {
    let w = MetricWeights::STANDARD;
    assert_eq!(w.get(Metric::ConversationalDepth), 0.10);
    assert_eq!(w.get(Metric::CommunitySpread), 0.15);
    assert_eq!(w.get(Metric::EmotionalIntensity), 0.20);
    assert_eq!(w.get(Metric::IntentSignals), 0.30);
    assert_eq!(w.get(Metric::AdvocacyLanguage), 0.25);
    assert!((w.total() - 1.0).abs() < 1e-9);
}

// --- VALIDATION ---

#[test]
fn test_missing_metric_is_named() {
    let scorer = ResonanceScorer::new().unwrap();
    let mut set = sample_set();
    set.remove("intent_signals");

    let err = scorer.calculate_score(&set).unwrap_err();
    match &err {
        ResonanceError::MissingMetric { metric } => assert_eq!(metric, "intent_signals"),
        other => panic!("Expected MissingMetric, got {:?}", other),
    }
    assert!(err.to_string().contains("intent_signals"));
    assert!(err.is_validation());
}

#[test]
fn test_unknown_metric_rejected() {
    let scorer = ResonanceScorer::new().unwrap();
    let mut set = sample_set();
    set.insert("brand_vibes", 50.0);

    let err = scorer.calculate_score(&set).unwrap_err();
    assert!(matches!(
        err,
        ResonanceError::UnknownMetric { ref metric, .. } if metric == "brand_vibes"
    ));
}

#[test]
fn test_out_of_range_rejected() {
    let scorer = ResonanceScorer::new().unwrap();

    for bad in [101.0, -0.1, f64::NAN, f64::INFINITY] {
        let set = sample_set().with(Metric::EmotionalIntensity, bad);
        let err = scorer.calculate_score(&set).unwrap_err();
        assert!(
            matches!(err, ResonanceError::MetricOutOfRange { ref metric, .. } if metric == "emotional_intensity"),
            "value {} should be rejected, got {:?}",
            bad,
            err
        );
        assert!(err.to_string().contains("between 0 and 100"));
    }
}

#[test]
fn test_bounds_are_inclusive() {
    let scorer = ResonanceScorer::new().unwrap();
    let set = sample_set()
        .with(Metric::IntentSignals, 0.0)
        .with(Metric::AdvocacyLanguage, 100.0);
    assert!(scorer.calculate_score(&set).is_ok());
}

#[test]
fn test_missing_reported_before_unknown() {
    let scorer = ResonanceScorer::new().unwrap();
    let set: MetricScoreSet = [("depth", 50.0)].into_iter().collect();
    let err = scorer.calculate_score(&set).unwrap_err();
    assert!(matches!(err, ResonanceError::MissingMetric { .. }));
}

#[test]
fn test_custom_weights_must_sum_to_one() {
    let err = MetricWeights::new([0.2, 0.2, 0.2, 0.2, 0.1]).unwrap_err();
    assert!(matches!(err, ResonanceError::Configuration(_)));

    let err = MetricWeights::new([1.2, -0.2, 0.0, 0.0, 0.0]).unwrap_err();
    assert!(matches!(err, ResonanceError::Configuration(_)));

    let weights = MetricWeights::new([0.2; 5]).unwrap();
    let scorer = ResonanceScorer::with_weights(weights).unwrap();
    // (80 + 70 + 60 + 50 + 90) / 5
    assert_eq!(scorer.calculate_score(&sample_set()).unwrap(), 70.0);
}

// --- BREAKDOWN ---

#[test]
fn test_breakdown_sorted_by_contribution() {
    let scorer = ResonanceScorer::new().unwrap();
    let breakdown = scorer.get_metric_breakdown(&sample_set()).unwrap();

    let order: Vec<Metric> = breakdown.iter().map(|c| c.name).collect();
    assert_eq!(
        order,
        vec![
            Metric::AdvocacyLanguage,
            Metric::IntentSignals,
            Metric::EmotionalIntensity,
            Metric::CommunitySpread,
            Metric::ConversationalDepth,
        ]
    );

    let top = &breakdown[0];
    assert_eq!(top.score, 90.0);
    assert_eq!(top.weight, 0.25);
    assert!((top.contribution - 22.5).abs() < 1e-9);
    // 22.5 / 68.0
    assert_eq!(top.percentage_of_total, 33.1);
}

#[test]
fn test_breakdown_sums_to_score() {
    let scorer = ResonanceScorer::new().unwrap();
    let set = sample_set();
    let overall = scorer.calculate_score(&set).unwrap();
    let breakdown = scorer.get_metric_breakdown(&set).unwrap();

    let total: f64 = breakdown.iter().map(|c| c.contribution).sum();
    assert!((total - overall).abs() <= 0.05);
}

#[test]
fn test_breakdown_ties_keep_declaration_order() {
    let scorer = ResonanceScorer::with_weights(MetricWeights::new([0.2; 5]).unwrap()).unwrap();
    let breakdown = scorer.get_metric_breakdown(&uniform(50.0)).unwrap();
    let order: Vec<Metric> = breakdown.iter().map(|c| c.name).collect();
    assert_eq!(order, Metric::iter().collect::<Vec<_>>());
}

#[test]
fn test_breakdown_zero_score_percentages() {
    let scorer = ResonanceScorer::new().unwrap();
    let breakdown = scorer.get_metric_breakdown(&uniform(0.0)).unwrap();
    assert_eq!(breakdown.len(), 5);
    assert!(breakdown.iter().all(|c| c.percentage_of_total == 0.0));
}

#[test]
fn test_summarize() {
    let scorer = ResonanceScorer::new().unwrap();
    let summary = scorer.summarize(&sample_set()).unwrap();
    assert_eq!(summary.overall_score, 68.0);
    assert_eq!(summary.category, "Established");
    assert_eq!(
        summary.category_description,
        "Brand has solid resonance with room for improvement"
    );
    assert_eq!(summary.breakdown.len(), 5);
}
