use proptest::prelude::*;
use resonance::heuristics::{
    analyze_sentiment, detect_intent_signals, extract_demographic_mentions,
    extract_geographic_mentions, LexiconPolarity, PolarityScorer,
};
use resonance::metrics::{Metric, MetricScoreSet};
use resonance::scorer::{ResonanceScorer, ScoreCategory};

// --- STRATEGIES ---

prop_compose! {
    fn arb_scores()(
        depth in 0.0..=100.0f64,
        spread in 0.0..=100.0f64,
        emotion in 0.0..=100.0f64,
        intent in 0.0..=100.0f64,
        advocacy in 0.0..=100.0f64,
    ) -> MetricScoreSet {
        MetricScoreSet::new()
            .with(Metric::ConversationalDepth, depth)
            .with(Metric::CommunitySpread, spread)
            .with(Metric::EmotionalIntensity, emotion)
            .with(Metric::IntentSignals, intent)
            .with(Metric::AdvocacyLanguage, advocacy)
    }
}

fn arb_mention() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,.!?']{0,60}",
        Just("I love it, best purchase ever!".to_string()),
        Just("Where to buy this in Canada?".to_string()),
        Just("My mom thinks it is too cheap".to_string()),
        Just("not good, the worst".to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_score_within_bounds(set in arb_scores()) {
        let scorer = ResonanceScorer::new().unwrap();
        let score = scorer.calculate_score(&set).unwrap();
        prop_assert!((0.0..=100.0).contains(&score));
    }

    #[test]
    fn prop_breakdown_matches_score(set in arb_scores()) {
        let scorer = ResonanceScorer::new().unwrap();
        let score = scorer.calculate_score(&set).unwrap();
        let breakdown = scorer.get_metric_breakdown(&set).unwrap();

        let total: f64 = breakdown.iter().map(|c| c.contribution).sum();
        prop_assert!((total - score).abs() <= 0.05 + 1e-9);

        for pair in breakdown.windows(2) {
            prop_assert!(pair[0].contribution >= pair[1].contribution);
        }
    }

    #[test]
    fn prop_category_matches_bound(score in 0.0..=100.0f64) {
        let category = ScoreCategory::from_score(score);
        prop_assert!(score >= category.lower_bound());
    }

    #[test]
    fn prop_compound_is_bounded(text in "\\PC{0,80}") {
        let compound = LexiconPolarity.compound(&text);
        prop_assert!((-1.0..=1.0).contains(&compound));
    }

    #[test]
    fn prop_distributions_are_percentages(mentions in prop::collection::vec(arb_mention(), 0..12)) {
        let sentiment = analyze_sentiment(&mentions);
        let intent = detect_intent_signals(&mentions);
        let geography = extract_geographic_mentions(&mentions);
        let demographics = extract_demographic_mentions(&mentions);

        for dist in [&sentiment, &intent, &geography, &demographics.age_groups, &demographics.gender, &demographics.income_levels] {
            let total = dist.total();
            // Either no signal or percentages that sum to 100 within rounding.
            prop_assert!(total == 0.0 || (total - 100.0).abs() <= 0.5, "total {}", total);
            prop_assert!(dist.iter().all(|(_, v)| (0.0..=100.0).contains(&v)));
        }

        prop_assert!((geography.total() - 100.0).abs() <= 0.5);
    }
}
