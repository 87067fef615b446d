use super::distribution::Distribution;
use super::taxonomy::{AGE_GROUPS, GENDER, GEOGRAPHY, INCOME_LEVELS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicMix {
    pub age_groups: Distribution,
    pub gender: Distribution,
    pub income_levels: Distribution,
}

/// Region distribution; the fixed default when no region is mentioned.
pub fn extract_geographic_mentions<S: AsRef<str>>(texts: &[S]) -> Distribution {
    GEOGRAPHY.distribution(texts)
}

/// Age, gender and income distributions. Each axis falls back to its own
/// default independently of the others.
pub fn extract_demographic_mentions<S: AsRef<str>>(texts: &[S]) -> DemographicMix {
    DemographicMix {
        age_groups: AGE_GROUPS.distribution(texts),
        gender: GENDER.distribution(texts),
        income_levels: INCOME_LEVELS.distribution(texts),
    }
}

/// Normalized Shannon evenness of a distribution, 0..=1. A single populated
/// label scores 0, a perfectly flat spread scores 1.
pub fn evenness(distribution: &Distribution) -> f64 {
    let total = distribution.total();
    if total <= 0.0 || distribution.len() < 2 {
        return 0.0;
    }
    let entropy: f64 = distribution
        .iter()
        .map(|(_, v)| v / total)
        .filter(|p| *p > 0.0)
        .map(|p| -p * p.ln())
        .sum();
    (entropy / (distribution.len() as f64).ln()).clamp(0.0, 1.0)
}
