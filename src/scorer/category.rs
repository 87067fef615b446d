use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Resonance bands, ordered from weakest to strongest.
#[derive(
    Debug,
    Clone,
    Copy,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
pub enum ScoreCategory {
    Critical,
    Struggling,
    Weak,
    Emerging,
    Developing,
    Established,
    Strong,
    Leading,
    Iconic,
}

// Highest bound first. A score belongs to the first band whose bound it meets.
const LADDER: [(f64, ScoreCategory); 8] = [
    (90.0, ScoreCategory::Iconic),
    (80.0, ScoreCategory::Leading),
    (70.0, ScoreCategory::Strong),
    (60.0, ScoreCategory::Established),
    (50.0, ScoreCategory::Developing),
    (40.0, ScoreCategory::Emerging),
    (30.0, ScoreCategory::Weak),
    (20.0, ScoreCategory::Struggling),
];

impl ScoreCategory {
    pub fn from_score(score: f64) -> Self {
        LADDER
            .iter()
            .find(|(bound, _)| score >= *bound)
            .map(|&(_, category)| category)
            .unwrap_or(Self::Critical)
    }

    pub fn lower_bound(self) -> f64 {
        LADDER
            .iter()
            .find(|(_, category)| *category == self)
            .map(|&(bound, _)| bound)
            .unwrap_or(0.0)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Iconic => {
                "Brand has achieved cultural icon status with extremely high resonance"
            }
            Self::Leading => "Brand has strong resonance across all metrics",
            Self::Strong => "Brand has above-average resonance with some standout metrics",
            Self::Established => "Brand has solid resonance with room for improvement",
            Self::Developing => "Brand has moderate resonance with significant growth potential",
            Self::Emerging => "Brand has begun to establish resonance but needs development",
            Self::Weak => "Brand has limited resonance with substantial challenges",
            Self::Struggling => "Brand has minimal resonance and requires major intervention",
            Self::Critical => "Brand has extremely low resonance and needs complete rethinking",
        }
    }
}
