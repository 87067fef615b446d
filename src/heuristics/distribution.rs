use crate::metrics::round1;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Label -> percentage mapping that keeps taxonomy declaration order.
///
/// Serialized as a JSON object; entries are written and read in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Distribution {
    entries: Vec<(String, f64)>,
}

impl Distribution {
    /// Every label at 0.0.
    pub fn zeros<'a>(labels: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            entries: labels.into_iter().map(|l| (l.to_string(), 0.0)).collect(),
        }
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        Self {
            entries: pairs.into_iter().map(|(l, v)| (l.to_string(), v)).collect(),
        }
    }

    /// Converts raw counts into percentages of `denominator`, one decimal.
    /// A zero denominator yields all zeros.
    pub fn from_counts<'a>(
        labels: impl IntoIterator<Item = &'a str>,
        counts: &[usize],
        denominator: usize,
    ) -> Self {
        let entries = labels
            .into_iter()
            .zip(counts.iter())
            .map(|(label, &count)| {
                let pct = if denominator > 0 {
                    round1(count as f64 / denominator as f64 * 100.0)
                } else {
                    0.0
                };
                (label.to_string(), pct)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, v)| v)
    }

    pub fn total(&self) -> f64 {
        self.entries.iter().map(|(_, v)| v).sum()
    }

    pub fn is_all_zero(&self) -> bool {
        self.entries.iter().all(|&(_, v)| v == 0.0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, v)| (l.as_str(), *v))
    }

    /// Label with the largest share; earlier labels win ties.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        self.iter().fold(None, |best, (label, value)| match best {
            Some((_, top)) if top >= value => best,
            _ => Some((label, value)),
        })
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, value) in &self.entries {
            map.serialize_entry(label, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Distribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DistributionVisitor;

        impl<'de> Visitor<'de> for DistributionVisitor {
            type Value = Distribution;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of label to percentage")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Distribution, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((label, value)) = access.next_entry::<String, f64>()? {
                    entries.push((label, value));
                }
                Ok(Distribution { entries })
            }
        }

        deserializer.deserialize_map(DistributionVisitor)
    }
}
