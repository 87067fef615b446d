//! Fixed keyword taxonomies for the mention heuristics.
//!
//! Declaration order is significant: categories are scanned top to bottom and
//! keywords left to right, and the first hit decides a mention's category.

use super::distribution::Distribution;

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct Taxonomy {
    pub name: &'static str,
    pub categories: &'static [Category],
    // Returned when nothing matched; `None` means all zeros
    pub fallback: Option<&'static [f64]>,
}

/// First category hit for a single lowercased mention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub category: usize,
    pub keyword: &'static str,
}

/// Per-category tallies over a batch of mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub counts: Vec<usize>,
    pub matched: usize,
    pub scanned: usize,
    // Distinct keywords that fired, per category, in first-seen order
    pub hits: Vec<Vec<&'static str>>,
}

impl Taxonomy {
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.categories.iter().map(|c| c.label)
    }

    /// `text` must already be lowercased.
    pub fn classify(&self, text: &str) -> Option<Match> {
        for (idx, category) in self.categories.iter().enumerate() {
            if let Some(keyword) = category.keywords.iter().find(|k| text.contains(**k)) {
                return Some(Match {
                    category: idx,
                    keyword: *keyword,
                });
            }
        }
        None
    }

    /// Counts first-match categories over the non-blank mentions.
    pub fn tally<S: AsRef<str>>(&self, texts: &[S]) -> Tally {
        let mut tally = Tally {
            counts: vec![0; self.categories.len()],
            matched: 0,
            scanned: 0,
            hits: vec![Vec::new(); self.categories.len()],
        };

        for text in texts.iter().map(AsRef::as_ref) {
            if text.trim().is_empty() {
                continue;
            }
            tally.scanned += 1;

            if let Some(m) = self.classify(&text.to_lowercase()) {
                tally.counts[m.category] += 1;
                tally.matched += 1;
                let seen = &mut tally.hits[m.category];
                if !seen.contains(&m.keyword) {
                    seen.push(m.keyword);
                }
            }
        }
        tally
    }

    pub fn fallback_distribution(&self) -> Distribution {
        match self.fallback {
            Some(values) => Distribution::from_pairs(self.labels().zip(values.iter().copied())),
            None => Distribution::zeros(self.labels()),
        }
    }

    /// Percentages of matched mentions, or the fallback when nothing matched.
    pub fn distribution<S: AsRef<str>>(&self, texts: &[S]) -> Distribution {
        let tally = self.tally(texts);
        self.distribution_from(&tally)
    }

    pub fn distribution_from(&self, tally: &Tally) -> Distribution {
        if tally.matched == 0 {
            return self.fallback_distribution();
        }
        Distribution::from_counts(self.labels(), &tally.counts, tally.matched)
    }
}

pub const INTENT: Taxonomy = Taxonomy {
    name: "intent",
    categories: &[
        Category {
            label: "awareness",
            keywords: &[
                "heard about",
                "what is",
                "who is",
                "learn more",
                "tell me about",
                "new",
                "discover",
                "found out",
                "just saw",
                "introduction",
            ],
        },
        Category {
            label: "consideration",
            keywords: &[
                "compare",
                "versus",
                "vs",
                "better than",
                "alternative",
                "review",
                "rating",
                "price",
                "cost",
                "worth it",
                "features",
                "thinking about",
                "considering",
                "should i",
                "pros and cons",
            ],
        },
        Category {
            label: "conversion",
            keywords: &[
                "bought",
                "purchased",
                "ordered",
                "buy",
                "get",
                "where to buy",
                "discount",
                "coupon",
                "deal",
                "sale",
                "in stock",
                "shipping",
                "delivery",
                "add to cart",
                "checkout",
            ],
        },
    ],
    fallback: None,
};

pub const ADVOCACY_KEYWORDS: &[&str] = &[
    "recommend",
    "love",
    "best",
    "amazing",
    "excellent",
    "awesome",
    "great",
    "fantastic",
    "outstanding",
    "superb",
    "favorite",
    "perfect",
    "must-have",
    "must try",
    "life-changing",
    "game-changer",
    "changed my life",
    "never going back",
    "loyal",
    "fan",
    "advocate",
    "evangelist",
    "ambassador",
];

pub const ADVOCACY: Taxonomy = Taxonomy {
    name: "advocacy",
    categories: &[Category {
        label: "advocate",
        keywords: ADVOCACY_KEYWORDS,
    }],
    fallback: None,
};

pub const GEOGRAPHY: Taxonomy = Taxonomy {
    name: "geography",
    categories: &[
        Category {
            label: "North America",
            keywords: &["usa", "united states", "america", "canada", "mexico"],
        },
        Category {
            label: "Europe",
            keywords: &[
                "europe",
                "uk",
                "united kingdom",
                "germany",
                "france",
                "italy",
                "spain",
            ],
        },
        Category {
            label: "Asia",
            keywords: &["asia", "china", "japan", "india", "korea", "singapore"],
        },
        Category {
            label: "Australia/Oceania",
            keywords: &["australia", "new zealand", "oceania"],
        },
        Category {
            label: "South America",
            keywords: &["brazil", "argentina", "colombia", "chile", "peru"],
        },
        Category {
            label: "Africa",
            keywords: &["africa", "south africa", "nigeria", "kenya", "egypt"],
        },
        Category {
            label: "Middle East",
            keywords: &["middle east", "uae", "dubai", "saudi arabia", "israel"],
        },
    ],
    fallback: Some(&[40.0, 25.0, 20.0, 5.0, 5.0, 3.0, 2.0]),
};

pub const AGE_GROUPS: Taxonomy = Taxonomy {
    name: "age_groups",
    categories: &[
        Category {
            label: "Under 18",
            keywords: &["teen", "teenager", "high school", "young", "kid", "child"],
        },
        Category {
            label: "18-24",
            keywords: &["college", "university", "student", "young adult", "early 20s"],
        },
        Category {
            label: "25-34",
            keywords: &[
                "young professional",
                "millennial",
                "30s",
                "thirties",
                "late 20s",
            ],
        },
        Category {
            label: "35-44",
            keywords: &["parent", "family", "40s", "forties", "mid-career"],
        },
        Category {
            label: "45-54",
            keywords: &["middle-aged", "experienced", "50s", "fifties"],
        },
        Category {
            label: "55+",
            keywords: &["senior", "retired", "elder", "boomer", "older"],
        },
    ],
    fallback: Some(&[5.0, 15.0, 30.0, 25.0, 15.0, 10.0]),
};

pub const GENDER: Taxonomy = Taxonomy {
    name: "gender",
    categories: &[
        Category {
            label: "Male",
            keywords: &[
                "man",
                "men",
                "male",
                "guy",
                "boy",
                "father",
                "dad",
                "husband",
                "boyfriend",
            ],
        },
        Category {
            label: "Female",
            keywords: &[
                "woman",
                "women",
                "female",
                "girl",
                "mother",
                "mom",
                "wife",
                "girlfriend",
            ],
        },
        Category {
            label: "Other/Unspecified",
            keywords: &["non-binary", "they", "them", "person", "people"],
        },
    ],
    fallback: Some(&[48.0, 48.0, 4.0]),
};

pub const INCOME_LEVELS: Taxonomy = Taxonomy {
    name: "income_levels",
    categories: &[
        Category {
            label: "Low",
            keywords: &["budget", "affordable", "cheap", "low income", "struggling", "poor"],
        },
        Category {
            label: "Middle",
            keywords: &["middle class", "average", "moderate", "standard"],
        },
        Category {
            label: "High",
            keywords: &["luxury", "premium", "high-end", "wealthy", "rich", "affluent"],
        },
    ],
    fallback: Some(&[30.0, 50.0, 20.0]),
};

pub const SENTIMENT_LABELS: [&str; 5] = [
    "Very Positive",
    "Positive",
    "Neutral",
    "Negative",
    "Very Negative",
];
