//! Bag-of-words topic extraction.
//!
//! A document-frequency-pruned count vectorizer feeds a seeded latent
//! Dirichlet allocation (collapsed Gibbs sampling). Any failure degrades to
//! empty placeholder topics.

use super::stopwords::is_stop_word;
use crate::config::TopicParams;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;
use tracing::{debug, warn};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicSummary {
    pub id: usize,
    pub words: Vec<String>,
    pub weight: f64,
}

impl TopicSummary {
    fn placeholder(id: usize) -> Self {
        Self {
            id,
            words: Vec::new(),
            weight: 0.0,
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum TopicError {
    #[error("max_df corresponds to < documents than min_df")]
    IncompatibleDocumentBounds,
    #[error("empty vocabulary; perhaps the documents only contain stop words")]
    EmptyVocabulary,
    #[error("after pruning, no terms remain. Try a lower min_df or a higher max_df")]
    NoTermsAfterPruning,
}

/// Document-term counts over a pruned vocabulary.
#[derive(Debug, Clone)]
pub struct DocumentTermMatrix {
    pub vocabulary: Vec<String>,
    // Per document: term index repeated once per occurrence
    pub documents: Vec<Vec<usize>>,
}

fn tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .filter(|t| !is_stop_word(t))
        .collect()
}

pub fn vectorize<S: AsRef<str>>(
    texts: &[S],
    max_df: f64,
    min_df: usize,
) -> Result<DocumentTermMatrix, TopicError> {
    let n_docs = texts.len();
    let tokenized: Vec<Vec<String>> = texts.iter().map(|t| tokens(t.as_ref())).collect();

    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in &tokenized {
        let mut seen: Vec<&str> = doc.iter().map(String::as_str).collect();
        seen.sort_unstable();
        seen.dedup();
        for term in seen {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    if doc_freq.is_empty() {
        return Err(TopicError::EmptyVocabulary);
    }

    let max_doc_count = max_df * n_docs as f64;
    if max_doc_count < min_df as f64 {
        return Err(TopicError::IncompatibleDocumentBounds);
    }

    // BTreeMap keeps the vocabulary alphabetical, so term ids are stable.
    let vocabulary: Vec<String> = doc_freq
        .iter()
        .filter(|&(_, &df)| df as f64 <= max_doc_count && df >= min_df)
        .map(|(&term, _)| term.to_string())
        .collect();

    if vocabulary.is_empty() {
        return Err(TopicError::NoTermsAfterPruning);
    }

    let index: HashMap<&str, usize> = vocabulary
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let documents = tokenized
        .iter()
        .map(|doc| doc.iter().filter_map(|t| index.get(t.as_str()).copied()).collect())
        .collect();

    Ok(DocumentTermMatrix {
        vocabulary,
        documents,
    })
}

/// Topic-word pseudo-counts, `num_topics` rows by vocabulary columns.
/// Zero topics yields no rows.
pub fn fit_lda(dtm: &DocumentTermMatrix, num_topics: usize, iterations: usize, seed: u64) -> Vec<Vec<f64>> {
    if num_topics == 0 {
        return Vec::new();
    }
    let vocab_len = dtm.vocabulary.len();
    let alpha = 1.0 / num_topics as f64;
    let eta = 1.0 / num_topics as f64;
    let eta_sum = eta * vocab_len as f64;

    let mut rng = fastrand::Rng::with_seed(seed);

    let mut doc_topic = vec![vec![0usize; num_topics]; dtm.documents.len()];
    let mut topic_word = vec![vec![0usize; vocab_len]; num_topics];
    let mut topic_total = vec![0usize; num_topics];
    let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(dtm.documents.len());

    for (d, doc) in dtm.documents.iter().enumerate() {
        let mut z = Vec::with_capacity(doc.len());
        for &w in doc {
            let k = rng.usize(..num_topics);
            doc_topic[d][k] += 1;
            topic_word[k][w] += 1;
            topic_total[k] += 1;
            z.push(k);
        }
        assignments.push(z);
    }

    let mut weights = vec![0.0; num_topics];
    for _ in 0..iterations {
        for (d, doc) in dtm.documents.iter().enumerate() {
            for (i, &w) in doc.iter().enumerate() {
                let old = assignments[d][i];
                doc_topic[d][old] -= 1;
                topic_word[old][w] -= 1;
                topic_total[old] -= 1;

                let mut cumulative = 0.0;
                for k in 0..num_topics {
                    let p = (doc_topic[d][k] as f64 + alpha)
                        * (topic_word[k][w] as f64 + eta)
                        / (topic_total[k] as f64 + eta_sum);
                    cumulative += p;
                    weights[k] = cumulative;
                }

                let draw = rng.f64() * cumulative;
                let new = weights
                    .iter()
                    .position(|&c| draw < c)
                    .unwrap_or(num_topics - 1);

                assignments[d][i] = new;
                doc_topic[d][new] += 1;
                topic_word[new][w] += 1;
                topic_total[new] += 1;
            }
        }
    }

    topic_word
        .into_iter()
        .map(|row| row.into_iter().map(|c| c as f64 + eta).collect())
        .collect()
}

fn try_extract<S: AsRef<str>>(texts: &[S], params: &TopicParams) -> Result<Vec<TopicSummary>, TopicError> {
    let dtm = vectorize(texts, params.max_df, params.min_df)?;
    debug!(
        "Topic vectorizer: {} documents, {} terms",
        dtm.documents.len(),
        dtm.vocabulary.len()
    );

    let components = fit_lda(&dtm, params.num_topics, params.topic_iterations, params.topic_seed);
    let grand_total: f64 = components.iter().flatten().sum();

    let topics = components
        .iter()
        .enumerate()
        .map(|(id, row)| {
            let mut order: Vec<usize> = (0..row.len()).collect();
            // Stable sort: equal weights keep alphabetical order.
            order.sort_by(|&a, &b| row[b].total_cmp(&row[a]));
            let words = order
                .into_iter()
                .take(params.num_words)
                .map(|i| dtm.vocabulary[i].clone())
                .collect();
            let weight = if grand_total > 0.0 {
                row.iter().sum::<f64>() / grand_total
            } else {
                0.0
            };
            TopicSummary { id, words, weight }
        })
        .collect();

    Ok(topics)
}

/// Extracts `params.num_topics` topics from the mentions.
///
/// Empty or all-blank input, and any vectorizer failure, yield placeholder
/// topics with no words and zero weight.
pub fn extract_topics<S: AsRef<str>>(texts: &[S], params: &TopicParams) -> Vec<TopicSummary> {
    let placeholders = || -> Vec<TopicSummary> {
        (0..params.num_topics)
            .map(TopicSummary::placeholder)
            .collect()
    };

    if params.num_topics == 0 || texts.iter().all(|t| t.as_ref().trim().is_empty()) {
        return placeholders();
    }

    match try_extract(texts, params) {
        Ok(topics) => topics,
        Err(e) => {
            warn!("Topic extraction degraded to placeholders: {}", e);
            placeholders()
        }
    }
}
