use crate::error::{ResonanceError, RsResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    #[command(flatten)]
    pub topics: TopicParams,
    #[command(flatten)]
    pub advocacy: AdvocacyParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicParams {
    #[arg(long, default_value_t = 5)]
    pub num_topics: usize,
    #[arg(long, default_value_t = 10)]
    pub num_words: usize,

    // Vectorizer pruning: proportion of documents / absolute document count
    #[arg(long, default_value_t = 0.95)]
    pub max_df: f64,
    #[arg(long, default_value_t = 2)]
    pub min_df: usize,

    #[arg(long, default_value_t = 100)]
    pub topic_iterations: usize,
    #[arg(long, default_value_t = 42)]
    pub topic_seed: u64,
}

impl Default for TopicParams {
    fn default() -> Self {
        Self {
            num_topics: 5,
            num_words: 10,
            max_df: 0.95,
            min_df: 2,
            topic_iterations: 100,
            topic_seed: 42,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvocacyParams {
    // Only the first N advocate mentions are chunked for phrases
    #[arg(long, default_value_t = 5)]
    pub advocacy_text_limit: usize,
    #[arg(long, default_value_t = 10)]
    pub max_key_phrases: usize,
}

impl Default for AdvocacyParams {
    fn default() -> Self {
        Self {
            advocacy_text_limit: 5,
            max_key_phrases: 10,
        }
    }
}

impl AnalysisConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> RsResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> RsResult<()> {
        let t = &self.topics;
        if t.num_topics == 0 {
            return Err(ResonanceError::Configuration(
                "num_topics must be at least 1".to_string(),
            ));
        }
        if !(t.max_df > 0.0 && t.max_df <= 1.0) {
            return Err(ResonanceError::Configuration(format!(
                "max_df must be a proportion in (0, 1], got {}",
                t.max_df
            )));
        }
        if t.topic_iterations == 0 {
            return Err(ResonanceError::Configuration(
                "topic_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Overwrites fields the user set explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &AnalysisConfig, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($group:ident, $field:ident, $arg_name:expr) => {
                if matches.value_source($arg_name) == Some(ValueSource::CommandLine) {
                    self.$group.$field = cli.$group.$field.clone();
                }
            };
        }

        update_if_present!(topics, num_topics, "num_topics");
        update_if_present!(topics, num_words, "num_words");
        update_if_present!(topics, max_df, "max_df");
        update_if_present!(topics, min_df, "min_df");
        update_if_present!(topics, topic_iterations, "topic_iterations");
        update_if_present!(topics, topic_seed, "topic_seed");

        update_if_present!(advocacy, advocacy_text_limit, "advocacy_text_limit");
        update_if_present!(advocacy, max_key_phrases, "max_key_phrases");
    }
}
