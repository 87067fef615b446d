use clap::{CommandFactory, FromArgMatches, Parser};
use resonance::config::{AdvocacyParams, AnalysisConfig, TopicParams};
use resonance::error::ResonanceError;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: AnalysisConfig,
}

fn parse(args: &[&str]) -> (TestCli, clap::ArgMatches) {
    let matches = TestCli::command().get_matches_from(args);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli, matches)
}

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn test_defaults() {
    let config = AnalysisConfig::default();
    assert_eq!(config.topics.num_topics, 5);
    assert_eq!(config.topics.num_words, 10);
    assert_eq!(config.topics.max_df, 0.95);
    assert_eq!(config.topics.min_df, 2);
    assert_eq!(config.topics.topic_seed, 42);
    assert_eq!(config.advocacy.advocacy_text_limit, 5);
    assert_eq!(config.advocacy.max_key_phrases, 10);
    assert!(config.validate().is_ok());
}

#[test]
fn test_cli_defaults_match_struct_defaults() {
    let (cli, _) = parse(&["test"]);
    let defaults = AnalysisConfig::default();
    assert_eq!(cli.config.topics.num_topics, defaults.topics.num_topics);
    assert_eq!(cli.config.topics.max_df, defaults.topics.max_df);
    assert_eq!(cli.config.topics.topic_iterations, defaults.topics.topic_iterations);
    assert_eq!(
        cli.config.advocacy.max_key_phrases,
        defaults.advocacy.max_key_phrases
    );
}

#[test]
fn test_load_partial_file_keeps_defaults() {
    let file = write_config(r#"{ "topics": { "num_topics": 3 }, "advocacy": { "max_key_phrases": 4 } }"#);
    let config = AnalysisConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.topics.num_topics, 3);
    assert_eq!(config.topics.num_words, 10);
    assert_eq!(config.advocacy.max_key_phrases, 4);
    assert_eq!(config.advocacy.advocacy_text_limit, 5);
}

#[test]
fn test_load_rejects_invalid_values() {
    let file = write_config(r#"{ "topics": { "num_topics": 0 } }"#);
    let err = AnalysisConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ResonanceError::Configuration(_)));

    let file = write_config(r#"{ "topics": { "max_df": 1.5 } }"#);
    let err = AnalysisConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ResonanceError::Configuration(_)));
}

#[test]
fn test_load_rejects_malformed_json() {
    let file = write_config("{ not json");
    let err = AnalysisConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, ResonanceError::Json(_)));
}

#[test]
fn test_merge_only_explicit_flags() {
    let (cli, matches) = parse(&["test", "--num-topics", "7", "--max-key-phrases", "2"]);

    let mut config = AnalysisConfig {
        topics: TopicParams {
            num_topics: 3,
            num_words: 4,
            ..Default::default()
        },
        advocacy: AdvocacyParams {
            advocacy_text_limit: 9,
            max_key_phrases: 8,
        },
    };
    config.merge_from_cli(&cli.config, &matches);

    assert_eq!(config.topics.num_topics, 7);
    assert_eq!(config.advocacy.max_key_phrases, 2);
    // Untouched flags keep the file values, not the CLI defaults.
    assert_eq!(config.topics.num_words, 4);
    assert_eq!(config.advocacy.advocacy_text_limit, 9);
}
