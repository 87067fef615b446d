//! File loaders for mentions, metric sets and saved results.

use crate::error::{ResonanceError, RsResult};
use crate::metrics::MetricScoreSet;
use crate::model::ResonanceResult;
use serde::de::DeserializeOwned;
use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

const TEXT_COLUMN: &str = "text";

/// Mentions from a `.csv` file (column `text`, else the first column) or a
/// plain text file with one mention per line. Blank entries are dropped.
pub fn load_mentions<P: AsRef<Path>>(path: P) -> RsResult<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        ResonanceError::Configuration(format!(
            "Could not open mentions file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));

    let mentions = if is_csv {
        read_csv_mentions(file)?
    } else {
        read_text_mentions(file)?
    };
    debug!("Loaded {} mentions from {}", mentions.len(), path.display());
    Ok(mentions)
}

pub fn read_csv_mentions<R: Read>(reader: R) -> RsResult<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(TEXT_COLUMN))
        .unwrap_or(0);

    let mut mentions = Vec::new();
    let mut skipped = 0usize;
    for record in rdr.records() {
        let record = record?;
        match record.get(column).map(str::trim) {
            Some(text) if !text.is_empty() => mentions.push(text.to_string()),
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        warn!("Skipped {} empty mention rows", skipped);
    }
    Ok(mentions)
}

pub fn read_text_mentions<R: Read>(reader: R) -> RsResult<Vec<String>> {
    let mut mentions = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let text = line.trim();
        if !text.is_empty() {
            mentions.push(text.to_string());
        }
    }
    Ok(mentions)
}

/// A flat `{metric_name: score}` JSON object.
pub fn load_metric_set<P: AsRef<Path>>(path: P) -> RsResult<MetricScoreSet> {
    load_json(path)
}

/// One result object or an array of results.
pub fn load_results<P: AsRef<Path>>(path: P) -> RsResult<Vec<ResonanceResult>> {
    let content = fs::read_to_string(path.as_ref())?;
    read_results(content.as_bytes())
}

pub fn read_results<R: Read>(reader: R) -> RsResult<Vec<ResonanceResult>> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;
    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}

fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> RsResult<T> {
    let content = fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}
