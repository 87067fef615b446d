use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResonanceError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Configuration(String),

    #[error("Missing required metric: {metric}")]
    MissingMetric { metric: String },

    #[error("Unknown metric: {metric} (expected one of: {expected})")]
    UnknownMetric { metric: String, expected: String },

    #[error("Metric {metric} must be between 0 and 100, got {value}")]
    MetricOutOfRange { metric: String, value: f64 },

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

impl ResonanceError {
    /// True for errors a caller can fix by correcting the submitted metrics.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingMetric { .. }
                | Self::UnknownMetric { .. }
                | Self::MetricOutOfRange { .. }
                | Self::Validation(_)
        )
    }
}

pub type RsResult<T> = Result<T, ResonanceError>;
