//! Error types for dataset construction and truncation.

/// Errors that can occur while aggregating a trial batch.
///
/// All of these are fatal to the current computation; there is no partial
/// result to recover. Callers are expected to halt and report rather than
/// proceed with incomplete statistics.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("trial batch is empty")]
    EmptyBatch,

    #[error("trial {trial} is missing step '{key}' present in the first trial")]
    MissingStep { key: String, trial: usize },

    #[error(
        "truncation percentile {percentile} would remove all {samples} samples of step '{key}'"
    )]
    TruncationOutOfRange {
        key: String,
        percentile: f64,
        samples: usize,
    },
}
