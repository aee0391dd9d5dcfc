//! Per-step timing aggregation over a batch of handshake trials.
//!
//! A [`Dataset`] collects the recorded duration of every recognized handshake
//! step across repeated trial runs, keeps each per-step series sorted
//! ascending, and maintains median/mean summary statistics that are always
//! consistent with the current series. Outliers can be removed with
//! [`Dataset::truncate`], a symmetric two-tailed percentile trim.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::keys::Role;

/// Recorded elapsed time of one step in one trial, split into whole seconds
/// and the sub-second nanosecond remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepTiming {
    pub s: u64,
    pub ns: u64,
}

impl StepTiming {
    /// Total duration in nanoseconds.
    pub fn as_nanos(&self) -> u64 {
        self.s * 1_000_000_000 + self.ns
    }
}

/// One handshake execution's recorded timings, keyed by step key.
pub type TrialRecord = HashMap<String, StepTiming>;

/// Aggregated per-step duration series and summary statistics for one role.
///
/// Invariants held after construction and after every successful
/// [`truncate`](Dataset::truncate) call:
/// - `data[key]` is sorted ascending.
/// - `median[key]` and `mean[key]` are exactly the median and arithmetic
///   mean of the current `data[key]`.
/// - `data`, `median` and `mean` share an identical key set: the subset of
///   the role's catalog present in the first trial record of the batch.
#[derive(Debug, Clone, Serialize)]
pub struct Dataset {
    pub role: Role,
    /// Step key -> ascending-sorted durations in nanoseconds, one per trial.
    pub data: HashMap<String, Vec<u64>>,
    /// Step key -> median duration in nanoseconds.
    pub median: HashMap<String, f64>,
    /// Step key -> mean duration in nanoseconds.
    pub mean: HashMap<String, f64>,
}

impl Dataset {
    /// Build a dataset from a non-empty batch of trial records.
    ///
    /// Step presence is decided from the first record only: a catalog key
    /// absent there is omitted without error, while a key present there must
    /// appear in every later record or construction fails with
    /// [`DatasetError::MissingStep`].
    pub fn new(trials: &[TrialRecord], role: Role) -> Result<Self, DatasetError> {
        let first = trials.first().ok_or(DatasetError::EmptyBatch)?;

        let mut data: HashMap<String, Vec<u64>> = HashMap::new();
        let mut median: HashMap<String, f64> = HashMap::new();
        let mut mean: HashMap<String, f64> = HashMap::new();

        for &key in role.catalog() {
            if !first.contains_key(key) {
                continue;
            }

            let mut series = Vec::with_capacity(trials.len());
            for (trial, record) in trials.iter().enumerate() {
                let timing = record.get(key).ok_or_else(|| DatasetError::MissingStep {
                    key: key.to_string(),
                    trial,
                })?;
                series.push(timing.as_nanos());
            }
            series.sort_unstable();

            median.insert(key.to_string(), series_median(&series));
            mean.insert(key.to_string(), series_mean(&series));
            data.insert(key.to_string(), series);
        }

        Ok(Self {
            role,
            data,
            median,
            mean,
        })
    }

    /// Number of trials aggregated, taken from the longest series.
    pub fn trial_count(&self) -> usize {
        self.data.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Symmetric two-tailed outlier trim.
    ///
    /// `percentile` is the total percentage of samples to discard, split
    /// evenly between the low and high tails: each series loses
    /// `floor(percentile * len / 200)` samples from each end. A literal
    /// `percentile == 0.0` is a no-op; series too short to lose a sample
    /// from each end are left untouched. Median and mean are recomputed for
    /// every trimmed series.
    ///
    /// Fails with [`DatasetError::TruncationOutOfRange`] if the trim would
    /// leave some series empty; the dataset is not modified in that case.
    pub fn truncate(&mut self, percentile: f64) -> Result<(), DatasetError> {
        if percentile == 0.0 {
            return Ok(());
        }

        // Check every series before touching any of them.
        for (key, series) in &self.data {
            let idx = trim_count(percentile, series.len());
            if idx != 0 && 2 * idx >= series.len() {
                return Err(DatasetError::TruncationOutOfRange {
                    key: key.clone(),
                    percentile,
                    samples: series.len(),
                });
            }
        }

        for (key, series) in self.data.iter_mut() {
            let idx = trim_count(percentile, series.len());
            if idx == 0 {
                continue;
            }
            series.drain(..idx);
            series.truncate(series.len() - idx);

            self.median.insert(key.clone(), series_median(series));
            self.mean.insert(key.clone(), series_mean(series));
        }

        Ok(())
    }
}

/// Samples to drop from each end: the percentile names the total fraction
/// removed across both tails, hence the divisor 200 rather than 100.
fn trim_count(percentile: f64, len: usize) -> usize {
    (percentile * len as f64 / 200.0) as usize
}

/// Median of an ascending-sorted series, in nanoseconds.
fn series_median(sorted: &[u64]) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] as f64 + sorted[mid] as f64) / 2.0
    } else {
        sorted[mid] as f64
    }
}

/// Arithmetic mean of a series, in nanoseconds.
fn series_mean(values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}
