//! Trial batch loading from disk.
//!
//! Trial files are JSON arrays with one object per handshake run, each
//! mapping step keys to `{"s": <seconds>, "ns": <nanoseconds>}` sub-records.
//! Malformed records (non-integer fields, wrong shape) are fatal parse
//! errors; unknown step keys are kept in the records and filtered later by
//! the catalog during aggregation.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};

use crate::dataset::TrialRecord;

/// Load a batch of trial records from a JSON file.
pub fn load_trials(path: &Path) -> Result<Vec<TrialRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read trial file {}", path.display()))?;

    let trials: Vec<TrialRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse trial records from {}", path.display()))?;

    log::debug!("Loaded {} trial records from {}", trials.len(), path.display());
    Ok(trials)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_trials() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"client_hello": {{"s": 0, "ns": 500}}, "client_handshake": {{"s": 1, "ns": 0}}}},
                {{"client_hello": {{"s": 0, "ns": 100}}, "client_handshake": {{"s": 1, "ns": 250}}}}
            ]"#
        )
        .unwrap();

        let trials = load_trials(file.path()).unwrap();
        assert_eq!(trials.len(), 2);
        assert_eq!(trials[0]["client_hello"].as_nanos(), 500);
        assert_eq!(trials[1]["client_handshake"].as_nanos(), 1_000_000_250);
    }

    #[test]
    fn test_load_trials_missing_file() {
        assert!(load_trials(Path::new("/nonexistent/trials.json")).is_err());
    }

    #[test]
    fn test_load_trials_rejects_non_integer_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"client_hello": {{"s": "zero", "ns": 500}}}}]"#).unwrap();
        assert!(load_trials(file.path()).is_err());
    }

    #[test]
    fn test_load_trials_rejects_malformed_shape() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"client_hello": {{"s": 0, "ns": 500}}}}"#).unwrap();
        assert!(load_trials(file.path()).is_err());
    }
}
