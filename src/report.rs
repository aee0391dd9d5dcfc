//! Report generation for handshake timing analysis.
//!
//! Generates both JSON and human-readable text reports from an aggregated
//! [`Dataset`], with one row per measured step in catalog order.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Context, Result};
use serde::Serialize;

use crate::dataset::Dataset;
use crate::keys::{key_label, Role};

/// Summary row for one handshake step.
#[derive(Debug, Clone, Serialize)]
pub struct StepSummary {
    pub key: String,
    pub label: String,
    pub samples: usize,
    pub median_ns: f64,
    pub mean_ns: f64,
}

/// Report metadata
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub analysis_timestamp: String,
    pub source_file: String,
    pub role: Role,
    pub trials: usize,
    /// Total percentage of samples discarded by truncation (0 = none).
    pub truncate_percentile: f64,
}

/// Complete per-role analysis report.
#[derive(Debug, Clone, Serialize)]
pub struct RoleReport {
    pub metadata: ReportMetadata,
    pub steps: Vec<StepSummary>,
}

/// Build a report from an aggregated dataset.
///
/// Steps appear in catalog order; keys absent from the dataset are skipped.
/// A step without a display label falls back to its raw key.
pub fn build_report(
    dataset: &Dataset,
    source_file: &str,
    truncate_percentile: f64,
) -> RoleReport {
    let steps = dataset
        .role
        .catalog()
        .iter()
        .filter_map(|&key| {
            let series = dataset.data.get(key)?;
            Some(StepSummary {
                key: key.to_string(),
                label: key_label(key).unwrap_or(key).to_string(),
                samples: series.len(),
                median_ns: dataset.median[key],
                mean_ns: dataset.mean[key],
            })
        })
        .collect();

    RoleReport {
        metadata: ReportMetadata {
            analysis_timestamp: chrono::Utc::now().to_rfc3339(),
            source_file: source_file.to_string(),
            role: dataset.role,
            trials: dataset.trial_count(),
            truncate_percentile,
        },
        steps,
    }
}

/// Generate JSON report
pub fn generate_json_report(report: &RoleReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)
        .context("Failed to serialize report to JSON")?;

    fs::write(output_path, json)
        .with_context(|| format!("Failed to write JSON report to {}", output_path.display()))?;

    log::info!("JSON report written to {}", output_path.display());
    Ok(())
}

/// Generate human-readable text report
pub fn generate_text_report(report: &RoleReport, output_path: &Path) -> Result<()> {
    let text = render_text_report(report);

    fs::write(output_path, text)
        .with_context(|| format!("Failed to write text report to {}", output_path.display()))?;

    log::info!("Text report written to {}", output_path.display());
    Ok(())
}

fn render_text_report(report: &RoleReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    // Header
    lines.push("=".repeat(80));
    lines.push("                     HANDSHAKE TIMING ANALYSIS".to_string());
    lines.push("=".repeat(80));
    lines.push(String::new());

    // Metadata
    lines.push(format!("Analysis Date: {}", report.metadata.analysis_timestamp));
    lines.push(format!("Source File: {}", report.metadata.source_file));
    lines.push(format!("Role: {}", report.metadata.role));
    lines.push(format!("Trials: {}", report.metadata.trials));
    if report.metadata.truncate_percentile != 0.0 {
        lines.push(format!(
            "Outlier Truncation: {}% (two-tailed)",
            report.metadata.truncate_percentile
        ));
    }
    lines.push(String::new());

    // Per-step statistics, earliest step first
    lines.push(format!(
        "{:<50} {:>7} {:>10} {:>10}",
        "Step", "Samples", "Median ms", "Mean ms"
    ));
    lines.push("-".repeat(80));
    for step in &report.steps {
        lines.push(format!(
            "{:<50} {:>7} {:>10.4} {:>10.4}",
            step.label,
            step.samples,
            step.median_ns / 1_000_000.0,
            step.mean_ns / 1_000_000.0
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{StepTiming, TrialRecord};

    fn sample_dataset() -> Dataset {
        let trials: Vec<TrialRecord> = [500u64, 100, 300]
            .iter()
            .map(|&ns| {
                [
                    ("client_hello".to_string(), StepTiming { s: 0, ns }),
                    ("client_handshake".to_string(), StepTiming { s: 0, ns: ns * 2 }),
                ]
                .into_iter()
                .collect()
            })
            .collect();
        Dataset::new(&trials, Role::Client).unwrap()
    }

    #[test]
    fn test_report_rows_follow_catalog_order() {
        let report = build_report(&sample_dataset(), "trials.json", 0.0);

        let keys: Vec<&str> = report.steps.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["client_hello", "client_handshake"]);
        assert_eq!(report.steps[0].label, "ClientHello");
        assert_eq!(report.steps[0].samples, 3);
        assert_eq!(report.steps[0].median_ns, 300.0);
    }

    #[test]
    fn test_text_report_mentions_every_step() {
        let report = build_report(&sample_dataset(), "trials.json", 10.0);
        let text = render_text_report(&report);

        assert!(text.contains("ClientHello"));
        assert!(text.contains("Handshake"));
        assert!(text.contains("Outlier Truncation: 10%"));
        assert!(text.contains("Role: client"));
    }

    #[test]
    fn test_json_report_round_trip() {
        let report = build_report(&sample_dataset(), "trials.json", 0.0);
        let json = serde_json::to_string(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["trials"], 3);
        assert_eq!(value["steps"][0]["key"], "client_hello");
        assert_eq!(value["steps"][0]["mean_ns"], 300.0);
    }
}
