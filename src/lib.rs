//! # Handshake Bench - Timing analysis for attestation-augmented TLS handshakes
//!
//! This library aggregates repeated timing measurements of a multi-step
//! handshake protocol into robust per-step statistics for benchmarking and
//! reporting.
//!
//! ## Overview
//!
//! A benchmark harness records each handshake run as a trial record: a JSON
//! object mapping step keys (e.g. `client_hello`, `server_att_request`) to
//! `{s, ns}` sub-second timing breakdowns. This crate turns a batch of such
//! records into per-step median and mean latency figures, with an optional
//! symmetric percentile truncation to trim measurement outliers.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `keys`: step-key catalogs per role and display-label lookup
//! - `dataset`: per-step duration aggregation and outlier truncation
//! - `loader`: trial batch loading from JSON files
//! - `report`: JSON and text report generation
//! - `error`: typed aggregation errors
//!
//! ## Example Usage
//!
//! ```rust
//! use handshake_bench::dataset::{Dataset, StepTiming, TrialRecord};
//! use handshake_bench::keys::Role;
//!
//! let trials: Vec<TrialRecord> = [500u64, 100, 300]
//!     .iter()
//!     .map(|&ns| {
//!         [("client_hello".to_string(), StepTiming { s: 0, ns })]
//!             .into_iter()
//!             .collect()
//!     })
//!     .collect();
//!
//! let mut dataset = Dataset::new(&trials, Role::Client)?;
//! assert_eq!(dataset.data["client_hello"], vec![100, 300, 500]);
//! assert_eq!(dataset.median["client_hello"], 300.0);
//!
//! // Drop the extreme third of samples, split between both tails.
//! dataset.truncate(66.67)?;
//! assert_eq!(dataset.data["client_hello"], vec![300]);
//! # Ok::<(), handshake_bench::error::DatasetError>(())
//! ```
//!
//! ## Error Handling
//!
//! The aggregation core returns typed [`error::DatasetError`] values; file
//! loading and the `hs-analyzer` binary use `color_eyre` for error reporting
//! with context. All errors are fatal to the current computation; there are
//! no partial statistics.

pub mod dataset;
pub mod error;
pub mod keys;
pub mod loader;
pub mod report;

pub use dataset::{Dataset, StepTiming, TrialRecord};
pub use error::DatasetError;
pub use keys::{key_label, Role, CLIENT_KEYS, SERVER_KEYS};
