//! Benchmark sweep over random instances.
//!
//! For every size in `min_size..=max_size` (stepping by `size_step`) and
//! every instance index, a symmetric matrix is generated from the seed
//! `size * 100 + instance`, each configured [`Algorithm`] is run on it and
//! timed, and one [`ReportRow`] is recorded. Exhaustive search is skipped
//! for sizes above [`ExperimentConfig::exhaustive_limit`].
//!
//! Rows serialize to CSV with the header `n,instance,algorithm,value,time_ms`.

mod algorithm;
mod config;
mod report;
mod runner;

pub use algorithm::Algorithm;
pub use config::{instance_seed, ExperimentConfig};
pub use report::{write_report, write_report_file, ReportRow, REPORT_HEADER};
pub use runner::ExperimentRunner;
