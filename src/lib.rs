//! Static code metrics and quality scores
//!
//! `codegauge` reads one source text, computes 29 lexical metrics and turns
//! them into documentation, quality and memory scores. Everything is
//! heuristic pattern matching over text; no syntax tree is built.
//!
//! ```
//! use codegauge::{FileReport, MetricsAnalyzer};
//!
//! let report = FileReport::analyze("Greeter.java", "class Greeter {}\n", &MetricsAnalyzer::default());
//! assert_eq!(report.metrics.class_count, 1);
//! assert!(report.scores.quality.value() >= 5);
//! ```

pub mod analyzers;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod metrics;
pub mod observability;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::errors::{Error, Result};
pub use crate::core::FileReport;

pub use crate::metrics::{analyze_source, CodeMetrics, MetricFamily, MetricsAnalyzer, METRIC_FIELDS};

pub use crate::scoring::{Score, ScoreCalculator, Scores, SCORE_NAMES};

pub use crate::config::{load_config, CodegaugeConfig, Thresholds};

pub use crate::io::output::{create_writer, OutputFormat, RenderOptions, ReportWriter};

pub use crate::analyzers::{analyze_file, analyze_files, BatchOutcome};
