//! File-level entry points on top of the metrics engine

pub mod batch;

pub use batch::{analyze_files, analyze_files_with, BatchOutcome, BatchSummary};

use crate::core::errors::Result;
use crate::core::FileReport;
use crate::io::read_source;
use crate::metrics::MetricsAnalyzer;
use std::path::Path;

/// Read and analyze one file, naming the report after the file name
pub fn analyze_file(path: &Path, analyzer: &MetricsAnalyzer) -> Result<FileReport> {
    analyze_file_as(path, display_name(path), analyzer)
}

/// Read and analyze one file under an explicit display name
pub fn analyze_file_as(
    path: &Path,
    name: impl Into<String>,
    analyzer: &MetricsAnalyzer,
) -> Result<FileReport> {
    let source = read_source(path)?;
    Ok(FileReport::analyze(name, &source, analyzer))
}

/// Last path component, or the whole path when there is none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
