//! Parallel analysis of many files
//!
//! Each file is read and analyzed independently on the rayon pool; the only
//! shared value is the read-only [`MetricsAnalyzer`]. A failure to read one
//! file is kept in its [`BatchOutcome`] and never stops the others.
//! Outcomes come back sorted by path, so output does not depend on
//! scheduling.

use crate::config::Thresholds;
use crate::core::errors::Result;
use crate::core::FileReport;
use crate::metrics::MetricsAnalyzer;
use crate::observability::{
    increment_processed, set_current_file, set_phase, set_progress, AnalysisPhase,
};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Result of analyzing one path
#[derive(Debug)]
pub struct BatchOutcome {
    pub path: PathBuf,
    pub result: Result<FileReport>,
    pub analysis_time: Duration,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Counts over a finished batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub analyzed: usize,
    pub failed: usize,
    /// Summed per-file time, not wall-clock time
    pub analysis_time: Duration,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let analyzed = outcomes.iter().filter(|o| o.is_ok()).count();
        Self {
            analyzed,
            failed: outcomes.len() - analyzed,
            analysis_time: outcomes.iter().map(|o| o.analysis_time).sum(),
        }
    }
}

/// Analyze every path with the given thresholds
pub fn analyze_files(paths: &[PathBuf], thresholds: &Thresholds) -> Vec<BatchOutcome> {
    analyze_files_with(paths, &MetricsAnalyzer::new(*thresholds))
}

pub fn analyze_files_with(paths: &[PathBuf], analyzer: &MetricsAnalyzer) -> Vec<BatchOutcome> {
    set_progress(0, paths.len());
    let mut outcomes: Vec<BatchOutcome> = paths
        .par_iter()
        .map(|path| analyze_one(path, analyzer))
        .collect();

    outcomes.sort_by(|a, b| a.path.cmp(&b.path));

    let summary = BatchSummary::from_outcomes(&outcomes);
    tracing::info!(
        analyzed = summary.analyzed,
        failed = summary.failed,
        analysis_ms = summary.analysis_time.as_millis() as u64,
        "batch analysis finished"
    );
    outcomes
}

fn analyze_one(path: &Path, analyzer: &MetricsAnalyzer) -> BatchOutcome {
    let _phase = set_phase(AnalysisPhase::Analysis);
    let _file = set_current_file(path);
    let start = Instant::now();
    let result = super::analyze_file_as(path, path.display().to_string(), analyzer);
    let analysis_time = start.elapsed();

    match &result {
        Ok(_) => tracing::debug!(
            elapsed_us = analysis_time.as_micros() as u64,
            "analyzed {}",
            path.display()
        ),
        Err(e) => tracing::warn!("skipping {}: {}", path.display(), e),
    }
    increment_processed();

    BatchOutcome {
        path: path.to_path_buf(),
        result,
        analysis_time,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_outcomes_sorted_by_path() {
        let dir = TempDir::new().unwrap();
        let c = write(&dir, "C.java", "class C {}");
        let a = write(&dir, "A.java", "class A {}");
        let b = write(&dir, "B.java", "interface B {}");

        let outcomes = analyze_files(&[c, a.clone(), b], &Thresholds::default());
        let paths: Vec<_> = outcomes.iter().map(|o| o.path.clone()).collect();

        assert_eq!(paths[0], a);
        assert!(paths.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_failure_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "Good.java", "class Good {}");
        let missing = dir.path().join("Missing.java");

        let outcomes = analyze_files(&[missing, good], &Thresholds::default());

        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!((summary.analyzed, summary.failed), (1, 1));
        let good_report = outcomes
            .iter()
            .find_map(|o| o.result.as_ref().ok())
            .unwrap();
        assert_eq!(good_report.metrics.class_count, 1);
    }

    #[test]
    fn test_matches_single_file_analysis() {
        let dir = TempDir::new().unwrap();
        let source = "class A {\n  void a() { a(); }\n}\n";
        let path = write(&dir, "A.java", source);

        let outcomes = analyze_files(&[path.clone()], &Thresholds::default());
        let report = outcomes[0].result.as_ref().unwrap();

        assert_eq!(report.name, path.display().to_string());
        assert_eq!(report.metrics, MetricsAnalyzer::default().analyze(source));
    }

    #[test]
    fn test_summary_sums_analysis_time() {
        let outcomes: Vec<BatchOutcome> = [3, 5]
            .into_iter()
            .map(|ms| BatchOutcome {
                path: PathBuf::from(format!("T{ms}.java")),
                result: Ok(FileReport::analyze("T.java", "", &MetricsAnalyzer::default())),
                analysis_time: Duration::from_millis(ms),
            })
            .collect();

        let summary = BatchSummary::from_outcomes(&outcomes);
        assert_eq!(summary.analyzed, 2);
        assert_eq!(summary.analysis_time, Duration::from_millis(8));
    }

    #[test]
    fn test_empty_batch() {
        assert!(analyze_files(&[], &Thresholds::default()).is_empty());
    }
}
