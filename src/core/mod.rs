pub mod errors;

use serde::Serialize;

use crate::metrics::{CodeMetrics, MetricsAnalyzer};
use crate::scoring::{ScoreCalculator, Scores};

/// Metrics and scores of one named source text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Display name supplied by the caller, usually the file name
    pub name: String,
    pub metrics: CodeMetrics,
    pub scores: Scores,
}

impl FileReport {
    /// Analyze `source` and score the result
    pub fn analyze(name: impl Into<String>, source: &str, analyzer: &MetricsAnalyzer) -> Self {
        let name = name.into();
        let metrics = analyzer.analyze(source);
        let scores = ScoreCalculator::calculate(&metrics);

        tracing::debug!(
            file = %name,
            loc = metrics.loc,
            methods = metrics.method_count,
            cyclomatic = metrics.cyclomatic_complexity,
            quality = scores.quality.value(),
            "analyzed source"
        );

        Self {
            name,
            metrics,
            scores,
        }
    }

    /// Ordered metric entries for renderers
    pub fn metric_entries(&self) -> Vec<(&'static str, usize)> {
        self.metrics.entries()
    }

    /// Ordered score entries for renderers
    pub fn score_entries(&self) -> Vec<(&'static str, u32)> {
        self.scores.entries()
    }
}
