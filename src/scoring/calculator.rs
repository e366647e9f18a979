use serde::Serialize;

use super::score_types::Score;
use crate::metrics::{round_half_up, CodeMetrics};

/// The three composite scores derived from one [`CodeMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Scores {
    pub documentation: Score,
    pub quality: Score,
    pub memory: Score,
}

/// Display names of the scores, in presentation order
pub const SCORE_NAMES: [&str; 3] = ["DocumentationScore", "QualityScore", "MemoryScore"];

impl Scores {
    /// Ordered (name, value) pairs for renderers
    pub fn entries(&self) -> Vec<(&'static str, u32)> {
        let values = [self.documentation, self.quality, self.memory];
        SCORE_NAMES
            .iter()
            .zip(values)
            .map(|(&name, score)| (name, score.value()))
            .collect()
    }
}

/// Individual deductions behind the quality score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct QualityPenalties {
    pub complexity: f64,
    pub nesting: f64,
    pub long_methods: f64,
    pub duplication: f64,
    pub encapsulation: f64,
}

impl QualityPenalties {
    pub fn total(&self) -> f64 {
        self.complexity + self.nesting + self.long_methods + self.duplication + self.encapsulation
    }
}

/// Individual deductions behind the memory score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MemoryPenalties {
    pub allocations: f64,
    pub resource_leaks: f64,
    pub string_objects: f64,
}

impl MemoryPenalties {
    pub fn total(&self) -> f64 {
        self.allocations + self.resource_leaks + self.string_objects
    }
}

/// Stateless calculator turning metrics into scores
pub struct ScoreCalculator;

impl ScoreCalculator {
    pub fn calculate(metrics: &CodeMetrics) -> Scores {
        Scores {
            documentation: Self::documentation_score(metrics),
            quality: Self::quality_score(metrics),
            memory: Self::memory_score(metrics),
        }
    }

    /// Rounded share of comment lines, capped at 100
    ///
    /// A text with no non-blank line has nothing left undocumented and
    /// scores 100.
    pub fn documentation_score(metrics: &CodeMetrics) -> Score {
        if metrics.empty_lines >= metrics.loc {
            return Score::from_raw(100.0);
        }
        let loc = metrics.loc.max(1) as f64;
        let pct = round_half_up(metrics.comment_lines as f64 * 100.0 / loc);
        Score::from_raw(pct.min(100) as f64)
    }

    pub fn quality_penalties(metrics: &CodeMetrics) -> QualityPenalties {
        let complexity_excess = metrics.cyclomatic_complexity.saturating_sub(1) as f64;
        let non_private_fields = metrics
            .field_count
            .saturating_sub(metrics.private_field_count);
        let non_private_ratio = if metrics.field_count > 0 {
            non_private_fields as f64 / metrics.field_count as f64
        } else {
            0.0
        };

        QualityPenalties {
            complexity: (complexity_excess * 1.5).min(40.0),
            nesting: (metrics.max_nesting_depth as f64 * 1.5).min(20.0),
            long_methods: (metrics.long_method_count as f64 * 3.0).min(20.0),
            duplication: (metrics.duplicate_block_count as f64 * 2.0).min(15.0),
            encapsulation: (non_private_ratio * 10.0).min(10.0),
        }
    }

    pub fn quality_score(metrics: &CodeMetrics) -> Score {
        Score::from_raw(100.0 - Self::quality_penalties(metrics).total())
    }

    pub fn memory_penalties(metrics: &CodeMetrics) -> MemoryPenalties {
        MemoryPenalties {
            allocations: (metrics.memory_allocation_count as f64 * 1.5).min(60.0),
            resource_leaks: (metrics.possible_resource_leaks as f64 * 10.0).min(30.0),
            string_objects: (metrics.string_object_count as f64 * 0.5).min(10.0),
        }
    }

    pub fn memory_score(metrics: &CodeMetrics) -> Score {
        Score::from_raw(100.0 - Self::memory_penalties(metrics).total())
    }
}
