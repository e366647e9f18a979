//! Composite 0-100 scores
//!
//! Three scores are derived from a finished [`crate::metrics::CodeMetrics`]:
//!
//! - **Documentation**: share of comment lines
//! - **Quality**: 100 minus capped penalties for complexity, nesting, long
//!   methods, duplicate blocks and non-private fields
//! - **Memory**: 100 minus capped penalties for allocations, resource
//!   imbalance and explicit `String` construction
//!
//! Scores are recomputed on demand; nothing is cached.

pub mod calculator;
pub mod score_types;

pub use calculator::{MemoryPenalties, QualityPenalties, ScoreCalculator, Scores, SCORE_NAMES};
pub use score_types::Score;
