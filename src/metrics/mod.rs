//! Static metrics engine
//!
//! Turns one source text into the 29-field [`CodeMetrics`] record. All
//! counts are lexical approximations: nothing is parsed into a syntax tree,
//! and string literals or comments are scanned like code.
//!
//! Data flow: the raw text is normalized ([`text`]), then independent passes
//! read it: line classification ([`lines`]), the pattern catalogue
//! ([`patterns`]), brace scanning and method extraction ([`scope`],
//! [`methods`]), imports ([`imports`]), resource balance ([`resources`]) and
//! duplicate windows ([`duplication`]). [`analyzer`] assembles the record.

pub mod analyzer;
pub mod duplication;
pub mod imports;
pub mod lines;
pub mod methods;
pub mod patterns;
pub mod record;
pub mod resources;
pub mod scope;
pub mod text;

pub use analyzer::{analyze_source, MetricsAnalyzer};
pub use duplication::{count_duplicate_blocks, detect_duplicate_blocks, DuplicateBlock};
pub use lines::{classify_lines, tally_lines, LineKind, LineTally};
pub use methods::{find_methods, summarize_methods, MethodDeclaration, MethodSummary};
pub use patterns::{LexicalFeature, PatternCounts};
pub use record::{CodeMetrics, MetricFamily, MetricField, METRIC_FIELDS};
pub use text::SourceText;

/// Round to the nearest integer, halves toward positive infinity
pub(crate) fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(12.5), 13);
        assert_eq!(round_half_up(12.49), 12);
        assert_eq!(round_half_up(-4.5), -4);
        assert_eq!(round_half_up(0.0), 0);
    }
}
