use crate::config::Thresholds;

use super::duplication::count_duplicate_blocks;
use super::imports::count_unique_imports;
use super::lines::tally_lines;
use super::methods::summarize_methods;
use super::patterns::{LexicalFeature, PatternCounts};
use super::record::CodeMetrics;
use super::resources::estimate_resource_leaks;
use super::round_half_up;
use super::scope::max_nesting_depth;
use super::text::SourceText;

/// Computes [`CodeMetrics`] from source text
///
/// The analyzer holds only its thresholds. `analyze` is a pure function of
/// its input, so one analyzer can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsAnalyzer {
    thresholds: Thresholds,
}

impl MetricsAnalyzer {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Compute every metric for `raw`
    ///
    /// Total over all input: empty or non-source text yields zero counts
    /// rather than an error.
    pub fn analyze(&self, raw: &str) -> CodeMetrics {
        let source = SourceText::new(raw);
        let text = source.as_str();

        let loc = source.line_count();
        let lines = tally_lines(source.lines());
        let counts = PatternCounts::scan(text);
        let methods = summarize_methods(text, self.thresholds.long_method_lines);

        CodeMetrics {
            loc,
            empty_lines: lines.empty_lines,
            comment_lines: lines.comment_lines,
            comment_to_code_ratio: percentage(lines.comment_lines, loc),
            class_count: counts.get(LexicalFeature::ClassDeclaration),
            interface_count: counts.get(LexicalFeature::InterfaceDeclaration),
            method_count: methods.method_count,
            avg_method_length: methods.average_length,

            cyclomatic_complexity: counts.cyclomatic_complexity(),
            max_nesting_depth: max_nesting_depth(text),
            decision_statements: counts.get(LexicalFeature::DecisionStatement),
            loop_count: counts.get(LexicalFeature::LoopStatement),
            return_count: counts.get(LexicalFeature::ReturnStatement),
            recursion_count: methods.recursion_count,
            exception_handling_count: counts.get(LexicalFeature::ExceptionHandling),

            field_count: counts.get(LexicalFeature::FieldDeclaration),
            static_field_count: counts.get(LexicalFeature::StaticField),
            static_method_count: counts.get(LexicalFeature::StaticMethod),
            inheritance_count: counts.get(LexicalFeature::Inheritance),
            private_field_count: counts.get(LexicalFeature::PrivateField),
            import_count: count_unique_imports(text),

            memory_allocation_count: counts.memory_allocations(),
            string_object_count: counts.get(LexicalFeature::StringObject),
            file_io_count: counts.get(LexicalFeature::FileIo),
            thread_count: counts.get(LexicalFeature::Thread),
            possible_resource_leaks: estimate_resource_leaks(&counts),
            long_method_count: methods.long_method_count,
            long_class_flag: usize::from(loc > self.thresholds.long_class_lines),
            duplicate_block_count: count_duplicate_blocks(
                source.lines(),
                self.thresholds.duplicate_block_lines,
            ),
        }
    }
}

/// Analyze with the default thresholds
pub fn analyze_source(raw: &str) -> CodeMetrics {
    MetricsAnalyzer::default().analyze(raw)
}

// Denominator floored at one so empty input is well-defined.
fn percentage(part: usize, whole: usize) -> usize {
    round_half_up(part as f64 * 100.0 / whole.max(1) as f64).max(0) as usize
}
