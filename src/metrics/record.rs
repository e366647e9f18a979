use serde::{Deserialize, Serialize};

/// The 29 static metrics of one source text
///
/// Every value is a heuristic count from lexical matching. The record is
/// produced once per analysis and never merged with other files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeMetrics {
    // Size and documentation
    pub loc: usize,
    pub empty_lines: usize,
    pub comment_lines: usize,
    /// Comment lines as a rounded percentage of all lines
    pub comment_to_code_ratio: usize,
    pub class_count: usize,
    pub interface_count: usize,
    pub method_count: usize,
    pub avg_method_length: usize,

    // Complexity
    /// Whole-file value: one plus every branching token
    pub cyclomatic_complexity: usize,
    pub max_nesting_depth: usize,
    pub decision_statements: usize,
    pub loop_count: usize,
    pub return_count: usize,
    pub recursion_count: usize,
    pub exception_handling_count: usize,

    // Structure
    pub field_count: usize,
    pub static_field_count: usize,
    pub static_method_count: usize,
    /// Occurrences of `extends` and `implements`
    pub inheritance_count: usize,
    pub private_field_count: usize,
    /// Distinct imported packages
    pub import_count: usize,

    // Resources and style
    pub memory_allocation_count: usize,
    pub string_object_count: usize,
    pub file_io_count: usize,
    pub thread_count: usize,
    pub possible_resource_leaks: usize,
    pub long_method_count: usize,
    /// 0 or 1
    pub long_class_flag: usize,
    pub duplicate_block_count: usize,
}

/// Display grouping of the metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MetricFamily {
    SizeAndDocumentation,
    Complexity,
    Structure,
    ResourcesAndStyle,
}

impl MetricFamily {
    pub const ALL: [MetricFamily; 4] = [
        Self::SizeAndDocumentation,
        Self::Complexity,
        Self::Structure,
        Self::ResourcesAndStyle,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::SizeAndDocumentation => "Size & Documentation",
            Self::Complexity => "Complexity",
            Self::Structure => "Object-Oriented Structure",
            Self::ResourcesAndStyle => "Resources & Style",
        }
    }
}

/// A display name bound to the field it reads
#[derive(Clone, Copy)]
pub struct MetricField {
    pub name: &'static str,
    pub family: MetricFamily,
    pub read: fn(&CodeMetrics) -> usize,
}

impl std::fmt::Debug for MetricField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricField")
            .field("name", &self.name)
            .field("family", &self.family)
            .finish()
    }
}

const fn field(
    name: &'static str,
    family: MetricFamily,
    read: fn(&CodeMetrics) -> usize,
) -> MetricField {
    MetricField { name, family, read }
}

use MetricFamily::{Complexity, ResourcesAndStyle, SizeAndDocumentation, Structure};

/// Presentation order of the metrics; renderers must follow it
pub const METRIC_FIELDS: [MetricField; 29] = [
    field("Total Lines of Code (LOC)", SizeAndDocumentation, |m| m.loc),
    field("Empty Lines", SizeAndDocumentation, |m| m.empty_lines),
    field("Comment Lines", SizeAndDocumentation, |m| m.comment_lines),
    field("Comment-to-Code Ratio (%)", SizeAndDocumentation, |m| m.comment_to_code_ratio),
    field("Number of Classes", SizeAndDocumentation, |m| m.class_count),
    field("Number of Interfaces", SizeAndDocumentation, |m| m.interface_count),
    field("Number of Methods", SizeAndDocumentation, |m| m.method_count),
    field("Average Method Length (lines)", SizeAndDocumentation, |m| m.avg_method_length),
    field("Cyclomatic Complexity", Complexity, |m| m.cyclomatic_complexity),
    field("Maximum Nesting Depth", Complexity, |m| m.max_nesting_depth),
    field("Decision Statements", Complexity, |m| m.decision_statements),
    field("Loop Count", Complexity, |m| m.loop_count),
    field("Return Statements", Complexity, |m| m.return_count),
    field("Recursion Occurrences", Complexity, |m| m.recursion_count),
    field("Exception Handling Count", Complexity, |m| m.exception_handling_count),
    field("Field Count", Structure, |m| m.field_count),
    field("Static Field Count", Structure, |m| m.static_field_count),
    field("Static Method Count", Structure, |m| m.static_method_count),
    field("Inheritance Occurrences", Structure, |m| m.inheritance_count),
    field("Private Field Count", Structure, |m| m.private_field_count),
    field("Imports (Coupling)", Structure, |m| m.import_count),
    field("Memory Allocation Count", ResourcesAndStyle, |m| m.memory_allocation_count),
    field("String Object Creation Count", ResourcesAndStyle, |m| m.string_object_count),
    field("File/IO Operations Count", ResourcesAndStyle, |m| m.file_io_count),
    field("Thread Usage Count", ResourcesAndStyle, |m| m.thread_count),
    field("Possible Resource Leaks", ResourcesAndStyle, |m| m.possible_resource_leaks),
    field("Long Method Count (>40 LOC)", ResourcesAndStyle, |m| m.long_method_count),
    field("Long Class Flag (>500 LOC)", ResourcesAndStyle, |m| m.long_class_flag),
    field("Duplicate Block Count", ResourcesAndStyle, |m| m.duplicate_block_count),
];

impl CodeMetrics {
    /// Ordered (display name, value) pairs for renderers
    pub fn entries(&self) -> Vec<(&'static str, usize)> {
        METRIC_FIELDS
            .iter()
            .map(|field| (field.name, (field.read)(self)))
            .collect()
    }

    /// Ordered entries of one family
    pub fn family_entries(&self, family: MetricFamily) -> Vec<(&'static str, usize)> {
        METRIC_FIELDS
            .iter()
            .filter(|field| field.family == family)
            .map(|field| (field.name, (field.read)(self)))
            .collect()
    }

    /// Look up a value by display name
    pub fn get(&self, name: &str) -> Option<usize> {
        METRIC_FIELDS
            .iter()
            .find(|field| field.name == name)
            .map(|field| (field.read)(self))
    }
}
