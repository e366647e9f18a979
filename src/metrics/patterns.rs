//! Lexical pattern catalogue
//!
//! Each entry maps one lexical feature to the regular expression that finds
//! it. Patterns are counted independently over the whole normalized text with
//! non-overlapping, leftmost-first matching. No parsing happens here: string
//! literals and comments are matched like any other text. Identifier classes
//! are ASCII (`[[:word:]]`); word boundaries stay Unicode-aware.

use once_cell::sync::Lazy;
use regex::Regex;

const FEATURE_COUNT: usize = 24;

/// A lexical feature counted over the whole text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalFeature {
    ClassDeclaration,
    InterfaceDeclaration,
    DecisionStatement,
    LoopStatement,
    ReturnStatement,
    ExceptionHandling,
    BranchIf,
    BranchFor,
    BranchWhile,
    BranchCase,
    Ternary,
    LogicalOperator,
    FieldDeclaration,
    StaticField,
    StaticMethod,
    Inheritance,
    PrivateField,
    Allocation,
    CollectionType,
    StringObject,
    FileIo,
    Thread,
    ResourceOpen,
    ResourceClose,
}

impl LexicalFeature {
    pub const ALL: [LexicalFeature; FEATURE_COUNT] = [
        Self::ClassDeclaration,
        Self::InterfaceDeclaration,
        Self::DecisionStatement,
        Self::LoopStatement,
        Self::ReturnStatement,
        Self::ExceptionHandling,
        Self::BranchIf,
        Self::BranchFor,
        Self::BranchWhile,
        Self::BranchCase,
        Self::Ternary,
        Self::LogicalOperator,
        Self::FieldDeclaration,
        Self::StaticField,
        Self::StaticMethod,
        Self::Inheritance,
        Self::PrivateField,
        Self::Allocation,
        Self::CollectionType,
        Self::StringObject,
        Self::FileIo,
        Self::Thread,
        Self::ResourceOpen,
        Self::ResourceClose,
    ];

    /// Features whose sum, plus one, is the whole-file cyclomatic complexity
    pub const CYCLOMATIC: [LexicalFeature; 6] = [
        Self::BranchIf,
        Self::BranchFor,
        Self::BranchWhile,
        Self::BranchCase,
        Self::Ternary,
        Self::LogicalOperator,
    ];

    /// Regular expression recognising this feature
    pub fn pattern(self) -> &'static str {
        match self {
            Self::ClassDeclaration => r"\bclass\s+[[:word:]]+",
            Self::InterfaceDeclaration => r"\binterface\s+[[:word:]]+",
            Self::DecisionStatement => r"\bif\b|\belse if\b|\bswitch\b|\bcase\b",
            Self::LoopStatement => r"\bfor\b|\bwhile\b|\bdo\b",
            Self::ReturnStatement => r"\breturn\b",
            Self::ExceptionHandling => r"\btry\b|\bcatch\b|\bfinally\b",
            Self::BranchIf => r"\bif\b",
            Self::BranchFor => r"\bfor\b",
            Self::BranchWhile => r"\bwhile\b",
            Self::BranchCase => r"\bcase\b",
            Self::Ternary => r"\?\s*",
            Self::LogicalOperator => r"&&|\|\|",
            Self::FieldDeclaration => {
                r"(?m)(^|\s)(private|public|protected)?\s*(static\s+)?[[:word:]<>,\[\]]+\s+[[:word:]]+\s*(=|;)"
            }
            Self::StaticField => r"\bstatic\s+[^;(]+;",
            Self::StaticMethod => r"\bstatic\s+[^(]+\(",
            Self::Inheritance => r"\bextends\b|\bimplements\b",
            Self::PrivateField => r"\bprivate\s+[^;(]+;",
            Self::Allocation => r"\bnew\s+[A-Za-z0-9_<>]+",
            Self::CollectionType => r"ArrayList\b|HashMap\b|HashSet\b|LinkedList\b",
            Self::StringObject => r"\bnew\s+String\b",
            Self::FileIo => {
                r"\bFile\b|FileInputStream\b|FileOutputStream\b|BufferedReader\b|BufferedWriter\b|FileReader\b|FileWriter\b"
            }
            Self::Thread => r"\bThread\b|\bRunnable\b|ExecutorService\b|Executor\b",
            Self::ResourceOpen => {
                r"new\s+FileInputStream|new\s+FileOutputStream|new\s+BufferedReader|new\s+FileReader|openStream\("
            }
            Self::ResourceClose => r"\.close\s*\(",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

static CATALOGUE: Lazy<Vec<(LexicalFeature, Regex)>> = Lazy::new(|| {
    LexicalFeature::ALL
        .iter()
        .map(|&feature| (feature, Regex::new(feature.pattern()).unwrap()))
        .collect()
});

/// Occurrence count of every catalogue entry for one text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternCounts {
    counts: [usize; FEATURE_COUNT],
}

impl PatternCounts {
    /// Count every catalogue entry over `text`
    pub fn scan(text: &str) -> Self {
        let mut counts = [0; FEATURE_COUNT];
        for (feature, regex) in CATALOGUE.iter() {
            counts[feature.index()] = regex.find_iter(text).count();
        }
        Self { counts }
    }

    pub fn get(&self, feature: LexicalFeature) -> usize {
        self.counts[feature.index()]
    }

    /// Whole-file cyclomatic complexity: one plus every branching token
    pub fn cyclomatic_complexity(&self) -> usize {
        1 + LexicalFeature::CYCLOMATIC
            .iter()
            .map(|&feature| self.get(feature))
            .sum::<usize>()
    }

    /// Object allocations plus mentions of the common collection types
    pub fn memory_allocations(&self) -> usize {
        self.get(LexicalFeature::Allocation) + self.get(LexicalFeature::CollectionType)
    }
}

/// Count non-overlapping matches of an arbitrary regex
pub fn count_matches(regex: &Regex, text: &str) -> usize {
    regex.find_iter(text).count()
}
