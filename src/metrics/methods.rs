//! Method detection by declaration shape
//!
//! A declaration starts at the beginning of the text or after a run of
//! modifiers and whitespace, then has a type token, an identifier, a
//! parenthesized parameter list and an opening brace. Control statements
//! such as `} else if (x) {` fit the same shape and are counted too; this is
//! a lexical heuristic, not a parser. Identifiers are ASCII word characters.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::patterns::count_matches;
use super::scope::match_brace;

static METHOD_DECLARATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?:^|(?:public|private|protected|static|\s)+)[[:word:]<>,\[\]]+\s+([[:word:]]+)\s*\([^)]*\)\s*\{",
    )
    .unwrap()
});

/// One detected method declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDeclaration {
    pub name: String,
    /// Byte offset of the `{` opening the body
    pub open_brace: usize,
    /// Byte offset of the balancing `}`, if the text closes the scope
    pub close_brace: Option<usize>,
}

impl MethodDeclaration {
    /// Lines spanned by the body: newlines between the braces, plus one
    pub fn body_lines(&self, text: &str) -> Option<usize> {
        let close = self.close_brace?;
        let body = &text[self.open_brace + 1..close];
        Some(body.matches('\n').count() + 1)
    }
}

/// Method-level metrics for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MethodSummary {
    pub method_count: usize,
    /// Truncated mean of body lines over methods with a balanced body
    pub average_length: usize,
    pub long_method_count: usize,
    pub recursion_count: usize,
}

/// Find every declaration-shaped site, in text order
pub fn find_methods(text: &str) -> Vec<MethodDeclaration> {
    METHOD_DECLARATION
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?.as_str().to_string();
            // The match always ends with the opening brace.
            let open_brace = whole.end() - 1;
            Some(MethodDeclaration {
                name,
                open_brace,
                close_brace: match_brace(text, open_brace),
            })
        })
        .collect()
}

/// Summarize the methods of `text`
///
/// Methods whose body never closes still count toward `method_count` but
/// are left out of the average and the long-method count.
pub fn summarize_methods(text: &str, long_method_lines: usize) -> MethodSummary {
    let methods = find_methods(text);
    let body_lengths: Vec<usize> = methods
        .iter()
        .filter_map(|m| m.body_lines(text))
        .collect();

    let average_length = if body_lengths.is_empty() {
        0
    } else {
        body_lengths.iter().sum::<usize>() / body_lengths.len()
    };

    MethodSummary {
        method_count: methods.len(),
        average_length,
        long_method_count: body_lengths
            .iter()
            .filter(|&&lines| lines > long_method_lines)
            .count(),
        recursion_count: count_recursive_methods(text, &methods),
    }
}

/// Count distinct method names called more than once anywhere in the text
///
/// The declaration itself is one call-shaped occurrence, so a second one is
/// taken as a self-call. Overloads and unrelated calls to the same name are
/// indistinguishable here and count as recursion.
pub fn count_recursive_methods(text: &str, methods: &[MethodDeclaration]) -> usize {
    let names: BTreeSet<&str> = methods.iter().map(|m| m.name.as_str()).collect();

    names
        .into_iter()
        .filter(|name| {
            Regex::new(&format!(r"\b{}\s*\(", regex::escape(name)))
                .map(|call| count_matches(&call, text) > 1)
                .unwrap_or(false)
        })
        .count()
}
