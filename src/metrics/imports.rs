//! Import-based coupling estimate

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static IMPORT_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^import\s+([[:word:].]+)").unwrap());

/// Top-level package of an import path: everything before the last `.`
///
/// `java.util.List` becomes `java.util`; a path without a separator is
/// returned whole.
pub fn package_prefix(path: &str) -> &str {
    match path.rfind('.') {
        Some(idx) => &path[..idx],
        None => path,
    }
}

/// Distinct package prefixes imported by `text`, sorted
///
/// Only declarations starting in the first column are recognised.
/// `import static a.B.c` yields the prefix `static` because the path
/// capture stops at the first space.
pub fn imported_packages(text: &str) -> BTreeSet<&str> {
    IMPORT_DECLARATION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|path| package_prefix(path.as_str()))
        .collect()
}

/// Number of distinct imported packages, used as a coupling proxy
pub fn count_unique_imports(text: &str) -> usize {
    imported_packages(text).len()
}
