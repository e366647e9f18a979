//! Brace-depth scanning
//!
//! Braces are treated as structural wherever they appear, including inside
//! string literals, character literals and comments. Method body extraction
//! and the nesting metric both depend on this, so it must stay that way.

/// Maximum brace depth reached anywhere in `text`
///
/// A stray `}` can drive the running depth below zero; the maximum never
/// drops below zero because it starts there.
pub fn max_nesting_depth(text: &str) -> usize {
    let mut depth: i64 = 0;
    let mut max: i64 = 0;

    for byte in text.bytes() {
        match byte {
            b'{' => depth += 1,
            b'}' => depth -= 1,
            _ => {}
        }
        max = max.max(depth);
    }

    max as usize
}

/// Index of the `}` balancing the `{` at `open_index`
///
/// Returns `None` when `open_index` is not an opening brace or the text ends
/// before the scope is closed. Indices are byte offsets; braces are ASCII so
/// they never fall inside a multi-byte character.
pub fn match_brace(text: &str, open_index: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open_index) != Some(&b'{') {
        return None;
    }

    let mut depth = 0usize;
    for (offset, &byte) in bytes[open_index..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open_index + offset);
                }
            }
            _ => {}
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nesting_depth() {
        assert_eq!(max_nesting_depth(""), 0);
        assert_eq!(max_nesting_depth("{}"), 1);
        assert_eq!(max_nesting_depth("{ { } { { } } }"), 3);
    }

    #[test]
    fn test_stray_close_brace_goes_negative() {
        // The leading `}` puts the counter at -1, so the pair after it peaks at 0.
        assert_eq!(max_nesting_depth("} {}"), 0);
        assert_eq!(max_nesting_depth("} {{}}"), 1);
    }

    #[test]
    fn test_braces_in_strings_are_structural() {
        assert_eq!(max_nesting_depth(r#"{ s = "{{"; }"#), 3);
    }

    #[test]
    fn test_match_brace() {
        let text = "void f() { if (x) { y(); } }";
        let open = text.find('{').unwrap();
        assert_eq!(match_brace(text, open), Some(text.len() - 1));
    }

    #[test]
    fn test_match_brace_unbalanced() {
        assert_eq!(match_brace("{ { }", 0), None);
    }

    #[test]
    fn test_match_brace_requires_open_brace() {
        assert_eq!(match_brace("x{}", 0), None);
        assert_eq!(match_brace("{}", 5), None);
    }
}
