//! Resource imbalance estimate
//!
//! Compares how often streams and readers are opened with how often
//! `.close(` is called. There is no flow or lifetime tracking, and
//! try-with-resources blocks look like leaks.

use super::patterns::{LexicalFeature, PatternCounts};

/// Opening constructs minus explicit close calls, floored at zero
pub fn estimate_resource_leaks(counts: &PatternCounts) -> usize {
    counts
        .get(LexicalFeature::ResourceOpen)
        .saturating_sub(counts.get(LexicalFeature::ResourceClose))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaks(text: &str) -> usize {
        estimate_resource_leaks(&PatternCounts::scan(text))
    }

    #[test]
    fn test_unclosed_reader() {
        assert_eq!(leaks("BufferedReader r = new BufferedReader(in);"), 1);
    }

    #[test]
    fn test_closed_reader() {
        assert_eq!(leaks("FileReader r = new FileReader(f);\nr.close();"), 0);
    }

    #[test]
    fn test_extra_closes_never_negative() {
        assert_eq!(leaks("a.close(); b.close ();"), 0);
    }

    #[test]
    fn test_open_stream_call() {
        assert_eq!(leaks("InputStream in = url.openStream();"), 1);
    }
}
