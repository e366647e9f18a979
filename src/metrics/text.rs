//! Line-ending normalization
//!
//! Every pass of the engine reads the same canonical text: `\r\n` and lone
//! `\r` are rewritten to `\n` before anything is counted.

use std::borrow::Cow;

/// Source text with unified line endings and its line sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    lines: Vec<(usize, usize)>,
}

impl SourceText {
    pub fn new(raw: &str) -> Self {
        let text = normalize_line_endings(raw).into_owned();
        let lines = line_spans(&text);
        Self { text, lines }
    }

    /// The whole normalized text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of lines, counting a trailing empty line after a final break
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines in order, without their terminating `\n`
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines.iter().map(|&(start, end)| &self.text[start..end])
    }
}

/// Rewrite `\r\n` and `\r` to `\n`, borrowing when nothing needs to change
pub fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\r') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
}

// Empty input still yields one (empty) line.
fn line_spans(text: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, _) in text.match_indices('\n') {
        spans.push((start, idx));
        start = idx + 1;
    }
    spans.push((start, text.len()));
    spans
}
