//! Line classification with block comment tracking
//!
//! # Rules
//!
//! - **Empty**: the trimmed line has zero length
//! - **Comment**: the line opens a block comment (`/*`), sits inside one, or
//!   starts with `//`
//! - **Code**: anything else
//!
//! Block mode is entered by a trimmed line starting with `/*` and left by a
//! trimmed line ending with `*/`; the closing line is still a comment.
//!
//! ## Limitations
//!
//! - Classification looks at the leading token only, so `x = 1; // note` is code
//! - A `*/` in the middle of a line does not close the block
//! - Blank lines inside a block comment count toward both the empty and the
//!   comment tally

/// Classification of a single line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineKind {
    Empty,
    Comment,
    Code,
}

/// Line tallies for one source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineTally {
    /// Lines whose trimmed form is empty
    pub empty_lines: usize,
    /// Lines inside a block comment or starting with `//`
    pub comment_lines: usize,
    /// Lines classified as code
    pub code_lines: usize,
}

/// State carried from one line to the next
#[derive(Clone, Debug, Default)]
struct CommentState {
    in_block_comment: bool,
}

/// Classify every line in order
pub fn classify_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<LineKind> {
    let mut state = CommentState::default();
    lines
        .into_iter()
        .map(|line| classify_line(line.trim(), &mut state))
        .collect()
}

/// Tally empty, comment and code lines in a single pass
pub fn tally_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> LineTally {
    let mut state = CommentState::default();
    let mut tally = LineTally::default();

    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            tally.empty_lines += 1;
        }
        match classify_line(trimmed, &mut state) {
            LineKind::Comment => tally.comment_lines += 1,
            LineKind::Code => tally.code_lines += 1,
            LineKind::Empty => {}
        }
    }

    tally
}

fn classify_line(trimmed: &str, state: &mut CommentState) -> LineKind {
    if trimmed.starts_with("/*") {
        state.in_block_comment = true;
    }

    let kind = if state.in_block_comment || trimmed.starts_with("//") {
        LineKind::Comment
    } else if trimmed.is_empty() {
        LineKind::Empty
    } else {
        LineKind::Code
    };

    if trimmed.ends_with("*/") {
        state.in_block_comment = false;
    }

    kind
}
