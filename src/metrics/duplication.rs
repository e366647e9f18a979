use std::collections::HashMap;
use xxhash_rust::xxh64::xxh64;

/// A window of lines whose trimmed text occurs more than once
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateBlock {
    pub hash: u64,
    pub lines: usize,
    /// 1-based first line of every occurrence, ascending
    pub start_lines: Vec<usize>,
}

/// Find repeated windows of `block_size` lines
///
/// Every window position is considered, so overlapping windows inside a
/// longer repeated region each produce their own block. Blank lines are kept:
/// a run of blank lines longer than the window is itself a duplicate.
pub fn detect_duplicate_blocks<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    block_size: usize,
) -> Vec<DuplicateBlock> {
    let lines: Vec<&str> = lines.into_iter().collect();
    let mut occurrences: HashMap<u64, Vec<usize>> = HashMap::new();

    for (start_line, chunk) in extract_chunks(&lines, block_size) {
        occurrences
            .entry(calculate_hash(&chunk))
            .or_default()
            .push(start_line);
    }

    let mut blocks: Vec<DuplicateBlock> = occurrences
        .into_iter()
        .filter(|(_, starts)| starts.len() > 1)
        .map(|(hash, start_lines)| DuplicateBlock {
            hash,
            lines: block_size,
            start_lines,
        })
        .collect();

    blocks.sort_by_key(|block| block.start_lines[0]);
    blocks
}

/// Number of distinct windows occurring at least twice
pub fn count_duplicate_blocks<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    block_size: usize,
) -> usize {
    detect_duplicate_blocks(lines, block_size).len()
}

fn extract_chunks(lines: &[&str], chunk_size: usize) -> Vec<(usize, String)> {
    if chunk_size == 0 || lines.len() < chunk_size {
        return Vec::new();
    }

    lines
        .windows(chunk_size)
        .enumerate()
        .map(|(i, window)| (i + 1, normalize_chunk(window)))
        .collect()
}

// Canonical key: each line trimmed and newline-terminated.
fn normalize_chunk(window: &[&str]) -> String {
    window.iter().fold(String::new(), |mut key, line| {
        key.push_str(line.trim());
        key.push('\n');
        key
    })
}

fn calculate_hash(content: &str) -> u64 {
    xxh64(content.as_bytes(), 0)
}
