use serde::{Deserialize, Serialize};

/// Size thresholds used by the metrics engine
///
/// The defaults are the values the scoring constants were tuned against;
/// changing them shifts `longMethodCount`, `longClassFlag` and
/// `duplicateBlockCount` and therefore the quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Method bodies longer than this many lines count as long methods
    #[serde(default = "default_long_method_lines")]
    pub long_method_lines: usize,

    /// Files longer than this many lines raise the long class flag
    #[serde(default = "default_long_class_lines")]
    pub long_class_lines: usize,

    /// Window size, in lines, of the duplicate block detector
    #[serde(default = "default_duplicate_block_lines")]
    pub duplicate_block_lines: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            long_method_lines: default_long_method_lines(),
            long_class_lines: default_long_class_lines(),
            duplicate_block_lines: default_duplicate_block_lines(),
        }
    }
}

impl Thresholds {
    /// Check that every threshold is usable
    pub fn validate(&self) -> Result<(), String> {
        if self.long_method_lines == 0 {
            return Err("thresholds.long_method_lines must be at least 1".to_string());
        }
        if self.duplicate_block_lines == 0 {
            return Err("thresholds.duplicate_block_lines must be at least 1".to_string());
        }
        Ok(())
    }
}

pub fn default_long_method_lines() -> usize {
    40
}
pub fn default_long_class_lines() -> usize {
    500
}
pub fn default_duplicate_block_lines() -> usize {
    5
}
