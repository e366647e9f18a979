//! CLI command implementations
//!
//! - **analyze**: metrics and scores for one file
//! - **batch**: many files or directories, analyzed in parallel
//! - **init**: write a default `.codegauge.toml`

pub mod analyze;
pub mod batch;
pub mod init;

pub use analyze::{handle_analyze, AnalyzeConfig};
pub use batch::{handle_batch, BatchConfig};
pub use init::{init_config, init_config_at};

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Destination for rendered output: a created file or stdout
pub(crate) fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create output file {}", path.display()))?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}
