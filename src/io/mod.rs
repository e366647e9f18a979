pub mod output;
pub mod walker;
pub mod writers;

pub use output::{create_writer, OutputFormat, RenderOptions, ReportWriter};
pub use walker::{find_source_files, FileWalker};

use crate::core::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// Read a source file as UTF-8 text
///
/// Decoding failures are reported like any other read failure; the engine
/// only ever sees text that was already decoded.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::read_failed(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::write_failed(path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
