use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG: &str = r#"# Codegauge Configuration

[thresholds]
# Methods with more body lines than this count as long
long_method_lines = 40
# Files with more lines than this raise the long class flag
long_class_lines = 500
# Window size, in trimmed lines, for duplicate block detection
duplicate_block_lines = 5

[report]
# HTML template with {{fileName}}, {{metricsTable}} and {{scores}} placeholders
# template = "report-template.html"
extensions = ["java"]
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    init_config_at(&config_path, force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

pub fn init_config_at(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    tracing::debug!("wrote {}", config_path.display());
    Ok(())
}
