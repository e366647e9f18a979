//! Configuration for codegauge
//!
//! Settings come from `.codegauge.toml`, found by walking up from the working
//! directory or passed explicitly with `--config`. Every field has a default,
//! so an empty or missing file behaves exactly like the built-in settings.

mod core;
mod loader;
mod thresholds;

pub use self::core::{CodegaugeConfig, ReportConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
pub use thresholds::{
    default_duplicate_block_lines, default_long_class_lines, default_long_method_lines,
    Thresholds,
};
