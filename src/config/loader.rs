use std::fs;
use std::path::{Path, PathBuf};

use super::core::CodegaugeConfig;
use crate::core::errors::{Error, Result, ResultExt};

/// Name of the configuration file looked up in the directory hierarchy
pub const CONFIG_FILE_NAME: &str = ".codegauge.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to parse and validate config from TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<CodegaugeConfig> {
    let config = toml::from_str::<CodegaugeConfig>(contents)?;
    config.thresholds.validate().map_err(Error::Configuration)?;
    Ok(config)
}

/// Load an explicitly requested config file; every failure is an error
pub fn load_config_from(path: &Path) -> Result<CodegaugeConfig> {
    let contents = fs::read_to_string(path).map_err(|e| Error::read_failed(path, e))?;
    parse_and_validate_config(&contents)
        .context(format!("invalid config file {}", path.display()))
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<CodegaugeConfig> {
    let contents = match fs::read_to_string(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            tracing::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!(
                "Ignoring {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        tracing::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: &Path) -> CodegaugeConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            tracing::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            CodegaugeConfig::default()
        })
}

/// Resolve the effective configuration
///
/// An explicit path must load; otherwise the working directory hierarchy is
/// searched and defaults are used when nothing suitable is found.
pub fn load_config(explicit: Option<&Path>) -> Result<CodegaugeConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(&dir)),
        Err(e) => {
            tracing::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(CodegaugeConfig::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_ancestors_depth_limit() {
        let dirs: Vec<_> = directory_ancestors(PathBuf::from("/a/b/c/d"), 2).collect();
        assert_eq!(dirs, vec![PathBuf::from("/a/b/c/d"), PathBuf::from("/a/b/c")]);
    }

    #[test]
    fn test_discover_config_in_parent() {
        let root = TempDir::new().unwrap();
        let nested = root.path().join("src").join("app");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nlong_method_lines = 25\n",
        )
        .unwrap();

        let config = discover_config(&nested);
        assert_eq!(config.thresholds.long_method_lines, 25);
    }

    #[test]
    fn test_invalid_discovered_config_falls_back_to_defaults() {
        let root = TempDir::new().unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[thresholds]\nduplicate_block_lines = 0\n",
        )
        .unwrap();

        let config = discover_config(root.path());
        assert_eq!(config, CodegaugeConfig::default());
    }

    #[test]
    fn test_explicit_invalid_config_is_an_error() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("custom.toml");
        fs::write(&path, "[thresholds]\nlong_method_lines = 0\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
        assert!(err.to_string().starts_with("invalid config file"));
        assert!(err.to_string().contains("long_method_lines"));
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let root = TempDir::new().unwrap();
        let err = load_config(Some(&root.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, Error::FileSystem { .. }));
    }
}
