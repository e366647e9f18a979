use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::thresholds::Thresholds;

/// Root configuration structure for codegauge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CodegaugeConfig {
    /// Size thresholds for the metrics engine
    #[serde(default)]
    pub thresholds: Thresholds,

    /// Report rendering configuration
    #[serde(default)]
    pub report: ReportConfig,
}

/// Report rendering and file selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// HTML template replacing the built-in one
    #[serde(default)]
    pub template: Option<PathBuf>,

    /// File extensions picked up when a directory is analyzed
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template: None,
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["java".to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_default() {
        let config: CodegaugeConfig = toml::from_str("").unwrap();
        assert_eq!(config, CodegaugeConfig::default());
        assert_eq!(config.report.extensions, vec!["java"]);
    }

    #[test]
    fn test_report_section() {
        let config: CodegaugeConfig = toml::from_str(
            "[report]\ntemplate = \"report.html\"\nextensions = [\"java\", \"kt\"]\n",
        )
        .unwrap();
        assert_eq!(config.report.template, Some(PathBuf::from("report.html")));
        assert_eq!(config.report.extensions, vec!["java", "kt"]);
        assert_eq!(config.thresholds, Thresholds::default());
    }
}
