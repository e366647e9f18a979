use crate::analyzers::analyze_file;
use crate::config::load_config;
use crate::io::output::{create_writer, OutputFormat, RenderOptions};
use crate::metrics::MetricsAnalyzer;
use crate::observability::{set_current_file, set_phase, AnalysisPhase};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub file: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub plain: bool,
    pub verbosity: u8,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = load_config(config.config.as_deref())?;
    let analyzer = MetricsAnalyzer::new(settings.thresholds);

    let report = {
        let _phase = set_phase(AnalysisPhase::Analysis);
        let _file = set_current_file(&config.file);
        analyze_file(&config.file, &analyzer)
            .with_context(|| format!("failed to analyze {}", config.file.display()))?
    };

    let _phase = set_phase(AnalysisPhase::Rendering);
    let options = RenderOptions {
        template: settings.report.template,
        verbosity: config.verbosity,
        plain: config.plain || config.output.is_some(),
    };
    let sink = super::open_output(config.output.as_deref())?;
    let mut writer = create_writer(config.format, sink, &options);
    writer.write_report(&report)?;

    if let Some(path) = &config.output {
        tracing::info!("report written to {}", path.display());
    }
    Ok(())
}
