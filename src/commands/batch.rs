use crate::analyzers::{analyze_files, BatchSummary};
use crate::cli::setup::{configure_thread_pool, get_worker_count};
use crate::config::load_config;
use crate::core::FileReport;
use crate::io::output::{create_writer, OutputFormat, RenderOptions};
use crate::io::writers::HtmlWriter;
use crate::io::{ensure_dir, find_source_files, write_file};
use crate::observability::{set_phase, AnalysisPhase};
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub paths: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub extensions: Option<Vec<String>>,
    pub jobs: usize,
    pub plain: bool,
    pub verbosity: u8,
}

pub fn handle_batch(config: BatchConfig) -> Result<()> {
    let settings = load_config(config.config.as_deref())?;
    configure_thread_pool(config.jobs);

    let extensions = config
        .extensions
        .clone()
        .unwrap_or_else(|| settings.report.extensions.clone());

    let files = {
        let _phase = set_phase(AnalysisPhase::FileDiscovery);
        find_source_files(&config.paths, &extensions).context("failed to collect source files")?
    };
    if files.is_empty() {
        tracing::warn!("no files with extensions {:?} found", extensions);
    }
    tracing::info!(
        files = files.len(),
        workers = get_worker_count(config.jobs),
        "starting batch analysis"
    );

    let outcomes = analyze_files(&files, &settings.thresholds);
    let summary = BatchSummary::from_outcomes(&outcomes);
    let reports: Vec<FileReport> = outcomes.into_iter().filter_map(|o| o.result.ok()).collect();

    let _phase = set_phase(AnalysisPhase::Rendering);
    let options = RenderOptions {
        template: settings.report.template,
        verbosity: config.verbosity,
        plain: config.plain || config.output.is_some(),
    };

    match (config.format, &config.output) {
        (OutputFormat::Html, Some(dir)) => write_html_reports(&reports, dir, &options)?,
        (OutputFormat::Html, None) => {
            anyhow::bail!("HTML batch output needs an output directory (--output <DIR>)")
        }
        (format, output) => {
            let sink = super::open_output(output.as_deref())?;
            create_writer(format, sink, &options).write_reports(&reports)?;
        }
    }

    if summary.failed > 0 {
        tracing::warn!(
            "{} of {} files could not be analyzed",
            summary.failed,
            summary.failed + summary.analyzed
        );
        if summary.analyzed == 0 {
            anyhow::bail!("none of the {} files could be analyzed", summary.failed);
        }
    }
    Ok(())
}

/// One HTML document per report inside `dir`
fn write_html_reports(reports: &[FileReport], dir: &Path, options: &RenderOptions) -> Result<()> {
    ensure_dir(dir)?;
    for (report, file_name) in reports.iter().zip(unique_report_file_names(reports)) {
        let writer = match &options.template {
            Some(template) => HtmlWriter::with_template_file(std::io::sink(), template.clone()),
            None => HtmlWriter::new(std::io::sink()),
        };
        let path = dir.join(file_name);
        write_file(&path, &writer.render(report))?;
        tracing::debug!("wrote {}", path.display());
    }
    Ok(())
}

/// Flatten a report name into a single file name
fn report_file_name(name: &str) -> String {
    let flat: String = name
        .trim_start_matches("./")
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            other => other,
        })
        .collect();
    format!("{}.{}", flat.trim_start_matches('_'), OutputFormat::Html.extension())
}

/// Report file names, with `-2`, `-3`, ... before the extension when two
/// paths flatten to the same name
fn unique_report_file_names(reports: &[FileReport]) -> Vec<String> {
    let mut used = HashSet::new();
    reports
        .iter()
        .map(|report| {
            let base = report_file_name(&report.name);
            let mut name = base.clone();
            let mut suffix = 2;
            while !used.insert(name.clone()) {
                let stem = base.strip_suffix(".html").unwrap_or(base.as_str());
                name = format!("{stem}-{suffix}.html");
                suffix += 1;
            }
            if name != base {
                tracing::warn!("{} would overwrite {}; writing {}", report.name, base, name);
            }
            name
        })
        .collect()
}
