use crate::core::FileReport;
use std::io::Write;
use std::path::PathBuf;

use super::writers::{HtmlWriter, JsonWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Html,
    Terminal,
}

impl OutputFormat {
    /// File extension used when a report is written per file
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Html => "html",
            Self::Terminal => "txt",
        }
    }
}

/// Renders finished reports to some sink
pub trait ReportWriter {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()>;

    /// Write several reports one after another
    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        for report in reports {
            self.write_report(report)?;
        }
        Ok(())
    }
}

/// Options shared by the writers
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// HTML template overriding the built-in one
    pub template: Option<PathBuf>,
    /// Terminal verbosity; 1 and above adds the penalty breakdown
    pub verbosity: u8,
    /// Disable terminal colors
    pub plain: bool,
}

pub fn create_writer<'a>(
    format: OutputFormat,
    writer: Box<dyn Write + 'a>,
    options: &RenderOptions,
) -> Box<dyn ReportWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Html => Box::new(match &options.template {
            Some(path) => HtmlWriter::with_template_file(writer, path.clone()),
            None => HtmlWriter::new(writer),
        }),
        OutputFormat::Terminal => Box::new(
            TerminalWriter::new(writer)
                .with_verbosity(options.verbosity)
                .with_plain(options.plain),
        ),
    }
}
