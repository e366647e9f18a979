use crate::core::errors::Error;
use crate::core::FileReport;
use crate::io::output::ReportWriter;
use anyhow::Result;
use html_escape::encode_text;
use std::borrow::Cow;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub const DEFAULT_TEMPLATE: &str = include_str!("templates/report.html");

enum TemplateSource {
    Builtin,
    File(PathBuf),
}

pub struct HtmlWriter<W: Write> {
    writer: W,
    template: TemplateSource,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            template: TemplateSource::Builtin,
        }
    }

    /// Use a template read from `path` at render time
    pub fn with_template_file(writer: W, path: PathBuf) -> Self {
        Self {
            writer,
            template: TemplateSource::File(path),
        }
    }

    fn load_template(&self) -> Result<Cow<'static, str>, Error> {
        match &self.template {
            TemplateSource::Builtin => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
            TemplateSource::File(path) => fs::read_to_string(path)
                .map(Cow::Owned)
                .map_err(|e| Error::Template(format!("cannot read {}: {}", path.display(), e))),
        }
    }

    /// Full document for `report`; template failures become an error page
    pub fn render(&self, report: &FileReport) -> String {
        match self.load_template() {
            Ok(template) => render_html(&template, report),
            Err(e) => {
                tracing::warn!("HTML template unavailable: {}", e);
                render_error_page(&e.to_string())
            }
        }
    }
}

impl<W: Write> ReportWriter for HtmlWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> Result<()> {
        let html = self.render(report);
        write!(self.writer, "{}", html)?;
        Ok(())
    }
}

/// Substitute the report into `template`
pub fn render_html(template: &str, report: &FileReport) -> String {
    template
        .replace("{{fileName}}", &encode_text(&report.name))
        .replace("{{metricsTable}}", &metrics_table(report))
        .replace("{{scores}}", &scores_list(report))
}

pub fn render_error_page(message: &str) -> String {
    format!(
        "<html><body><h1>Error generating report</h1><pre>{}</pre></body></html>",
        encode_text(message)
    )
}

fn metrics_table(report: &FileReport) -> String {
    let rows: String = report
        .metric_entries()
        .into_iter()
        .map(|(name, value)| format!("<tr><td>{}</td><td>{}</td></tr>", encode_text(name), value))
        .collect();
    format!("<table><tr><th>Metric</th><th>Value</th></tr>{rows}</table>")
}

fn scores_list(report: &FileReport) -> String {
    let items: String = report
        .score_entries()
        .into_iter()
        .map(|(name, value)| format!("<li><b>{}:</b> {}%</li>", encode_text(name), value))
        .collect();
    format!("<ul>{items}</ul>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsAnalyzer;
    use tempfile::TempDir;

    fn report(name: &str) -> FileReport {
        FileReport::analyze(name, "", &MetricsAnalyzer::default())
    }

    #[test]
    fn test_placeholders_substituted() {
        let template = "<h1>{{fileName}}</h1>{{metricsTable}}{{scores}}";
        let html = render_html(template, &report("A.java"));

        assert!(html.starts_with("<h1>A.java</h1><table><tr><th>Metric</th><th>Value</th></tr>"));
        assert!(html.contains("<tr><td>Total Lines of Code (LOC)</td><td>1</td></tr>"));
        assert!(html.contains("<tr><td>File/IO Operations Count</td><td>0</td></tr>"));
        assert!(html.ends_with(
            "<ul><li><b>DocumentationScore:</b> 100%</li><li><b>QualityScore:</b> 100%</li><li><b>MemoryScore:</b> 100%</li></ul>"
        ));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_metric_names_are_escaped() {
        let html = render_html("{{metricsTable}}", &report("A.java"));
        assert!(html.contains("<td>File/IO Operations Count</td>"));
        assert!(html.contains("Long Method Count (&gt;40 LOC)"));
        assert!(!html.contains("(>40 LOC)"));
    }

    #[test]
    fn test_file_name_is_escaped() {
        let html = render_html("{{fileName}}", &report("<A&B>.java"));
        assert_eq!(html, "&lt;A&amp;B&gt;.java");
    }

    #[test]
    fn test_builtin_template() {
        let mut buffer = Vec::new();
        HtmlWriter::new(&mut buffer)
            .write_report(&report("A.java"))
            .unwrap();
        let html = String::from_utf8(buffer).unwrap();

        assert!(html.contains("<title>Code metrics: A.java</title>"));
        assert!(html.contains("<li><b>MemoryScore:</b> 100%</li>"));
    }

    #[test]
    fn test_custom_template_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.html");
        fs::write(&path, "<p>{{fileName}}</p>").unwrap();

        let writer = HtmlWriter::with_template_file(Vec::new(), path);
        assert_eq!(writer.render(&report("A.java")), "<p>A.java</p>");
    }

    #[test]
    fn test_missing_template_renders_error_page() {
        let dir = TempDir::new().unwrap();
        let writer = HtmlWriter::with_template_file(Vec::new(), dir.path().join("missing.html"));
        let html = writer.render(&report("A.java"));

        assert!(html.starts_with("<html><body><h1>Error generating report</h1><pre>"));
        assert!(html.contains("missing.html"));
    }
}
