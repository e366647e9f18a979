use crate::core::FileReport;
use crate::io::output::ReportWriter;
use crate::metrics::MetricFamily;
use crate::scoring::ScoreCalculator;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════";

pub struct TerminalWriter<W: Write> {
    writer: W,
    verbosity: u8,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            verbosity: 0,
            plain: false,
        }
    }

    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn with_plain(mut self, plain: bool) -> Self {
        self.plain = plain;
        self
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.color(color).bold().to_string()
        }
    }

    fn write_header(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let rule = self.paint(RULE, Color::Cyan);
        let title = self.paint(&format!("  CODE METRICS  {}", report.name), Color::Cyan);
        writeln!(self.writer, "{rule}")?;
        writeln!(self.writer, "{title}")?;
        writeln!(self.writer, "{rule}")?;
        Ok(())
    }

    fn write_metrics(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["Metric", "Value"]);

        for family in MetricFamily::ALL {
            table.add_row(vec![format!("[{}]", family.title()), String::new()]);
            for (name, value) in report.metrics.family_entries(family) {
                table.add_row(vec![format!("  {name}"), value.to_string()]);
            }
        }

        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_scores(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let heading = self.paint("Scores", Color::White);
        writeln!(self.writer)?;
        writeln!(self.writer, "{heading}")?;
        for (name, value) in report.score_entries() {
            let shown = self.paint(&format!("{value}%"), score_color(value));
            writeln!(self.writer, "  {name}: {shown}")?;
        }
        Ok(())
    }

    fn write_penalties(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let quality = ScoreCalculator::quality_penalties(&report.metrics);
        let memory = ScoreCalculator::memory_penalties(&report.metrics);

        writeln!(self.writer)?;
        writeln!(self.writer, "Quality penalties ({:.1} total)", quality.total())?;
        writeln!(self.writer, "  complexity:    -{:.1}", quality.complexity)?;
        writeln!(self.writer, "  nesting:       -{:.1}", quality.nesting)?;
        writeln!(self.writer, "  long methods:  -{:.1}", quality.long_methods)?;
        writeln!(self.writer, "  duplication:   -{:.1}", quality.duplication)?;
        writeln!(self.writer, "  encapsulation: -{:.1}", quality.encapsulation)?;
        writeln!(self.writer, "Memory penalties ({:.1} total)", memory.total())?;
        writeln!(self.writer, "  allocations:    -{:.1}", memory.allocations)?;
        writeln!(self.writer, "  resource leaks: -{:.1}", memory.resource_leaks)?;
        writeln!(self.writer, "  string objects: -{:.1}", memory.string_objects)?;
        Ok(())
    }
}

impl<W: Write> ReportWriter for TerminalWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        self.write_header(report)?;
        self.write_metrics(report)?;
        self.write_scores(report)?;
        if self.verbosity > 0 {
            self.write_penalties(report)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

fn score_color(value: u32) -> Color {
    match value {
        75.. => Color::Green,
        50..=74 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::MetricsAnalyzer;
    use indoc::indoc;

    fn render(source: &str, verbosity: u8) -> String {
        let report = FileReport::analyze("Shop.java", source, &MetricsAnalyzer::default());
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer)
            .with_plain(true)
            .with_verbosity(verbosity)
            .write_report(&report)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    const SHOP: &str = indoc! {"
        public class Shop {
            public int total;
            void add(int x) {
                if (x > 0) { total += x; }
            }
        }
    "};

    #[test]
    fn test_lists_every_family_and_score() {
        let output = render(SHOP, 0);

        assert!(output.contains("CODE METRICS  Shop.java"));
        for family in MetricFamily::ALL {
            assert!(output.contains(family.title()), "{}", family.title());
        }
        assert!(output.contains("Cyclomatic Complexity"));
        assert!(output.contains("DocumentationScore: 5%"));
        assert!(!output.contains("Quality penalties"));
    }

    #[test]
    fn test_verbose_shows_penalties() {
        let output = render(SHOP, 1);
        assert!(output.contains("Quality penalties"));
        assert!(output.contains("encapsulation: -10.0"));
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(score_color(100), Color::Green);
        assert_eq!(score_color(75), Color::Green);
        assert_eq!(score_color(74), Color::Yellow);
        assert_eq!(score_color(50), Color::Yellow);
        assert_eq!(score_color(49), Color::Red);
    }
}
