use crate::core::FileReport;
use crate::io::output::ReportWriter;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::io::Write;

/// Ordered (name, value) pairs serialized as a JSON object
struct OrderedEntries<'a, V>(&'a [(&'static str, V)]);

impl<V: Serialize> Serialize for OrderedEntries<'_, V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, value)| (name, value)))
    }
}

/// JSON view of a report keyed by display names
struct JsonReport<'a>(&'a FileReport);

impl Serialize for JsonReport<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let metrics = self.0.metric_entries();
        let scores = self.0.score_entries();

        let mut state = serializer.serialize_struct("FileReport", 3)?;
        state.serialize_field("file", &self.0.name)?;
        state.serialize_field("metrics", &OrderedEntries(&metrics))?;
        state.serialize_field("scores", &OrderedEntries(&scores))?;
        state.end()
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportWriter for JsonWriter<W> {
    fn write_report(&mut self, report: &FileReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&JsonReport(report))?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_reports(&mut self, reports: &[FileReport]) -> anyhow::Result<()> {
        let views: Vec<JsonReport> = reports.iter().map(JsonReport).collect();
        let json = serde_json::to_string_pretty(&views)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}
