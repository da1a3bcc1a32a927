use crate::domain::finder::SearchSummary;
use crate::domain::ports::PathSink;
use anyhow::Result;
use std::io::Write;

/// Prints each path as a JSON array of node names, one path per line.
pub struct JsonLinesRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonLinesRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PathSink for JsonLinesRenderer<W> {
    fn path(&mut self, path: &[String]) -> Result<()> {
        serde_json::to_writer(&mut self.out, path)?;
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self, _summary: &SearchSummary) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
