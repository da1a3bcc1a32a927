use crate::adapters::render::{Color, write_colored};
use crate::domain::finder::SearchSummary;
use crate::domain::ports::PathSink;
use anyhow::Result;
use std::io::Write;

const SEPARATOR: &str = " -> ";

/// Prints each path as `start -> hop -> ... -> target`.
///
/// Paths are separated by a blank line. With colour enabled the endpoints are
/// red and the intermediate hops green.
pub struct TextRenderer<W: Write> {
    out: W,
    color: bool,
    emitted: usize,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            emitted: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, color: Color) -> Option<Color> {
        self.color.then_some(color)
    }
}

impl<W: Write> PathSink for TextRenderer<W> {
    fn path(&mut self, path: &[String]) -> Result<()> {
        if self.emitted > 0 {
            writeln!(self.out)?;
        }
        self.emitted += 1;

        let last = path.len().saturating_sub(1);
        for (i, node) in path.iter().enumerate() {
            if i > 0 {
                self.out.write_all(SEPARATOR.as_bytes())?;
            }
            let color = self.paint(if i == 0 || i == last {
                Color::Red
            } else {
                Color::Green
            });
            write_colored(&mut self.out, node, color)?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    fn finish(&mut self, summary: &SearchSummary) -> Result<()> {
        if summary.truncated {
            if summary.paths_found > 0 {
                writeln!(self.out)?;
            }
            let noun = if summary.paths_found == 1 { "path" } else { "paths" };
            let msg = format!("Stopped after {} {}.", summary.paths_found, noun);
            let color = self.paint(Color::Yellow);
            write_colored(&mut self.out, &msg, color)?;
            writeln!(self.out)?;
        } else if summary.paths_found == 0 {
            let msg = format!(
                "Could not find path between \"{}\" and \"{}\"",
                summary.start, summary.target
            );
            let color = self.paint(Color::Red);
            write_colored(&mut self.out, &msg, color)?;
            writeln!(self.out)?;
        }
        self.out.flush()?;
        Ok(())
    }
}
