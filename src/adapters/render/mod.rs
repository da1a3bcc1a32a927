//! Presentation adapters: every [`PathSink`] the command line can print with.
//!
//! [`PathSink`]: crate::domain::ports::PathSink

pub mod dot;
pub mod jsonl;
pub mod text;

pub use dot::DotRenderer;
pub use jsonl::JsonLinesRenderer;
pub use text::TextRenderer;

use std::io::{self, Write};

/// ANSI foreground colours used by the text output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Yellow,
}

impl Color {
    fn code(self) -> &'static str {
        match self {
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
        }
    }
}

const RESET: &str = "\x1b[0m";

/// Write `text`, wrapped in `color` when colouring is enabled.
pub fn write_colored<W: Write>(out: &mut W, text: &str, color: Option<Color>) -> io::Result<()> {
    match color {
        Some(c) => write!(out, "{}{}{}", c.code(), text, RESET),
        None => out.write_all(text.as_bytes()),
    }
}
