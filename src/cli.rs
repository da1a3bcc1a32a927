use crate::adapters::render::{DotRenderer, JsonLinesRenderer, TextRenderer};
use crate::app::dto::{PathRequest, SearchSummary};
use crate::app::engine::PathEngine;
use anyhow::Result;
use clap::{CommandFactory, Parser, ValueEnum};
use std::io::{IsTerminal, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Example:
  callpath call-graph.json fcn.00114818 fcn.00115e4d

Output, when there are two relevant paths:

  fcn.00114818 -> fcn.00124ee6 -> fcn.00115e4d

  fcn.00114818 -> FunctionWithCustomName -> fcn.00115e4d

Note: some exporters drop special characters (such as '?') from function names,
but only in some contexts. Preprocess the JSON so that names match.";

#[derive(Parser, Debug)]
#[command(name = "callpath", version)]
#[command(
    about = "Finds all call paths between two functions in a call-graph exported as JSON",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Call-graph JSON file: an array of {"name", "size", "imports"} records
    pub input: PathBuf,

    /// Function the paths start from
    pub start: String,

    /// Function the paths end at
    pub target: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Stop after this many paths
    #[arg(long)]
    pub limit: Option<NonZeroUsize>,

    /// When to colour text output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `a -> b -> c`, blank line between paths
    Text,
    /// One JSON array per path per line
    Json,
    /// Graphviz digraph of all found paths
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

impl Cli {
    pub fn request(&self) -> PathRequest {
        PathRequest::new(self.start.as_str(), self.target.as_str()).with_limit(self.limit.map(NonZeroUsize::get))
    }
}

/// Full help text, printed when the arguments cannot be parsed.
pub fn usage() -> String {
    Cli::command().render_long_help().to_string()
}

/// Load the graph named on the command line and print its paths to stdout.
pub fn run(cli: &Cli) -> Result<SearchSummary> {
    let stdout = std::io::stdout().lock();
    run_to(cli, stdout, cli.color.enabled())
}

pub fn run_to<W: Write>(cli: &Cli, out: W, color: bool) -> Result<SearchSummary> {
    let engine = PathEngine::load_from_json(&cli.input)?;
    let req = cli.request();

    match cli.format {
        OutputFormat::Text => engine.find(&req, &mut TextRenderer::new(out, color)),
        OutputFormat::Json => engine.find(&req, &mut JsonLinesRenderer::new(out)),
        OutputFormat::Dot => engine.find(&req, &mut DotRenderer::new(out)),
    }
}

/// Print an error as its message followed by the underlying causes.
pub fn report_error<W: Write>(err: &anyhow::Error, mut out: W) -> std::io::Result<()> {
    writeln!(out, "{}", err)?;
    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        writeln!(out, "Details:")?;
        for cause in causes {
            writeln!(out, "  {}", cause)?;
        }
    }
    Ok(())
}
