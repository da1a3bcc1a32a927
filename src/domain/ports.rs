use crate::domain::finder::SearchSummary;
use crate::domain::graph::CallGraph;
use anyhow::Result;

/// Call-graph source port (implemented by Infrastructure)
pub trait GraphSource {
    fn load(&self) -> Result<CallGraph>;
}

/// Consumer of found paths (presentation port)
pub trait PathSink {
    /// Receive one path; called once per path, in discovery order.
    fn path(&mut self, path: &[String]) -> Result<()>;

    /// Called once after the last path.
    fn finish(&mut self, summary: &SearchSummary) -> Result<()>;
}
