pub use crate::domain::finder::SearchSummary;

#[derive(Debug, Clone)]
pub struct GraphSummary {
    pub source: String,
    pub node_count: usize,
    pub edge_count: usize,
}

#[derive(Debug, Clone)]
pub struct PathRequest {
    pub start: String,
    pub target: String,
    /// Stop after this many paths.
    pub limit: Option<usize>,
}

impl PathRequest {
    pub fn new(start: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            target: target.into(),
            limit: None,
        }
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone)]
pub struct PathsResponse {
    pub summary: SearchSummary,
    pub paths: Vec<Vec<String>>,
}
