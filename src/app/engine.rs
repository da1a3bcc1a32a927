use crate::adapters::json::JsonGraphSource;
use crate::app::dto::*;
use crate::domain::finder::PathFinder;
use crate::domain::graph::CallGraph;
use crate::domain::ports::{GraphSource, PathSink};
use anyhow::{Context as _, Result, bail};
use std::path::Path;
use std::sync::Arc;

/// Loaded call graph plus the operations the command line and tests drive.
///
/// Cheap to clone; the graph is shared read-only between clones.
#[derive(Clone)]
pub struct PathEngine {
    inner: Arc<EngineData>,
}

struct EngineData {
    source: String,
    graph: CallGraph,
}

impl PathEngine {
    /// Construct an engine from an already-built graph.
    pub fn from_prebuilt(source: impl Into<String>, graph: CallGraph) -> Self {
        Self {
            inner: Arc::new(EngineData {
                source: source.into(),
                graph,
            }),
        }
    }

    pub fn load(source: &dyn GraphSource, label: impl Into<String>) -> Result<Self> {
        let graph = source.load()?;
        let engine = Self::from_prebuilt(label, graph);
        let summary = engine.summary();
        tracing::info!(
            nodes = summary.node_count,
            edges = summary.edge_count,
            "Loaded call graph from {}",
            summary.source
        );
        Ok(engine)
    }

    pub fn load_from_json(json_path: &Path) -> Result<Self> {
        Self::load(
            &JsonGraphSource::new(json_path),
            json_path.display().to_string(),
        )
    }

    pub fn graph(&self) -> &CallGraph {
        &self.inner.graph
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            source: self.inner.source.clone(),
            node_count: self.inner.graph.node_count(),
            edge_count: self.inner.graph.edge_count(),
        }
    }

    /// Check the search preconditions.
    ///
    /// The start must have a record of its own; the target only has to be
    /// known, either as a record or as someone's import.
    pub fn validate(&self, req: &PathRequest) -> Result<()> {
        let graph = self.graph();
        if !graph.contains_node(req.start.as_str()) {
            bail!("Call graph does not contain function: \"{}\"", req.start);
        }
        if !graph.knows(req.target.as_str()) {
            bail!(
                "Call graph does not contain target function: \"{}\"",
                req.target
            );
        }
        tracing::debug!("Validated search {} -> {}", req.start, req.target);
        Ok(())
    }

    /// Stream every path of `req` into `sink`, then hand it the summary.
    pub fn find(&self, req: &PathRequest, sink: &mut dyn PathSink) -> Result<SearchSummary> {
        self.validate(req)?;

        let finder = PathFinder::new(self.graph());
        let mut paths = finder.paths(&req.start, &req.target);
        let mut found = 0;
        let mut truncated = false;

        loop {
            if let Some(limit) = req.limit
                && found >= limit
            {
                truncated = paths.next().is_some();
                break;
            }
            let Some(path) = paths.next() else {
                break;
            };
            found += 1;
            tracing::debug!(length = path.len(), "Path #{}", found);
            sink.path(&path)
                .with_context(|| format!("Failed to emit path #{}", found))?;
        }

        let summary = SearchSummary {
            start: req.start.clone(),
            target: req.target.clone(),
            paths_found: found,
            truncated,
        };
        tracing::info!(
            paths = found,
            expanded = paths.expanded(),
            truncated,
            "Search {} -> {} finished",
            req.start,
            req.target
        );
        sink.finish(&summary)?;
        Ok(summary)
    }

    /// Collect every path of `req` in discovery order.
    pub fn collect(&self, req: &PathRequest) -> Result<PathsResponse> {
        let mut collector = PathCollector::default();
        let summary = self.find(req, &mut collector)?;
        Ok(PathsResponse {
            summary,
            paths: collector.paths,
        })
    }
}

/// Sink that keeps every path it receives.
#[derive(Debug, Default)]
pub struct PathCollector {
    pub paths: Vec<Vec<String>>,
}

impl PathSink for PathCollector {
    fn path(&mut self, path: &[String]) -> Result<()> {
        self.paths.push(path.to_vec());
        Ok(())
    }

    fn finish(&mut self, _summary: &SearchSummary) -> Result<()> {
        Ok(())
    }
}
