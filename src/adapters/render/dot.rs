use crate::domain::finder::SearchSummary;
use crate::domain::ports::PathSink;
use anyhow::Result;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;
use std::io::Write;

/// Collects the union of all found paths and prints it as a Graphviz digraph.
///
/// Edge labels count how many of the found paths use that call.
pub struct DotRenderer<W: Write> {
    out: W,
    graph: DiGraph<String, usize>,
    name_to_node: HashMap<String, NodeIndex>,
}

impl<W: Write> DotRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            graph: DiGraph::new(),
            name_to_node: HashMap::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn get_or_create_node(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.name_to_node.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(name.to_string());
        self.name_to_node.insert(name.to_string(), idx);
        idx
    }
}

impl<W: Write> PathSink for DotRenderer<W> {
    fn path(&mut self, path: &[String]) -> Result<()> {
        let nodes: Vec<NodeIndex> = path.iter().map(|n| self.get_or_create_node(n)).collect();
        for pair in nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            match self.graph.find_edge(from, to) {
                Some(edge) => self.graph[edge] += 1,
                None => {
                    self.graph.add_edge(from, to, 1);
                }
            }
        }
        Ok(())
    }

    fn finish(&mut self, _summary: &SearchSummary) -> Result<()> {
        writeln!(self.out, "{}", Dot::new(&self.graph))?;
        self.out.flush()?;
        Ok(())
    }
}
