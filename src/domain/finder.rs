use crate::domain::graph::CallGraph;
use std::collections::HashSet;
use std::hash::Hash;
use std::iter::FusedIterator;
use std::slice::Iter;

/// A simple path: no node repeats, each adjacent pair is an edge.
pub type Path<N> = Vec<N>;

/// Outcome of one search, handed to the sink after the last path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSummary {
    pub start: String,
    pub target: String,
    pub paths_found: usize,
    /// True when the limit was hit while more paths remained.
    pub truncated: bool,
}

/// Path finder - enumerates every simple path between two nodes
///
/// Depth-first, successor-list order. A branch ends as soon as it reaches the
/// target, even when the target has outgoing edges of its own.
pub struct PathFinder<'g, N>
where
    N: Eq + Hash,
{
    graph: &'g CallGraph<N>,
}

impl<'g, N> PathFinder<'g, N>
where
    N: Eq + Hash + Clone,
{
    pub fn new(graph: &'g CallGraph<N>) -> Self {
        Self { graph }
    }

    /// Lazily enumerate all simple paths from `start` to `target`.
    ///
    /// Each call owns its own search state, so any number of enumerations may
    /// read the same graph concurrently.
    pub fn paths(&self, start: &N, target: &N) -> AllPaths<'g, N> {
        AllPaths {
            graph: self.graph,
            target: target.clone(),
            path: vec![start.clone()],
            visited: HashSet::new(),
            frames: Vec::new(),
            entering: true,
            expanded: 0,
        }
    }

    pub fn collect_paths(&self, start: &N, target: &N) -> Vec<Path<N>> {
        self.paths(start, target).collect()
    }

    pub fn count_paths(&self, start: &N, target: &N) -> usize {
        self.paths(start, target).count()
    }
}

/// Iterator over the simple paths of one enumeration.
///
/// The recursion is kept on an explicit stack of successor cursors, one per
/// expanded node on the current path, so deep graphs cannot overflow the call
/// stack. Invariants between calls to `next`:
/// - `path` holds the nodes of the current prefix, start first;
/// - `visited` holds exactly the nodes owning a frame in `frames`;
/// - when `entering` is set, the last node of `path` has not been examined yet.
pub struct AllPaths<'g, N>
where
    N: Eq + Hash,
{
    graph: &'g CallGraph<N>,
    target: N,
    path: Vec<N>,
    visited: HashSet<N>,
    frames: Vec<Iter<'g, N>>,
    entering: bool,
    expanded: usize,
}

impl<N> AllPaths<'_, N>
where
    N: Eq + Hash,
{
    /// Number of nodes expanded so far.
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// Length of the prefix currently being explored.
    pub fn depth(&self) -> usize {
        self.path.len()
    }
}

impl<N> Iterator for AllPaths<'_, N>
where
    N: Eq + Hash + Clone,
{
    type Item = Path<N>;

    fn next(&mut self) -> Option<Path<N>> {
        loop {
            if self.entering {
                self.entering = false;
                let current = self.path.last()?;

                if *current == self.target {
                    let found = self.path.clone();
                    self.path.pop();
                    return Some(found);
                }

                match self.graph.successors(current) {
                    Some(successors) => {
                        self.visited.insert(current.clone());
                        self.frames.push(successors.iter());
                        self.expanded += 1;
                        tracing::trace!(depth = self.path.len(), "Expanding node");
                    }
                    // Dead end: no record for this node.
                    None => {
                        self.path.pop();
                    }
                }
                continue;
            }

            let visited = &self.visited;
            let frame = self.frames.last_mut()?;
            match frame.find(|s| !visited.contains(*s)) {
                Some(next) => {
                    self.path.push(next.clone());
                    self.entering = true;
                }
                None => {
                    // Backtrack past the node owning this frame.
                    self.frames.pop();
                    if let Some(done) = self.path.pop() {
                        self.visited.remove(&done);
                    }
                }
            }
        }
    }
}

impl<N> FusedIterator for AllPaths<'_, N> where N: Eq + Hash + Clone {}
