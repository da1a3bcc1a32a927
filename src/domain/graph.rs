use crate::domain::node::{FunctionRecord, NodeId};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Call graph - the core data structure
///
/// Maps each known node to its ordered successor list ("imports"). A node that is
/// not a key has no known outgoing edges; successor lists may name such nodes and
/// may repeat entries. Cycles are allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallGraph<N = NodeId>
where
    N: Eq + Hash,
{
    edges: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash> Default for CallGraph<N> {
    fn default() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }
}

impl<N: Eq + Hash> CallGraph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the successor list of `node`, returning the list it replaced.
    pub fn insert(&mut self, node: N, successors: Vec<N>) -> Option<Vec<N>> {
        self.edges.insert(node, successors)
    }

    pub fn successors<Q>(&self, node: &Q) -> Option<&[N]>
    where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.edges.get(node).map(Vec::as_slice)
    }

    /// True when `node` has a record of its own (is a key).
    pub fn contains_node<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.edges.contains_key(node)
    }

    /// True when `node` appears in any successor list.
    pub fn is_referenced<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.iter()
            .any(|(_, succ)| succ.iter().any(|s| <N as Borrow<Q>>::borrow(s) == node))
    }

    /// True when `node` is a key or is reachable as someone's successor.
    pub fn knows<Q>(&self, node: &Q) -> bool
    where
        N: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.contains_node(node) || self.is_referenced(node)
    }

    /// Number of keys.
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of successor entries, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every key with its successor list, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.edges.iter().map(|(n, succ)| (n, succ.as_slice()))
    }
}

impl CallGraph<NodeId> {
    /// Build from exported records. A name seen twice keeps its last record.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = FunctionRecord>,
    {
        let mut graph = Self::new();
        for record in records {
            if graph.insert(record.name.clone(), record.imports).is_some() {
                tracing::debug!("Duplicate record for {}, keeping the last one", record.name);
            }
        }
        graph
    }
}

impl<N: Eq + Hash> FromIterator<(N, Vec<N>)> for CallGraph<N> {
    fn from_iter<T: IntoIterator<Item = (N, Vec<N>)>>(iter: T) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}
