//! Test fixture generators for integration tests.
#![allow(dead_code)]

use std::io::Write;

use proptest::prelude::*;

use callpath::domain::graph::CallGraph;
use callpath::domain::node::FunctionRecord;

/// Build a string graph from `(name, imports)` pairs.
pub fn graph(entries: &[(&str, &[&str])]) -> CallGraph {
    CallGraph::from_records(records(entries))
}

pub fn records(entries: &[(&str, &[&str])]) -> Vec<FunctionRecord> {
    entries
        .iter()
        .map(|(name, imports)| {
            FunctionRecord::new(*name, imports.iter().map(|s| s.to_string()).collect())
        })
        .collect()
}

/// Serialize records the way the exporter does and write them to a temp file.
pub fn graph_file(entries: &[(&str, &[&str])]) -> tempfile::NamedTempFile {
    let json = serde_json::to_string_pretty(&records(entries)).unwrap();
    raw_file(&json)
}

pub fn raw_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

/// A call graph shaped like a real disassembler export: named functions,
/// imported library stubs that never get records, a recursive helper pair.
pub const SAMPLE_EXPORT: &[(&str, &[&str])] = &[
    (
        "fcn.00114818",
        &["fcn.00124ee6", "FunctionWithCustomName", "sym.imp.printf"],
    ),
    ("fcn.00124ee6", &["fcn.00115e4d", "sym.imp.malloc"]),
    (
        "FunctionWithCustomName",
        &["fcn.00124ee6", "fcn.00115e4d", "fcn.00130000"],
    ),
    ("fcn.00115e4d", &["fcn.00130000"]),
    ("fcn.00130000", &["fcn.00130100"]),
    ("fcn.00130100", &["fcn.00130000", "sym.imp.free"]),
    ("entry0", &["fcn.00114818"]),
];

/// Random graphs over `0..n` for `n` in `2..=max_nodes`, paired with `n`.
///
/// Each node has a record with probability 0.8; successor lists hold up to
/// `max_out` entries drawn from `0..n`, so they may repeat entries, contain
/// self-loops and name nodes without a record.
pub fn call_graphs(
    max_nodes: u32,
    max_out: usize,
) -> impl Strategy<Value = (CallGraph<u32>, u32)> {
    (2..=max_nodes)
        .prop_flat_map(move |n| {
            let records = prop::collection::vec(
                prop::option::weighted(0.8, prop::collection::vec(0..n, 0..=max_out)),
                n as usize,
            );
            (records, Just(n))
        })
        .prop_map(|(records, n)| {
            let graph: CallGraph<u32> = records
                .into_iter()
                .zip(0u32..)
                .filter_map(|(succ, node)| succ.map(|succ| (node, succ)))
                .collect();
            (graph, n)
        })
}

/// A random graph with a start and a target drawn from its node range.
pub fn searches(
    max_nodes: u32,
    max_out: usize,
) -> impl Strategy<Value = (CallGraph<u32>, u32, u32, u32)> {
    call_graphs(max_nodes, max_out)
        .prop_flat_map(|(graph, n)| (Just(graph), Just(n), 0..n, 0..n))
}

/// Every sequence of distinct nodes drawn from `0..n`, of any length.
pub fn distinct_sequences(n: u32) -> Vec<Vec<u32>> {
    fn extend(n: u32, prefix: &mut Vec<u32>, out: &mut Vec<Vec<u32>>) {
        for v in 0..n {
            if prefix.contains(&v) {
                continue;
            }
            prefix.push(v);
            out.push(prefix.clone());
            extend(n, prefix, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    extend(n, &mut Vec::new(), &mut out);
    out
}

/// Number of times `graph` lists `to` among the successors of `from`.
pub fn edge_multiplicity(graph: &CallGraph<u32>, from: u32, to: u32) -> usize {
    graph
        .successors(&from)
        .map(|succ| succ.iter().filter(|&&s| s == to).count())
        .unwrap_or(0)
}

/// Reference answer by exhaustive filtering: each simple `start -> target`
/// path with the number of times the search should emit it (the product of
/// its edge multiplicities). Sorted lexicographically.
pub fn brute_force_paths(
    graph: &CallGraph<u32>,
    candidates: &[Vec<u32>],
    start: u32,
    target: u32,
) -> Vec<(Vec<u32>, usize)> {
    let mut found: Vec<(Vec<u32>, usize)> = candidates
        .iter()
        .filter(|seq| seq.first() == Some(&start) && seq.last() == Some(&target))
        .filter_map(|seq| {
            let mult: usize = seq
                .windows(2)
                .map(|w| edge_multiplicity(graph, w[0], w[1]))
                .product();
            (mult > 0).then(|| (seq.clone(), mult))
        })
        .collect();
    found.sort();
    found
}
