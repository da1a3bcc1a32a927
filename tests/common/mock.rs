//! Mock implementations for integration tests.
#![allow(dead_code)]

use anyhow::{Result, anyhow};
use callpath::domain::finder::SearchSummary;
use callpath::domain::graph::CallGraph;
use callpath::domain::node::FunctionRecord;
use callpath::domain::ports::{GraphSource, PathSink};

/// In-memory GraphSource built from records.
pub struct MockGraphSource {
    records: Vec<FunctionRecord>,
}

impl MockGraphSource {
    pub fn new(records: Vec<FunctionRecord>) -> Self {
        Self { records }
    }
}

impl GraphSource for MockGraphSource {
    fn load(&self) -> Result<CallGraph> {
        Ok(CallGraph::from_records(self.records.clone()))
    }
}

/// GraphSource that always fails, like an unreadable file.
pub struct FailingGraphSource;

impl GraphSource for FailingGraphSource {
    fn load(&self) -> Result<CallGraph> {
        Err(anyhow!("Error reading file: mock"))
    }
}

/// Sink recording everything it is handed, optionally refusing after `fail_after` paths.
#[derive(Default)]
pub struct RecordingSink {
    pub paths: Vec<Vec<String>>,
    pub summary: Option<SearchSummary>,
    pub fail_after: Option<usize>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(n: usize) -> Self {
        Self {
            fail_after: Some(n),
            ..Self::default()
        }
    }
}

impl PathSink for RecordingSink {
    fn path(&mut self, path: &[String]) -> Result<()> {
        if self.fail_after.is_some_and(|n| self.paths.len() >= n) {
            return Err(anyhow!("sink closed"));
        }
        self.paths.push(path.to_vec());
        Ok(())
    }

    fn finish(&mut self, summary: &SearchSummary) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }
}
