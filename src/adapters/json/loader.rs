use crate::domain::graph::CallGraph;
use crate::domain::node::FunctionRecord;
use crate::domain::ports::GraphSource;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Call-graph JSON data source adapter
pub struct JsonGraphSource {
    pub json_path: PathBuf,
}

impl JsonGraphSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            json_path: path.as_ref().to_path_buf(),
        }
    }
}

impl GraphSource for JsonGraphSource {
    fn load(&self) -> Result<CallGraph> {
        let records = load_records(&self.json_path)?;
        tracing::debug!("Decoded {} function records", records.len());
        Ok(CallGraph::from_records(records))
    }
}

/// Read and decode every record of an exported call-graph file.
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<FunctionRecord>> {
    use memmap2::Mmap;
    use std::fs::File;

    let path = path.as_ref();
    let full_path = std::path::absolute(path)
        .with_context(|| format!("Invalid path: {}", path.display()))?;

    let file = File::open(&full_path)
        .with_context(|| format!("Error reading file: {}", full_path.display()))?;
    let mmap = unsafe {
        Mmap::map(&file)
            .with_context(|| format!("Error reading file: {}", full_path.display()))?
    };

    parse_records(&mmap[..])
        .with_context(|| format!("Invalid JSON file: {}", full_path.display()))
}

/// Decode records from raw bytes. A leading UTF-8 byte order mark is ignored.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<FunctionRecord>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    let records = serde_json::from_slice(bytes).context("Failed to parse call-graph JSON")?;
    Ok(records)
}
