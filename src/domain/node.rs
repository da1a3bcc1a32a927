use serde::{Deserialize, Deserializer, Serialize};

/// Node identifier as it appears in an exported call-graph (a function name).
pub type NodeId = String;

/// One function record of an exported call-graph.
///
/// Mirrors the JSON shape produced by the disassembler export:
/// `{"name": "fcn.00114818", "size": 52, "imports": ["fcn.00124ee6", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRecord {
    pub name: NodeId,

    /// Function size in bytes. Carried through but unused by the path search.
    #[serde(default)]
    pub size: i64,

    /// Functions called by this one, in export order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub imports: Vec<NodeId>,
}

impl FunctionRecord {
    pub fn new(name: impl Into<NodeId>, imports: Vec<NodeId>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            imports,
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<NodeId>>::deserialize(deserializer)?.unwrap_or_default())
}
