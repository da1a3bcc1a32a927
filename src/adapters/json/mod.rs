//! Exported call-graph JSON input
//!
//! The export is a JSON array of function records (see [`FunctionRecord`]).
//!
//! [`FunctionRecord`]: crate::domain::node::FunctionRecord

pub mod loader;

pub use loader::{JsonGraphSource, load_records, parse_records};
