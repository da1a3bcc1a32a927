//! callpath library: call-graph loading and simple call-path enumeration.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod domain;
