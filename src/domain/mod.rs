pub mod finder;
pub mod graph;
pub mod node;
pub mod ports;
