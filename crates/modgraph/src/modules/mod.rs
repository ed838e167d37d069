//! The module graph container.
//!
//! Split by concern:
//! - `graph`: the container and its shared state
//! - `construction`: uniqueness checks and dependency aggregation
//! - `queries`: lookup by identifier and name
//! - `cycles`: module dependency graph and cycle detection

mod construction;
mod cycles;
mod graph;
mod queries;

pub use graph::ModuleGraph;
