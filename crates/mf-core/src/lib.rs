//! mf-core: stable foundation for the max-flow workspace.
//!
//! Contains:
//! - ids (stable compact IDs for nodes and edges)
//! - numeric (capacity and flow value types)
//! - timing (wall-clock measurement of solver runs)

pub mod ids;
pub mod numeric;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use ids::*;
pub use numeric::*;
pub use timing::{AccumulatingTimer, Timer};
