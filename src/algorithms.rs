//! Algorithms that work on top of the core operations.
mod partition_refinement;
pub use partition_refinement::{minimize, partition_refinement, Partition};
