//! # Mesh Operations
//!
//! Whole-grid operations producing a single pattern buffer.
//!
//! - `optimize` - Culled faces of every occupied cell in one buffer
//! - `merge` - Concatenation of independent cube buffers

pub mod merge;
pub mod optimize;

pub use merge::merge_geometries;
pub use optimize::build_optimized;
