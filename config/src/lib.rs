//! # Config Crate
//!
//! Centralized configuration constants for the dot-pattern mesh pipeline.
//! Every magic number used by mesh generation, statistics and print
//! estimation is defined here so the meshing crates stay declarative.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{BYTES_PER_FACE, BYTES_PER_VERTEX, MAX_CHAMFER_RATIO};
//!
//! let estimate = 24 * BYTES_PER_VERTEX + 12 * BYTES_PER_FACE;
//! assert_eq!(estimate, 960);
//!
//! let cube_size = 2.0;
//! let chamfer_limit = cube_size * MAX_CHAMFER_RATIO;
//! assert!(chamfer_limit < cube_size);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Coarse Estimates**: Print constants are configuration, not measurements

pub mod constants;

#[cfg(test)]
mod tests;
