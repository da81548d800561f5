//! # Pattern Mesh
//!
//! Converts a 2D dot pattern into a 3D printable mesh.
//! Each occupied grid cell is extruded into a cube; faces hidden between
//! neighbouring cells can be culled, and a base plate can be added.
//!
//! ## Architecture
//!
//! ```text
//! PatternGrid + ParameterSet → assemble → CompositeMesh → MeshStats
//!                            ↘ estimate_print → PrintEstimate
//! ```
//!
//! ## Algorithms
//!
//! - **Culling**: per-cell neighbour checks, top and bottom always exposed
//! - **Optimized**: exposed faces of every cell in one buffer
//! - **Merge**: index-offset concatenation of independent cubes
//! - **Base**: 8-vertex slab beneath the pattern
//!
//! ## Usage
//!
//! ```rust
//! use pattern_mesh::{assemble, ParameterSet, PatternGrid};
//!
//! let grid = PatternGrid::from_rows(vec![
//!     vec![true, true],
//!     vec![false, true],
//! ]).unwrap();
//! let mesh = assemble(&grid, &ParameterSet::default())?;
//! let stats = mesh.stats();
//! assert_eq!(stats.cube_count, 2);
//! # Ok::<(), pattern_mesh::MeshError>(())
//! ```

pub mod assembler;
pub mod composite;
pub mod culling;
pub mod error;
pub mod estimate;
pub mod face;
pub mod grid;
pub mod mesh;
pub mod ops;
pub mod params;
pub mod primitives;
pub mod stats;

pub use assembler::{assemble, Strategy};
pub use composite::{CompositeMesh, SubMesh, SubMeshKind};
pub use culling::{exposed_faces, ExposedFaces};
pub use error::{MeshError, MeshResult};
pub use estimate::{estimate_print, estimate_print_with, PrintEstimate};
pub use face::Face;
pub use grid::PatternGrid;
pub use mesh::MeshBuffer;
pub use params::ParameterSet;
pub use stats::MeshStats;
