//! # Mesh Assembly
//!
//! Public entry point selecting a generation strategy and attaching the
//! optional base plate.
//!
//! ## Strategy
//!
//! 1. `optimize_mesh` - culled faces in one buffer
//! 2. `merge_adjacent_faces` - independent cubes concatenated into one buffer
//! 3. otherwise - one sub-mesh per occupied cell

use crate::composite::CompositeMesh;
use crate::error::{MeshError, MeshResult};
use crate::grid::PatternGrid;
use crate::ops::{build_optimized, merge_geometries};
use crate::params::ParameterSet;
use crate::primitives::{build_cubes, create_base};
use tracing::{debug, info, instrument};

/// How the pattern buffer(s) are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Optimized,
    Merged,
    Independent,
}

impl Strategy {
    /// Picks the strategy for a parameter set.
    pub fn select(params: &ParameterSet) -> Self {
        if params.optimize_mesh {
            Strategy::Optimized
        } else if params.merge_adjacent_faces {
            Strategy::Merged
        } else {
            Strategy::Independent
        }
    }
}

/// Generates the composite mesh for a pattern.
///
/// Parameters are validated first. Builder failures are reported as
/// [`MeshError::Generation`]; nothing is returned on failure.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{assemble, ParameterSet, PatternGrid};
///
/// let grid = PatternGrid::from_rows(vec![vec![true, true]]).unwrap();
/// let mesh = assemble(&grid, &ParameterSet::default()).unwrap();
/// assert_eq!(mesh.len(), 2); // pattern + base
/// assert_eq!(mesh.total_vertex_count(), 40 + 8);
/// ```
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn assemble(grid: &PatternGrid, params: &ParameterSet) -> MeshResult<CompositeMesh> {
    params.validate()?;

    let strategy = Strategy::select(params);
    debug!(?strategy, occupied = grid.occupied_count(), "assembling pattern mesh");

    let mut composite = CompositeMesh::new();
    match strategy {
        Strategy::Optimized => {
            let pattern = build_optimized(grid, params).map_err(wrap)?;
            if !pattern.is_empty() {
                composite.push_pattern(pattern);
            }
        }
        Strategy::Merged => {
            let cubes = build_cubes(grid, params).map_err(wrap)?;
            composite.push_pattern(merge_geometries(&cubes).map_err(wrap)?);
        }
        Strategy::Independent => {
            for cube in build_cubes(grid, params).map_err(wrap)? {
                composite.push_pattern(cube);
            }
        }
    }

    if params.generate_base {
        composite.push_base(create_base(grid, params).map_err(wrap)?);
    }

    info!(
        parts = composite.len(),
        vertices = composite.total_vertex_count(),
        triangles = composite.total_triangle_count(),
        "assembled pattern mesh"
    );
    Ok(composite)
}

/// Reports any builder failure as a generation error with its message.
fn wrap(error: MeshError) -> MeshError {
    match error {
        MeshError::Generation { .. } => error,
        other => MeshError::generation(other.to_string()),
    }
}
