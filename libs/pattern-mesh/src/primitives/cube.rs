//! # Cube Primitive
//!
//! One independent, unculled cube per occupied cell.

use crate::error::MeshResult;
use crate::face::Face;
use crate::grid::PatternGrid;
use crate::mesh::MeshBuffer;
use crate::params::ParameterSet;
use crate::primitives::{cell_center, check_vertex_budget};
use config::constants::CHAMFER_SHRINK_SCALE;
use glam::DVec3;
use tracing::debug;

/// Vertices in one cube: 6 faces of 4 corners each.
pub const CUBE_VERTICES: usize = 24;

/// Triangles in one cube: 2 per face.
pub const CUBE_TRIANGLES: usize = 12;

/// Creates a cube centered at `center`.
///
/// Every face gets its own 4 vertices so each vertex carries its face
/// normal. With `chamfer_edges` set, every corner is pulled towards the
/// center by `1 - min(1, chamfer_size / cube_size) * 0.1`.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{primitives::create_cube, ParameterSet};
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::ZERO, &ParameterSet::default());
/// assert_eq!(mesh.vertex_count(), 24);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(center: DVec3, params: &ParameterSet) -> MeshBuffer {
    let mut half = DVec3::new(
        params.cube_size / 2.0,
        params.cube_height / 2.0,
        params.cube_size / 2.0,
    );
    if params.chamfer_edges {
        half *= chamfer_scale(params);
    }

    let mut mesh = MeshBuffer::with_capacity(CUBE_VERTICES, CUBE_TRIANGLES);
    for face in Face::ALL {
        mesh.add_quad(face.quad(center, half), face.normal());
    }
    mesh
}

/// Uniform shrink applied to chamfered cubes.
pub fn chamfer_scale(params: &ParameterSet) -> f64 {
    let factor = (params.chamfer_size / params.cube_size).min(1.0);
    1.0 - factor * CHAMFER_SHRINK_SCALE
}

/// Builds one cube per occupied cell, in row-major order.
///
/// Faces between neighbouring cells are kept.
pub fn build_cubes(grid: &PatternGrid, params: &ParameterSet) -> MeshResult<Vec<MeshBuffer>> {
    let count = grid.occupied_count();
    check_vertex_budget(count * CUBE_VERTICES)?;

    let cubes: Vec<MeshBuffer> = grid
        .occupied_cells()
        .map(|(x, y)| create_cube(cell_center(grid, params, x, y), params))
        .collect();

    debug!(
        cubes = cubes.len(),
        chamfer = params.chamfer_edges,
        "built independent cubes"
    );
    Ok(cubes)
}
