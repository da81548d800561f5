//! # Optimized Mesh
//!
//! Emits only the exposed faces of every occupied cell into one buffer.
//! Vertices are not shared between faces, so each face contributes exactly
//! 4 vertices and 2 triangles.

use crate::culling::exposed_faces;
use crate::error::MeshResult;
use crate::grid::PatternGrid;
use crate::mesh::MeshBuffer;
use crate::params::ParameterSet;
use crate::primitives::{cell_center, check_vertex_budget};
use glam::DVec3;
use tracing::debug;

/// Builds the culled pattern buffer.
///
/// An empty grid yields an empty buffer.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{ops::build_optimized, ParameterSet, PatternGrid};
///
/// let grid = PatternGrid::from_rows(vec![vec![true, true]]).unwrap();
/// let mesh = build_optimized(&grid, &ParameterSet::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 40);
/// assert_eq!(mesh.triangle_count(), 20);
/// ```
pub fn build_optimized(grid: &PatternGrid, params: &ParameterSet) -> MeshResult<MeshBuffer> {
    let visible: Vec<_> = grid
        .occupied_cells()
        .map(|(x, y)| ((x, y), exposed_faces(grid, x, y)))
        .collect();

    let face_count: usize = visible.iter().map(|(_, faces)| faces.count()).sum();
    check_vertex_budget(face_count * 4)?;

    let half = DVec3::new(
        params.cube_size / 2.0,
        params.cube_height / 2.0,
        params.cube_size / 2.0,
    );

    let mut mesh = MeshBuffer::with_capacity(face_count * 4, face_count * 2);
    for ((x, y), faces) in &visible {
        let center = cell_center(grid, params, *x, *y);
        for face in faces.iter() {
            mesh.add_quad(face.quad(center, half), face.normal());
        }
    }

    debug!(
        cells = visible.len(),
        faces = face_count,
        vertices = mesh.vertex_count(),
        "built optimized pattern mesh"
    );
    Ok(mesh)
}
