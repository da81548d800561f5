//! # Base Plate
//!
//! A rectangular slab beneath the pattern with its top face at `Y = 0`.

use crate::error::MeshResult;
use crate::face::Face;
use crate::grid::PatternGrid;
use crate::mesh::MeshBuffer;
use crate::params::ParameterSet;
use glam::DVec3;
use tracing::debug;

/// Creates the base plate for a grid.
///
/// The slab spans the pattern's footprint (see [`ParameterSet::footprint`])
/// centered under the pattern, from `Y = -base_thickness` to `Y = 0`.
/// It has 8 shared corner vertices and 12 triangles.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{primitives::create_base, ParameterSet, PatternGrid};
///
/// let grid = PatternGrid::empty(3, 3);
/// let base = create_base(&grid, &ParameterSet::default()).unwrap();
/// assert_eq!(base.vertex_count(), 8);
/// assert_eq!(base.triangle_count(), 12);
/// ```
pub fn create_base(grid: &PatternGrid, params: &ParameterSet) -> MeshResult<MeshBuffer> {
    let (width, depth) = params.checked_footprint(grid)?;

    // Cell centers run from -W/2 to W/2 - 1 pitches, so the pattern's
    // midpoint sits half a pitch below the origin on both axes.
    let offset = -params.pitch() / 2.0;
    let center = DVec3::new(offset, -params.base_thickness / 2.0, offset);
    let half = DVec3::new(width / 2.0, params.base_thickness / 2.0, depth / 2.0);

    let mut mesh = MeshBuffer::with_capacity(8, 12);
    for index in 0..8u32 {
        mesh.add_vertex(center + corner_sign(index) * half, DVec3::ZERO);
    }
    for face in Face::ALL {
        let [a, b, c, d] = face.corner_signs().map(corner_index);
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }
    mesh.compute_normals();

    debug!(width, depth, thickness = params.base_thickness, "built base plate");
    Ok(mesh)
}

/// Corner index with bit 0/1/2 set for +X/+Y/+Z.
fn corner_index(sign: DVec3) -> u32 {
    (sign.x > 0.0) as u32 | ((sign.y > 0.0) as u32) << 1 | ((sign.z > 0.0) as u32) << 2
}

fn corner_sign(index: u32) -> DVec3 {
    let axis = |bit: u32| if index & bit != 0 { 1.0 } else { -1.0 };
    DVec3::new(axis(1), axis(2), axis(4))
}
