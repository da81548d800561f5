//! # Primitives
//!
//! Mesh generation for the per-cell cube and the base plate, plus the
//! world placement shared by every builder.

pub mod base;
pub mod cube;

pub use base::create_base;
pub use cube::{build_cubes, create_cube};

use crate::error::{MeshError, MeshResult};
use crate::grid::PatternGrid;
use crate::params::ParameterSet;
use config::constants::MAX_VERTICES;
use glam::DVec3;

/// World-space center of the cube extruded from cell `(x, y)`.
///
/// The pattern is centered on the origin in X/Z and the cube rests on `Y = 0`.
pub fn cell_center(grid: &PatternGrid, params: &ParameterSet, x: usize, y: usize) -> DVec3 {
    let pitch = params.pitch();
    DVec3::new(
        (x as f64 - grid.width() as f64 / 2.0) * pitch,
        params.cube_height / 2.0,
        (y as f64 - grid.height() as f64 / 2.0) * pitch,
    )
}

/// Fails when a buffer would exceed [`MAX_VERTICES`].
pub(crate) fn check_vertex_budget(vertex_count: usize) -> MeshResult<()> {
    if vertex_count > MAX_VERTICES {
        return Err(MeshError::generation(format!(
            "too many vertices: {vertex_count} (max: {MAX_VERTICES})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_center_placement() {
        let grid = PatternGrid::empty(4, 2);
        let params = ParameterSet {
            cube_size: 2.0,
            cube_height: 3.0,
            spacing: 1.0,
            ..ParameterSet::default()
        };
        assert_eq!(cell_center(&grid, &params, 0, 0), DVec3::new(-6.0, 1.5, -3.0));
        assert_eq!(cell_center(&grid, &params, 3, 1), DVec3::new(3.0, 1.5, 0.0));
    }

    #[test]
    fn test_vertex_budget() {
        assert!(check_vertex_budget(MAX_VERTICES).is_ok());
        let err = check_vertex_budget(MAX_VERTICES + 1).unwrap_err();
        assert!(err.to_string().contains("too many vertices"));
    }
}
