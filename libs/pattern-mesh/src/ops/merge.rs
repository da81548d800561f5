//! # Geometry Merge
//!
//! Concatenates independent cube buffers into one. No faces are removed.

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshBuffer;
use crate::primitives::check_vertex_budget;
use tracing::{debug, warn};

/// Message of the error raised when there is nothing to merge.
pub const NOTHING_TO_MERGE: &str = "No geometries found to merge";

/// Merges buffers in order, offsetting each buffer's indices by the
/// number of vertices before it.
///
/// Fails when `geometries` is empty.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{ops::merge_geometries, primitives::create_cube, ParameterSet};
/// use glam::DVec3;
///
/// let params = ParameterSet::default();
/// let cubes = vec![create_cube(DVec3::ZERO, &params), create_cube(DVec3::X * 5.0, &params)];
/// let merged = merge_geometries(&cubes).unwrap();
/// assert_eq!(merged.vertex_count(), 48);
/// assert!(merge_geometries(&[]).is_err());
/// ```
pub fn merge_geometries(geometries: &[MeshBuffer]) -> MeshResult<MeshBuffer> {
    if geometries.is_empty() {
        warn!("merge requested without any geometry");
        return Err(MeshError::generation(NOTHING_TO_MERGE));
    }

    let vertex_count: usize = geometries.iter().map(MeshBuffer::vertex_count).sum();
    let triangle_count: usize = geometries.iter().map(MeshBuffer::triangle_count).sum();
    check_vertex_budget(vertex_count)?;

    let mut merged = MeshBuffer::with_capacity(vertex_count, triangle_count);
    for geometry in geometries {
        merged.append(geometry);
    }

    debug!(
        inputs = geometries.len(),
        vertices = merged.vertex_count(),
        triangles = merged.triangle_count(),
        "merged geometries"
    );
    Ok(merged)
}
