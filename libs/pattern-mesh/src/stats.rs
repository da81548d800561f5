//! # Mesh Statistics
//!
//! Counts and a file-size estimate derived from a [`CompositeMesh`].

use crate::composite::CompositeMesh;
use crate::mesh::MeshBuffer;
use config::constants::{BYTES_PER_FACE, BYTES_PER_VERTEX};
use serde::Serialize;

/// Snapshot of mesh statistics. Recompute for every new mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshStats {
    pub vertex_count: usize,
    /// Triangle count
    pub face_count: usize,
    /// Number of independent sub-mesh objects, not occupied cells
    pub cube_count: usize,
    /// Approximate size in bytes of a text interchange export
    pub file_size_estimate: u64,
}

impl MeshStats {
    /// Traverses every sub-mesh of `mesh`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use pattern_mesh::{assemble, ParameterSet, PatternGrid};
    ///
    /// let grid = PatternGrid::from_rows(vec![vec![true]]).unwrap();
    /// let params = ParameterSet { generate_base: false, ..ParameterSet::default() };
    /// let stats = assemble(&grid, &params).unwrap().stats();
    /// assert_eq!(stats.vertex_count, 24);
    /// assert_eq!(stats.face_count, 12);
    /// assert_eq!(stats.cube_count, 1);
    /// assert_eq!(stats.file_size_estimate, 24 * 30 + 12 * 20);
    /// ```
    pub fn from_composite(mesh: &CompositeMesh) -> Self {
        let buffers = mesh.parts().iter().map(|part| &part.buffer);
        let vertex_count: usize = buffers.clone().map(MeshBuffer::vertex_count).sum();
        let face_count: usize = buffers.map(face_count).sum();

        Self {
            vertex_count,
            face_count,
            cube_count: mesh.len(),
            file_size_estimate: file_size_estimate(vertex_count, face_count),
        }
    }
}

/// Triangles in one buffer; unindexed buffers are read as a triangle soup.
fn face_count(buffer: &MeshBuffer) -> usize {
    if buffer.is_indexed() {
        buffer.triangle_count()
    } else {
        buffer.vertex_count() / 3
    }
}

/// `vertex_count * 30 + face_count * 20` bytes.
pub fn file_size_estimate(vertex_count: usize, face_count: usize) -> u64 {
    vertex_count as u64 * BYTES_PER_VERTEX + face_count as u64 * BYTES_PER_FACE
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_file_size_arithmetic() {
        assert_eq!(file_size_estimate(0, 0), 0);
        assert_eq!(file_size_estimate(40, 20), 1600);
        assert_eq!(file_size_estimate(8, 12), 480);
    }

    #[test]
    fn test_unindexed_buffer_counts_soup() {
        let mut soup = MeshBuffer::new();
        for _ in 0..6 {
            soup.add_vertex(DVec3::ZERO, DVec3::Y);
        }
        let mut composite = CompositeMesh::new();
        composite.push_pattern(soup);

        let stats = composite.stats();
        assert_eq!(stats.vertex_count, 6);
        assert_eq!(stats.face_count, 2);
        assert_eq!(stats.cube_count, 1);
        assert_eq!(stats.file_size_estimate, 6 * 30 + 2 * 20);
    }

    #[test]
    fn test_empty_composite() {
        let stats = CompositeMesh::new().stats();
        assert_eq!(
            stats,
            MeshStats {
                vertex_count: 0,
                face_count: 0,
                cube_count: 0,
                file_size_estimate: 0,
            }
        );
    }
}
