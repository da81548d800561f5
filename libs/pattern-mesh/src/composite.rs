//! # Composite Mesh
//!
//! The result of one generation call: pattern bodies plus an optional base
//! plate, kept as separate sub-meshes.

use crate::mesh::MeshBuffer;
use crate::stats::MeshStats;
use serde::Serialize;

/// Role of a sub-mesh within a [`CompositeMesh`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SubMeshKind {
    /// Cubes extruded from the pattern.
    Pattern,
    /// Slab beneath the pattern.
    Base,
}

/// One independent body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubMesh {
    pub kind: SubMeshKind,
    pub buffer: MeshBuffer,
}

/// Ordered collection of independent sub-meshes. Pattern parts come first,
/// the base plate (if any) last.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompositeMesh {
    parts: Vec<SubMesh>,
}

impl CompositeMesh {
    /// Creates an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a pattern body.
    pub fn push_pattern(&mut self, buffer: MeshBuffer) {
        self.parts.push(SubMesh {
            kind: SubMeshKind::Pattern,
            buffer,
        });
    }

    /// Adds the base plate.
    pub fn push_base(&mut self, buffer: MeshBuffer) {
        self.parts.push(SubMesh {
            kind: SubMeshKind::Base,
            buffer,
        });
    }

    /// All sub-meshes in order.
    #[inline]
    pub fn parts(&self) -> &[SubMesh] {
        &self.parts
    }

    /// Pattern buffers in order.
    pub fn pattern_parts(&self) -> impl Iterator<Item = &MeshBuffer> {
        self.parts
            .iter()
            .filter(|part| part.kind == SubMeshKind::Pattern)
            .map(|part| &part.buffer)
    }

    /// The base plate, if one was generated.
    pub fn base(&self) -> Option<&MeshBuffer> {
        self.parts
            .iter()
            .find(|part| part.kind == SubMeshKind::Base)
            .map(|part| &part.buffer)
    }

    /// Number of sub-meshes.
    #[inline]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns true if there are no sub-meshes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of vertex counts across all sub-meshes.
    pub fn total_vertex_count(&self) -> usize {
        self.parts.iter().map(|part| part.buffer.vertex_count()).sum()
    }

    /// Sum of triangle counts across all sub-meshes.
    pub fn total_triangle_count(&self) -> usize {
        self.parts.iter().map(|part| part.buffer.triangle_count()).sum()
    }

    /// Derives statistics for this composite.
    pub fn stats(&self) -> MeshStats {
        MeshStats::from_composite(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_parts_by_kind() {
        let mut composite = CompositeMesh::new();
        assert!(composite.is_empty());
        assert!(composite.base().is_none());

        let mut pattern = MeshBuffer::new();
        pattern.add_vertex(DVec3::ZERO, DVec3::Y);
        composite.push_pattern(pattern.clone());
        composite.push_pattern(pattern);
        composite.push_base(MeshBuffer::new());

        assert_eq!(composite.len(), 3);
        assert_eq!(composite.pattern_parts().count(), 2);
        assert!(composite.base().is_some());
        assert_eq!(composite.total_vertex_count(), 2);
        assert_eq!(composite.parts()[2].kind, SubMeshKind::Base);
    }
}
