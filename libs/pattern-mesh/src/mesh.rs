//! # Mesh Buffer
//!
//! Vertex positions, per-vertex normals and triangle indices for one body.

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An indexed triangle buffer with one normal per vertex.
///
/// All geometry calculations use f64 internally. Export to f32 only
/// happens at the renderer/serializer boundary.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::MeshBuffer;
/// use glam::DVec3;
///
/// let mut mesh = MeshBuffer::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0), DVec3::Z);
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshBuffer {
    /// Vertex positions
    positions: Vec<DVec3>,
    /// Vertex normals, one per position
    normals: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
}

impl MeshBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a buffer with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the buffer has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns true if the buffer carries an index list.
    #[inline]
    pub fn is_indexed(&self) -> bool {
        !self.triangles.is_empty()
    }

    /// Adds a vertex with its normal and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Adds a quad as two triangles `(a, b, c)` and `(a, c, d)`.
    ///
    /// Corners must be ordered counter-clockwise seen from the side the
    /// normal points to.
    pub fn add_quad(&mut self, corners: [DVec3; 4], normal: DVec3) {
        let a = self.add_vertex(corners[0], normal);
        let b = self.add_vertex(corners[1], normal);
        let c = self.add_vertex(corners[2], normal);
        let d = self.add_vertex(corners[3], normal);
        self.add_triangle(a, b, c);
        self.add_triangle(a, c, d);
    }

    /// Returns a reference to the positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Replaces every normal with the normalized, area-weighted sum of the
    /// face normals of the triangles sharing that vertex.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.positions.len()];

        for tri in &self.triangles {
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];

            let normal = (v1 - v0).cross(v2 - v0);

            normals[tri[0] as usize] += normal;
            normals[tri[1] as usize] += normal;
            normals[tri[2] as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = normals;
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some(first) = self.positions.first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        self.positions[1..]
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Translates the buffer by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.positions {
            *v += offset;
        }
    }

    /// Appends another buffer, offsetting its indices by the current
    /// vertex count.
    pub fn append(&mut self, other: &MeshBuffer) {
        let offset = self.positions.len() as u32;

        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Validates the buffer for correctness.
    ///
    /// Checks:
    /// - One normal per position
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.normals.len() != self.positions.len() {
            return false;
        }

        let vertex_count = self.positions.len() as u32;

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let v0 = self.positions[tri[0] as usize];
            let v1 = self.positions[tri[1] as usize];
            let v2 = self.positions[tri[2] as usize];
            (v1 - v0).cross(v2 - v0).length() > EPSILON_TOLERANCE
        })
    }

    /// Exports positions as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten_f32(&self.positions)
    }

    /// Exports normals as f32 array for GPU.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten_f32(&self.normals)
    }

    /// Exports triangle indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

fn flatten_f32(vectors: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}
