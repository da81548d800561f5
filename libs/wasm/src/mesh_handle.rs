//! # Mesh Handle
//!
//! WASM-friendly wrapper for a composite mesh that can be transferred to
//! JavaScript.

use pattern_mesh::{CompositeMesh, MeshStats, SubMeshKind};
use wasm_bindgen::prelude::*;

/// Flattened buffers of one sub-mesh.
#[derive(Debug, Clone)]
struct PartBuffers {
    kind: SubMeshKind,
    /// Vertex positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Vertex normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, i0, i1, i2, ...]
    indices: Vec<u32>,
}

/// A handle to generated mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_mesh(gridJson, paramsJson);
///
/// for (let i = 0; i < mesh.part_count; i++) {
///   const geometry = new THREE.BufferGeometry();
///   geometry.setAttribute('position', new THREE.BufferAttribute(mesh.part_positions(i), 3));
///   geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.part_normals(i), 3));
///   geometry.setIndex(new THREE.BufferAttribute(mesh.part_indices(i), 1));
/// }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    parts: Vec<PartBuffers>,
    stats: MeshStats,
    /// `stats` encoded once at construction
    stats_json: String,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of independent sub-meshes.
    #[wasm_bindgen(getter)]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Returns `"pattern"` or `"base"`, or an empty string when out of range.
    pub fn part_kind(&self, index: usize) -> String {
        match self.parts.get(index).map(|part| part.kind) {
            Some(SubMeshKind::Pattern) => "pattern".to_string(),
            Some(SubMeshKind::Base) => "base".to_string(),
            None => String::new(),
        }
    }

    /// Returns the positions of one sub-mesh as a Float32Array.
    ///
    /// Format: [x, y, z, x, y, z, ...]
    pub fn part_positions(&self, index: usize) -> Vec<f32> {
        self.parts
            .get(index)
            .map(|part| part.positions.clone())
            .unwrap_or_default()
    }

    /// Returns the normals of one sub-mesh as a Float32Array.
    pub fn part_normals(&self, index: usize) -> Vec<f32> {
        self.parts
            .get(index)
            .map(|part| part.normals.clone())
            .unwrap_or_default()
    }

    /// Returns the triangle indices of one sub-mesh as a Uint32Array.
    pub fn part_indices(&self, index: usize) -> Vec<u32> {
        self.parts
            .get(index)
            .map(|part| part.indices.clone())
            .unwrap_or_default()
    }

    /// Returns the total number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> usize {
        self.stats.vertex_count
    }

    /// Returns the total number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> usize {
        self.stats.face_count
    }

    /// Returns the number of independent objects.
    #[wasm_bindgen(getter)]
    pub fn cube_count(&self) -> usize {
        self.stats.cube_count
    }

    /// Returns the estimated export size in bytes.
    #[wasm_bindgen(getter)]
    pub fn file_size_estimate(&self) -> f64 {
        self.stats.file_size_estimate as f64
    }

    /// Returns the mesh statistics as a JSON string.
    pub fn stats_json(&self) -> String {
        self.stats_json.clone()
    }

    /// Returns true if nothing was generated.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl MeshHandle {
    /// Creates a MeshHandle from a composite mesh.
    ///
    /// Fails only if the statistics cannot be encoded as JSON.
    pub fn from_composite(mesh: &CompositeMesh) -> Result<Self, serde_json::Error> {
        let parts = mesh
            .parts()
            .iter()
            .map(|part| PartBuffers {
                kind: part.kind,
                positions: part.buffer.positions_f32(),
                normals: part.buffer.normals_f32(),
                indices: part.buffer.indices_u32(),
            })
            .collect();

        let stats = mesh.stats();
        Ok(Self {
            parts,
            stats,
            stats_json: serde_json::to_string(&stats)?,
        })
    }
}
