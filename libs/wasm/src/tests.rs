//! Tests for the WASM-facing pipeline helpers.

use super::*;

const PAIR: &str = r#"{"width": 2, "height": 1, "data": [[true, true]]}"#;
const EMPTY: &str = r#"{"width": 2, "height": 2, "data": [[false, false], [false, false]]}"#;

/// Confirms an optimized pair plus base produces two parts.
#[test]
fn generate_mesh_produces_pattern_and_base() {
    let mesh = generate_mesh_internal(PAIR, "{}").expect("generation succeeds");

    assert_eq!(mesh.part_count(), 2);
    assert_eq!(mesh.part_kind(0), "pattern");
    assert_eq!(mesh.part_kind(1), "base");
    assert_eq!(mesh.part_positions(0).len(), 40 * 3);
    assert_eq!(mesh.part_normals(0).len(), 40 * 3);
    assert_eq!(mesh.part_indices(0).len(), 20 * 3);
    assert_eq!(mesh.vertex_count(), 48);
    assert_eq!(mesh.triangle_count(), 32);
    assert_eq!(mesh.cube_count(), 2);
}

/// Tests that mesh buffers contain valid data.
#[test]
fn generate_mesh_buffers_valid() {
    let mesh = generate_mesh_internal(PAIR, r#"{"optimizeMesh": false}"#)
        .expect("generation succeeds");

    for part in 0..mesh.part_count() {
        let positions = mesh.part_positions(part);
        assert!(positions.iter().all(|v| v.is_finite()));

        let vertex_count = (positions.len() / 3) as u32;
        for &idx in &mesh.part_indices(part) {
            assert!(idx < vertex_count, "Index {} out of range", idx);
        }
    }
}

/// Out-of-range part queries return nothing instead of panicking.
#[test]
fn part_queries_out_of_range() {
    let mesh = generate_mesh_internal(PAIR, "{}").expect("generation succeeds");
    assert_eq!(mesh.part_kind(9), "");
    assert!(mesh.part_positions(9).is_empty());
    assert!(mesh.part_indices(9).is_empty());
}

/// Ensures the merge path's empty-pattern failure crosses the boundary.
#[test]
fn generate_mesh_reports_empty_merge() {
    let err = generate_mesh_internal(
        EMPTY,
        r#"{"optimizeMesh": false, "mergeAdjacentFaces": true}"#,
    )
    .unwrap_err();
    assert!(matches!(err, BridgeError::Mesh(MeshError::Generation { .. })));
    assert!(err.to_string().contains("No geometries found to merge"));
}

#[test]
fn generate_mesh_rejects_bad_json() {
    let err = generate_mesh_internal("{", "{}").unwrap_err();
    assert!(err.to_string().starts_with("Invalid grid JSON"));

    let err = generate_mesh_internal(PAIR, r#"{"cubeSize": "big"}"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid parameters JSON"));

    let ragged = r#"{"width": 3, "height": 1, "data": [[true]]}"#;
    assert!(generate_mesh_internal(ragged, "{}").is_err());
}

#[test]
fn stats_json_is_camel_case() {
    let mesh = generate_mesh_internal(PAIR, r#"{"generateBase": false}"#).expect("generation succeeds");
    let json = mesh.stats_json();
    assert!(json.contains("\"vertexCount\":40"));
    assert!(json.contains("\"fileSizeEstimate\":1600"));
}

#[test]
fn estimate_print_matches_core() {
    let estimate = estimate_print_internal(PAIR, r#"{"generateBase": false}"#)
        .expect("estimate succeeds");
    assert_eq!(estimate.total_volume, 16.0);
    assert!(estimate.estimated_cost > 0.0);
}

/// Stats JSON is encoded once from the same counts the getters report.
#[test]
fn stats_json_matches_counts() {
    let mesh = generate_mesh_internal(PAIR, "{}").expect("generation succeeds");
    let stats: serde_json::Value = serde_json::from_str(&mesh.stats_json()).expect("valid JSON");

    assert_eq!(stats["vertexCount"], mesh.vertex_count());
    assert_eq!(stats["faceCount"], mesh.triangle_count());
    assert_eq!(stats["cubeCount"], mesh.cube_count());
    assert_eq!(stats["fileSizeEstimate"].as_f64(), Some(mesh.file_size_estimate()));
}

#[test]
fn empty_composite_has_zeroed_stats() {
    let handle = MeshHandle::from_composite(&pattern_mesh::CompositeMesh::new())
        .expect("stats encode");
    assert!(handle.is_empty());
    assert_eq!(
        handle.stats_json(),
        r#"{"vertexCount":0,"faceCount":0,"cubeCount":0,"fileSizeEstimate":0}"#
    );
}

/// A negative base footprint fails both generation and estimation.
#[test]
fn negative_footprint_rejected_by_both_entry_points() {
    let empty_rows = r#"{"width": 0, "height": 3, "data": [[], [], []]}"#;
    let params = r#"{"cubeSize": 1.0, "spacing": 2.0}"#;

    let generate = generate_mesh_internal(empty_rows, params).unwrap_err();
    let estimate = estimate_print_internal(empty_rows, params).unwrap_err();
    assert_eq!(generate.to_string(), estimate.to_string());
    assert!(estimate.to_string().contains("base footprint must be positive"));
}
