//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

// =============================================================================
// PARAMETER DEFAULT TESTS
// =============================================================================

#[test]
fn test_default_dimensions_are_positive() {
    assert!(DEFAULT_CUBE_SIZE > 0.0);
    assert!(DEFAULT_CUBE_HEIGHT > 0.0);
    assert!(DEFAULT_BASE_THICKNESS > 0.0);
    assert!(DEFAULT_SPACING >= 0.0);
}

#[test]
fn test_default_chamfer_within_ratio() {
    // The default chamfer must be accepted for the default cube size
    assert!(DEFAULT_CHAMFER_SIZE >= 0.0);
    assert!(DEFAULT_CHAMFER_SIZE < DEFAULT_CUBE_SIZE * MAX_CHAMFER_RATIO);
}

// =============================================================================
// CHAMFER TESTS
// =============================================================================

#[test]
fn test_chamfer_shrink_never_inverts_cube() {
    // factor is clamped to 1.0, so the largest shrink keeps 90% of the offset
    let worst = 1.0 - 1.0 * CHAMFER_SHRINK_SCALE;
    assert!(worst > 0.0 && worst < 1.0);
}

// =============================================================================
// STATISTICS TESTS
// =============================================================================

#[test]
fn test_file_size_weights() {
    assert_eq!(BYTES_PER_VERTEX, 30);
    assert_eq!(BYTES_PER_FACE, 20);
}

// =============================================================================
// PRINT ESTIMATION TESTS
// =============================================================================

#[test]
fn test_print_constants_positive() {
    assert!(PRINT_SPEED_MM3_PER_MINUTE > 0.0);
    assert!(MATERIAL_DENSITY_G_PER_CM3 > 0.0);
    assert!(COST_PER_GRAM > 0.0);
    assert_eq!(MM3_PER_CM3, 1000.0);
}

#[test]
fn test_max_vertices_reasonable() {
    assert!(MAX_VERTICES >= 1_000_000);
}
