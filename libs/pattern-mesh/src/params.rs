//! # Generation Parameters
//!
//! Dimensions and switches controlling how a pattern is meshed.

use crate::error::{MeshError, MeshResult};
use crate::grid::PatternGrid;
use config::constants::{
    DEFAULT_BASE_THICKNESS, DEFAULT_CHAMFER_SIZE, DEFAULT_CUBE_HEIGHT, DEFAULT_CUBE_SIZE,
    DEFAULT_SPACING, MAX_CHAMFER_RATIO,
};
use serde::{Deserialize, Serialize};

/// Parameters for one mesh generation call.
///
/// Field names serialize in camelCase; missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use pattern_mesh::ParameterSet;
///
/// let params = ParameterSet {
///     cube_size: 3.0,
///     spacing: 0.0,
///     ..ParameterSet::default()
/// };
/// assert!(params.validate().is_ok());
/// assert_eq!(params.pitch(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ParameterSet {
    /// Edge length of a cube on the X/Z plane.
    pub cube_size: f64,
    /// Height of a cube along Y.
    pub cube_height: f64,
    /// Gap between neighbouring cubes.
    pub spacing: f64,
    /// Whether to add a base plate beneath the pattern.
    pub generate_base: bool,
    /// Thickness of the base plate.
    pub base_thickness: f64,
    /// Cull internal faces into one shared buffer.
    pub optimize_mesh: bool,
    /// Concatenate per-cell cubes into one buffer when not optimizing.
    pub merge_adjacent_faces: bool,
    /// Apply the cosmetic chamfer shrink to unoptimized cubes.
    pub chamfer_edges: bool,
    /// Chamfer size, must stay below `0.4 * cube_size`.
    pub chamfer_size: f64,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            cube_size: DEFAULT_CUBE_SIZE,
            cube_height: DEFAULT_CUBE_HEIGHT,
            spacing: DEFAULT_SPACING,
            generate_base: true,
            base_thickness: DEFAULT_BASE_THICKNESS,
            optimize_mesh: true,
            merge_adjacent_faces: true,
            chamfer_edges: false,
            chamfer_size: DEFAULT_CHAMFER_SIZE,
        }
    }
}

impl ParameterSet {
    /// Rejects values that would produce malformed geometry.
    pub fn validate(&self) -> MeshResult<()> {
        positive("cube_size", self.cube_size)?;
        positive("cube_height", self.cube_height)?;

        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(MeshError::parameter(
                "spacing",
                format!("must be zero or positive, got {}", self.spacing),
            ));
        }

        if self.generate_base {
            positive("base_thickness", self.base_thickness)?;
        }

        if self.chamfer_edges {
            let limit = self.cube_size * MAX_CHAMFER_RATIO;
            if !self.chamfer_size.is_finite()
                || self.chamfer_size < 0.0
                || self.chamfer_size >= limit
            {
                return Err(MeshError::parameter(
                    "chamfer_size",
                    format!(
                        "must be in [0, {limit}) for cube size {}, got {}",
                        self.cube_size, self.chamfer_size
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Distance between the centers of neighbouring cells.
    #[inline]
    pub fn pitch(&self) -> f64 {
        self.cube_size + self.spacing
    }

    /// Base plate footprint `(width, depth)` for a grid.
    ///
    /// One cube size of padding is added to the pattern's extent.
    pub fn footprint(&self, grid: &PatternGrid) -> (f64, f64) {
        let span = |cells: usize| cells as f64 * self.pitch() - self.spacing + self.cube_size;
        (span(grid.width()), span(grid.height()))
    }

    /// [`footprint`](Self::footprint), failing when either side is not
    /// positive.
    ///
    /// A zero-width or zero-height grid with `spacing > cube_size` has a
    /// negative footprint.
    pub fn checked_footprint(&self, grid: &PatternGrid) -> MeshResult<(f64, f64)> {
        let (width, depth) = self.footprint(grid);
        if width > 0.0 && depth > 0.0 {
            Ok((width, depth))
        } else {
            Err(MeshError::generation(format!(
                "base footprint must be positive: {width} x {depth}"
            )))
        }
    }
}

fn positive(parameter: &'static str, value: f64) -> MeshResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MeshError::parameter(
            parameter,
            format!("must be positive, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(ParameterSet::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let params = ParameterSet {
            cube_size: 0.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MeshError::ParameterValidation { parameter: "cube_size", .. })
        ));

        let params = ParameterSet {
            cube_height: -1.0,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MeshError::ParameterValidation { parameter: "cube_height", .. })
        ));

        let params = ParameterSet {
            spacing: f64::NAN,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MeshError::ParameterValidation { parameter: "spacing", .. })
        ));
    }

    #[test]
    fn test_base_thickness_only_checked_with_base() {
        let mut params = ParameterSet {
            base_thickness: 0.0,
            generate_base: false,
            ..ParameterSet::default()
        };
        assert!(params.validate().is_ok());

        params.generate_base = true;
        assert!(matches!(
            params.validate(),
            Err(MeshError::ParameterValidation { parameter: "base_thickness", .. })
        ));
    }

    #[test]
    fn test_chamfer_ratio_is_exclusive() {
        let mut params = ParameterSet {
            cube_size: 1.0,
            chamfer_edges: true,
            chamfer_size: 0.4,
            ..ParameterSet::default()
        };
        assert!(matches!(
            params.validate(),
            Err(MeshError::ParameterValidation { parameter: "chamfer_size", .. })
        ));

        params.chamfer_size = 0.39;
        assert!(params.validate().is_ok());

        // Ignored while chamfering is off
        params.chamfer_edges = false;
        params.chamfer_size = 10.0;
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_footprint_adds_one_cube_of_padding() {
        let params = ParameterSet {
            cube_size: 2.0,
            spacing: 0.5,
            ..ParameterSet::default()
        };
        let grid = PatternGrid::empty(4, 2);
        let (width, depth) = params.footprint(&grid);
        assert_eq!(width, 4.0 * 2.5 - 0.5 + 2.0);
        assert_eq!(depth, 2.0 * 2.5 - 0.5 + 2.0);
    }

    #[test]
    fn test_checked_footprint_rejects_negative_span() {
        let params = ParameterSet {
            cube_size: 1.0,
            spacing: 2.0,
            ..ParameterSet::default()
        };
        let grid = PatternGrid::from_rows(vec![vec![]; 3]).unwrap();
        let err = params.checked_footprint(&grid).unwrap_err();
        assert_eq!(
            err,
            MeshError::generation("base footprint must be positive: -1 x 8")
        );

        let grid = PatternGrid::empty(2, 3);
        assert_eq!(params.checked_footprint(&grid).unwrap(), params.footprint(&grid));
    }

    #[test]
    fn test_deserialize_camel_case_with_defaults() {
        let params: ParameterSet =
            serde_json::from_str(r#"{"cubeSize": 4.0, "optimizeMesh": false}"#).unwrap();
        assert_eq!(params.cube_size, 4.0);
        assert!(!params.optimize_mesh);
        assert_eq!(params.cube_height, DEFAULT_CUBE_HEIGHT);
    }
}
