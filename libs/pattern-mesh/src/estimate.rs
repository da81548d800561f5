//! # Print Estimation
//!
//! Coarse print time, material and cost estimates computed directly from
//! the grid and parameters, independent of mesh generation.

use crate::error::MeshResult;
use crate::grid::PatternGrid;
use crate::params::ParameterSet;
use config::constants::{PrintConfig, MM3_PER_CM3};
use serde::Serialize;
use tracing::{debug, instrument};

/// Estimated cost of printing a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintEstimate {
    /// Volume of all cubes, in mm³
    pub cube_volume: f64,
    /// Volume of the base plate, in mm³ (0 without a base)
    pub base_volume: f64,
    /// Total volume, in mm³
    pub total_volume: f64,
    pub print_time_minutes: f64,
    /// Material weight, in grams
    pub material_weight: f64,
    pub estimated_cost: f64,
}

/// Estimates with the default [`PrintConfig`].
///
/// # Example
///
/// ```rust
/// use pattern_mesh::{estimate_print, ParameterSet, PatternGrid};
///
/// let grid = PatternGrid::from_rows(vec![vec![true, true]]).unwrap();
/// let params = ParameterSet { generate_base: false, ..ParameterSet::default() };
/// let estimate = estimate_print(&grid, &params).unwrap();
/// assert_eq!(estimate.total_volume, 2.0 * 2.0 * 2.0 * 2.0);
/// ```
pub fn estimate_print(grid: &PatternGrid, params: &ParameterSet) -> MeshResult<PrintEstimate> {
    estimate_print_with(grid, params, &PrintConfig::default())
}

/// Estimates with explicit print constants.
#[instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn estimate_print_with(
    grid: &PatternGrid,
    params: &ParameterSet,
    config: &PrintConfig,
) -> MeshResult<PrintEstimate> {
    params.validate()?;

    let single_cube = params.cube_size * params.cube_size * params.cube_height;
    let cube_volume = grid.occupied_count() as f64 * single_cube;

    let base_volume = if params.generate_base {
        let (width, depth) = params.checked_footprint(grid)?;
        width * depth * params.base_thickness
    } else {
        0.0
    };

    let total_volume = cube_volume + base_volume;
    let material_weight = total_volume / MM3_PER_CM3 * config.material_density;

    let estimate = PrintEstimate {
        cube_volume,
        base_volume,
        total_volume,
        print_time_minutes: total_volume / config.print_speed,
        material_weight,
        estimated_cost: material_weight * config.cost_per_gram,
    };
    debug!(?estimate, "estimated print");
    Ok(estimate)
}
