//! Centralized configuration values shared across the dot-pattern mesh
//! pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used when comparing generated coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// PARAMETER DEFAULTS
// =============================================================================

/// Default edge length of one cube on the X/Z plane, in millimetres.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_CUBE_SIZE;
/// assert!(DEFAULT_CUBE_SIZE > 0.0);
/// ```
pub const DEFAULT_CUBE_SIZE: f64 = 2.0;

/// Default extrusion height of one cube, in millimetres.
pub const DEFAULT_CUBE_HEIGHT: f64 = 2.0;

/// Default gap between neighbouring cubes, in millimetres.
pub const DEFAULT_SPACING: f64 = 0.5;

/// Default thickness of the base plate, in millimetres.
pub const DEFAULT_BASE_THICKNESS: f64 = 1.0;

/// Default chamfer size, in millimetres. Only used when chamfering is enabled.
///
/// # Examples
/// ```
/// use config::constants::{DEFAULT_CHAMFER_SIZE, DEFAULT_CUBE_SIZE, MAX_CHAMFER_RATIO};
/// assert!(DEFAULT_CHAMFER_SIZE < DEFAULT_CUBE_SIZE * MAX_CHAMFER_RATIO);
/// ```
pub const DEFAULT_CHAMFER_SIZE: f64 = 0.2;

// =============================================================================
// CHAMFER CONSTANTS
// =============================================================================

/// Exclusive upper bound of `chamfer_size / cube_size`.
///
/// # Examples
/// ```
/// use config::constants::MAX_CHAMFER_RATIO;
/// let cube_size = 5.0;
/// assert!(1.9 < cube_size * MAX_CHAMFER_RATIO);
/// ```
pub const MAX_CHAMFER_RATIO: f64 = 0.4;

/// Fraction of the chamfer factor applied as a uniform vertex shrink.
///
/// A chamfered cube scales every vertex offset from its center by
/// `1 - factor * CHAMFER_SHRINK_SCALE`.
///
/// # Examples
/// ```
/// use config::constants::CHAMFER_SHRINK_SCALE;
/// let factor: f64 = 0.5;
/// let scale = 1.0 - factor * CHAMFER_SHRINK_SCALE;
/// assert!(scale > 0.9 && scale < 1.0);
/// ```
pub const CHAMFER_SHRINK_SCALE: f64 = 0.1;

// =============================================================================
// STATISTICS CONSTANTS
// =============================================================================

/// Estimated bytes contributed by one vertex in a text interchange file.
///
/// # Examples
/// ```
/// use config::constants::BYTES_PER_VERTEX;
/// assert_eq!(8 * BYTES_PER_VERTEX, 240);
/// ```
pub const BYTES_PER_VERTEX: u64 = 30;

/// Estimated bytes contributed by one triangle in a text interchange file.
pub const BYTES_PER_FACE: u64 = 20;

// =============================================================================
// PRINT ESTIMATION CONSTANTS
// =============================================================================

/// Deposited volume per minute, in cubic millimetres.
///
/// # Examples
/// ```
/// use config::constants::PRINT_SPEED_MM3_PER_MINUTE;
/// let minutes = 150.0 / PRINT_SPEED_MM3_PER_MINUTE;
/// assert_eq!(minutes, 10.0);
/// ```
pub const PRINT_SPEED_MM3_PER_MINUTE: f64 = 15.0;

/// Filament density in grams per cubic centimetre (PLA).
pub const MATERIAL_DENSITY_G_PER_CM3: f64 = 1.24;

/// Material cost per gram, in currency units.
pub const COST_PER_GRAM: f64 = 0.025;

/// Cubic millimetres per cubic centimetre.
pub const MM3_PER_CM3: f64 = 1000.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices a single generated buffer may hold.
///
/// Safety limit to prevent memory exhaustion from extremely large patterns.
///
/// # Examples
/// ```
/// use config::constants::MAX_VERTICES;
/// let cells = 256 * 256;
/// assert!(cells * 24 < MAX_VERTICES);
/// ```
pub const MAX_VERTICES: usize = 10_000_000;

// =============================================================================
// PRINT CONFIG
// =============================================================================

/// Immutable snapshot of the constants used by print estimation.
///
/// # Examples
/// ```
/// use config::constants::PrintConfig;
/// let config = PrintConfig::default();
/// assert!(config.print_speed > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintConfig {
    /// Deposited volume per minute, in cubic millimetres.
    pub print_speed: f64,
    /// Material density in grams per cubic centimetre.
    pub material_density: f64,
    /// Cost per gram of material.
    pub cost_per_gram: f64,
}

impl PrintConfig {
    /// Builds a configuration enforcing that every value is finite and
    /// strictly positive.
    ///
    /// # Examples
    /// ```
    /// use config::constants::PrintConfig;
    /// let cfg = PrintConfig::new(20.0, 1.27, 0.03).expect("valid config");
    /// assert_eq!(cfg.print_speed, 20.0);
    /// ```
    pub fn new(
        print_speed: f64,
        material_density: f64,
        cost_per_gram: f64,
    ) -> Result<Self, ConfigError> {
        if !(print_speed.is_finite() && print_speed > 0.0) {
            return Err(ConfigError::InvalidPrintSpeed(print_speed));
        }
        if !(material_density.is_finite() && material_density > 0.0) {
            return Err(ConfigError::InvalidDensity(material_density));
        }
        if !(cost_per_gram.is_finite() && cost_per_gram > 0.0) {
            return Err(ConfigError::InvalidCost(cost_per_gram));
        }
        Ok(Self {
            print_speed,
            material_density,
            cost_per_gram,
        })
    }
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            print_speed: PRINT_SPEED_MM3_PER_MINUTE,
            material_density: MATERIAL_DENSITY_G_PER_CM3,
            cost_per_gram: COST_PER_GRAM,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the print speed is zero, negative or not finite.
    InvalidPrintSpeed(f64),
    /// Raised when the material density is zero, negative or not finite.
    InvalidDensity(f64),
    /// Raised when the unit cost is zero, negative or not finite.
    InvalidCost(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPrintSpeed(value) => {
                write!(f, "print_speed must be positive: {value}")
            }
            ConfigError::InvalidDensity(value) => {
                write!(f, "material_density must be positive: {value}")
            }
            ConfigError::InvalidCost(value) => {
                write!(f, "cost_per_gram must be positive: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
