//! # Mesh Errors
//!
//! Error types for pattern mesh generation.
//!
//! ## Error Policy
//!
//! - No partial meshes are returned when generation fails
//! - Builder failures surface as a single [`MeshError::Generation`]
//! - Invalid parameters are rejected before any geometry is built

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Geometry could not be produced.
    #[error("Mesh generation failed: {message}")]
    Generation { message: String },

    /// A generation parameter is outside its valid range.
    #[error("Invalid parameter `{parameter}`: {message}")]
    ParameterValidation {
        parameter: &'static str,
        message: String,
    },

    /// The pattern grid does not match its declared dimensions.
    #[error("Invalid pattern grid: {message}")]
    InvalidGrid { message: String },
}

impl MeshError {
    /// Creates a mesh generation error.
    pub fn generation(message: impl Into<String>) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Creates a parameter validation error.
    pub fn parameter(parameter: &'static str, message: impl Into<String>) -> Self {
        Self::ParameterValidation {
            parameter,
            message: message.into(),
        }
    }

    /// Creates an invalid grid error.
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        Self::InvalidGrid {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
