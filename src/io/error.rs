//! Error types for texture generation, sampling collaborators and export

use std::fmt;
use std::path::PathBuf;

/// Main error type for all texture operations
#[derive(Debug)]
pub enum TextureError {
    /// Requested grid dimension cannot be allocated
    ///
    /// Occurs when a width or height is:
    /// - Zero or negative
    /// - Larger than the supported maximum
    InvalidDimension {
        /// Axis the dimension belongs to (`"width"` or `"height"`)
        axis: &'static str,
        /// Provided dimension
        value: i64,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Coherent noise sampling failed
    Noise {
        /// Sample x coordinate
        x: f64,
        /// Sample y coordinate
        y: f64,
        /// Description of the failure
        reason: String,
    },

    /// Random source could not produce a value
    Random {
        /// Description of the failure
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Texture data cannot be converted for output
    InvalidSourceData {
        /// Description of what's wrong with the data
        reason: String,
    },

    /// Failed to save generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for TextureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                axis,
                value,
                reason,
            } => {
                write!(f, "Invalid texture {axis} {value}: {reason}")
            }
            Self::Noise { x, y, reason } => {
                write!(f, "Noise sampling failed at ({x}, {y}): {reason}")
            }
            Self::Random { reason } => {
                write!(f, "Random source failure: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid texture data: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for TextureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for texture results
pub type Result<T> = std::result::Result<T, TextureError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TextureError {
    TextureError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid dimension error
pub fn invalid_dimension(axis: &'static str, value: i64, reason: &impl ToString) -> TextureError {
    TextureError::InvalidDimension {
        axis,
        value,
        reason: reason.to_string(),
    }
}

/// Create a noise sampling error
pub fn noise_error(x: f64, y: f64, reason: &impl ToString) -> TextureError {
    TextureError::Noise {
        x,
        y,
        reason: reason.to_string(),
    }
}
