//! Error types for MIMIC

use thiserror::Error;

use crate::Part;

/// Core MIMIC errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MimicError {
    // Shape errors
    #[error("Shape mismatch in {part}: expected {expected} points, got {actual}")]
    ShapeMismatch {
        part: Part,
        expected: usize,
        actual: usize,
    },

    #[error("Feature vector length mismatch: expected {expected}, got {actual}")]
    FeatureLength { expected: usize, actual: usize },

    // Sequence errors
    #[error("Empty sequence: at least one frame is required")]
    EmptySequence,

    #[error("Frame index {index} out of range for sequence of {len} frames")]
    FrameOutOfRange { index: usize, len: usize },

    // Setup errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid skeleton: {0}")]
    InvalidSkeleton(String),
}

/// Result type for MIMIC operations
pub type MimicResult<T> = Result<T, MimicError>;
