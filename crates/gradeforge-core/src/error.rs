//! Error types for GradeForge

use thiserror::Error;

/// Main error type for GradeForge boundary checks.
///
/// Allocation itself never fails; these errors are raised only when input
/// records are parsed or validated before they reach the solver.
#[derive(Debug, Error, PartialEq)]
pub enum GradeForgeError {
    /// Area tag that is not part of the curriculum
    #[error("Unknown area tag: {0}")]
    UnknownArea(String),

    /// Achievement record that breaks a data-model invariant
    #[error("Invalid achievement '{id}': {reason}")]
    InvalidAchievement { id: String, reason: String },

    /// Two records share the same identifier
    #[error("Duplicate achievement: {0}")]
    DuplicateAchievement(String),
}

/// Result type alias for GradeForge operations
pub type Result<T> = std::result::Result<T, GradeForgeError>;
