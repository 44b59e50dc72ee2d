//! GradeForge Core - Core types for curriculum allocation
//!
//! This crate provides the fundamental abstractions for GradeForge:
//! - Area tags for requirement categories and elective subfields
//! - The immutable `Achievement` record
//! - `GradeScore`, the ordered weighted-average score type
//! - Boundary error types

pub mod achievement;
pub mod area;
pub mod error;
pub mod score;

pub use achievement::{
    total_credits, total_theoretical_credits, validate_pool, weighted_average, weighted_average_or,
    Achievement,
};
pub use area::Area;
pub use error::GradeForgeError;
pub use score::GradeScore;
