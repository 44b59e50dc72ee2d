//! GradeForge - Curriculum grade allocation in Rust
//!
//! Hand over a transcript and get back the allocation with the best final
//! grade.
//!
//! # Example
//!
//! ```rust
//! use gradeforge::prelude::*;
//!
//! let transcript = vec![
//!     Achievement::graded("X1", Area::Alg, 20, 1.0),
//!     Achievement::graded("Y1", Area::Mla, 18, 2.0),
//! ];
//!
//! let plan = CurriculumSolver::default().solve(&transcript);
//! assert_eq!(plan.bucket(BucketKind::Major).unwrap().area(), Some(Area::Alg));
//! ```

// Core types
pub use gradeforge_core::{
    total_credits, total_theoretical_credits, validate_pool, weighted_average, Achievement, Area,
    GradeForgeError, GradeScore,
};

// Configuration
pub use gradeforge_config::{ConfigError, CurriculumConfig};

// Allocation engine
pub use gradeforge_solver::{
    Bucket, BucketKind, BucketReport, CurriculumPlan, CurriculumSolver, PlanReport, Summary,
};

/// Lower-level building blocks: selector, allocators, pools, aggregator.
pub mod engine {
    pub use gradeforge_solver::{
        Aggregator, AreaPools, AreaSet, FreeChoice, FreeChoiceAllocator, Selection,
        SelectionOutcome, SubfieldAllocation, SubfieldAllocator, SubsetSelector,
    };
}

#[cfg(feature = "console")]
pub use gradeforge_console as console;

mod plan;
pub use plan::{plan, plan_with_config, CONFIG_FILE};

pub mod prelude {
    pub use super::{plan, plan_with_config};
    pub use super::{Achievement, Area, GradeScore};
    pub use super::{BucketKind, CurriculumConfig, CurriculumPlan, CurriculumSolver, PlanReport};
}
