//! GradeForge Solver - Requirement allocation engine
//!
//! This crate allocates a pool of graded achievements to curriculum
//! requirements so that the final credit-weighted grade is as good as
//! possible:
//! - Exhaustive minimal-subset selection per requirement
//! - Major and minor subfield allocation over open elective areas
//! - Free-choice allocation with project swap-in and greedy improvement
//! - Aggregation into an overall score and completion status

pub mod aggregate;
pub mod allocator;
pub mod bucket;
pub mod pipeline;
pub mod pool;
pub mod report;
pub mod selector;

pub use aggregate::{Aggregator, BucketSummary, Summary};
pub use allocator::{FreeChoice, FreeChoiceAllocator, SubfieldAllocation, SubfieldAllocator};
pub use bucket::{Bucket, BucketKind};
pub use pipeline::{CurriculumPlan, CurriculumSolver};
pub use pool::{AreaPools, AreaSet};
pub use report::{BucketReport, PlanReport, TheoreticalReport};
pub use selector::{Selection, SelectionOutcome, SubsetSelector};
