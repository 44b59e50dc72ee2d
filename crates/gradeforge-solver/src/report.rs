//! Owned, serializable view of a curriculum plan.

use gradeforge_core::{Achievement, Area, GradeScore};
use serde::Serialize;

use crate::bucket::BucketKind;
use crate::pipeline::CurriculumPlan;

/// One bucket in a [`PlanReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketReport {
    pub kind: BucketKind,
    /// Display name, e.g. `"Minor 2"`.
    pub name: String,
    pub area: Option<Area>,
    pub achievements: Vec<String>,
    pub credits: u32,
    pub credit_floor: u32,
    pub average: GradeScore,
    pub complete: bool,
}

/// Theoretical-credit figures of a [`PlanReport`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TheoreticalReport {
    pub credits: u32,
    pub floor: u32,
    pub satisfied: bool,
    pub ratio: f64,
}

/// Everything a caller needs to display or export a plan.
///
/// Unlike [`CurriculumPlan`] it owns its data, so it outlives the input
/// pool and serializes directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanReport {
    pub buckets: Vec<BucketReport>,
    pub complete: bool,
    pub theoretical: TheoreticalReport,
    pub final_score: GradeScore,
    pub capped_score: GradeScore,
    pub non_contributing: Vec<String>,
}

impl PlanReport {
    pub fn from_plan(plan: &CurriculumPlan<'_>) -> Self {
        let summary = plan.summary();
        let buckets = plan
            .buckets()
            .iter()
            .map(|bucket| BucketReport {
                kind: bucket.kind(),
                name: bucket.kind().to_string(),
                area: bucket.area(),
                achievements: owned_ids(bucket.achievements()),
                credits: bucket.credits(),
                credit_floor: bucket.credit_floor(),
                average: bucket.average(),
                complete: bucket.is_complete(),
            })
            .collect();

        Self {
            buckets,
            complete: summary.complete,
            theoretical: TheoreticalReport {
                credits: summary.theoretical_credits,
                floor: summary.theoretical_floor,
                satisfied: summary.theoretical_satisfied,
                ratio: summary.theoretical_ratio(),
            },
            final_score: summary.final_score,
            capped_score: summary.capped_score,
            non_contributing: owned_ids(plan.non_contributing()),
        }
    }

    pub fn bucket(&self, kind: BucketKind) -> Option<&BucketReport> {
        self.buckets.iter().find(|b| b.kind == kind)
    }
}

fn owned_ids(items: &[&Achievement]) -> Vec<String> {
    items.iter().map(|a| a.id.clone()).collect()
}
