//! Combines filled buckets into the overall result.

use gradeforge_core::{weighted_average_or, Area, GradeScore};
use serde::Serialize;

use crate::bucket::{Bucket, BucketKind};

/// Per-bucket figures.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketSummary {
    pub kind: BucketKind,
    pub area: Option<Area>,
    pub credits: u32,
    pub credit_floor: u32,
    /// Credits capped at the floor.
    pub weighted_credits: u32,
    pub theoretical_credits: u32,
    pub average: GradeScore,
    pub complete: bool,
}

impl BucketSummary {
    fn of(bucket: &Bucket<'_>) -> Self {
        Self {
            kind: bucket.kind(),
            area: bucket.area(),
            credits: bucket.credits(),
            credit_floor: bucket.credit_floor(),
            weighted_credits: bucket.weighted_credits(),
            theoretical_credits: bucket.theoretical_credits(),
            average: bucket.average(),
            complete: bucket.is_complete(),
        }
    }
}

/// Overall result of an allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub buckets: Vec<BucketSummary>,
    /// Every bucket is complete.
    pub complete: bool,
    /// Theoretical credits across all committed achievements.
    pub theoretical_credits: u32,
    pub theoretical_floor: u32,
    /// Theoretical credits exceed the floor.
    pub theoretical_satisfied: bool,
    /// Credit-weighted average over every committed achievement.
    pub final_score: GradeScore,
    /// Average of bucket averages weighted by capped credits.
    pub capped_score: GradeScore,
}

impl Summary {
    /// Theoretical credits relative to the floor.
    pub fn theoretical_ratio(&self) -> f64 {
        if self.theoretical_floor == 0 {
            1.0
        } else {
            f64::from(self.theoretical_credits) / f64::from(self.theoretical_floor)
        }
    }

    /// Looks up the summary of a bucket.
    pub fn bucket(&self, kind: BucketKind) -> Option<&BucketSummary> {
        self.buckets.iter().find(|b| b.kind == kind)
    }
}

/// Computes the overall score and completion from filled buckets.
#[derive(Debug, Clone, Copy)]
pub struct Aggregator {
    ungraded: GradeScore,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(GradeScore::UNGRADED)
    }
}

impl Aggregator {
    pub fn new(ungraded: GradeScore) -> Self {
        Self { ungraded }
    }

    pub fn aggregate(&self, buckets: &[Bucket<'_>], theoretical_floor: u32) -> Summary {
        let summaries: Vec<BucketSummary> = buckets.iter().map(BucketSummary::of).collect();
        let complete = summaries.iter().all(|b| b.complete);
        let theoretical_credits: u32 = summaries.iter().map(|b| b.theoretical_credits).sum();

        let final_score = weighted_average_or(
            buckets.iter().flat_map(|b| b.achievements().iter().copied()),
            self.ungraded,
        );

        let capped_weight: u32 = summaries.iter().map(|b| b.weighted_credits).sum();
        let capped_score = if capped_weight == 0 {
            self.ungraded
        } else {
            let weighted: f64 = summaries
                .iter()
                .map(|b| b.average.value() * f64::from(b.weighted_credits))
                .sum();
            GradeScore::of(weighted / f64::from(capped_weight))
        };

        Summary {
            buckets: summaries,
            complete,
            theoretical_credits,
            theoretical_floor,
            theoretical_satisfied: theoretical_credits > theoretical_floor,
            final_score,
            capped_score,
        }
    }
}
