//! Requirement buckets filled by the allocation pipeline.

use std::fmt;

use gradeforge_core::{
    total_credits, total_theoretical_credits, weighted_average_or, Achievement, Area, GradeScore,
};
use serde::Serialize;

/// The requirement slot a bucket fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketKind {
    Thesis,
    InterdisciplinaryProject,
    SupportElectives,
    Practical,
    Major,
    /// Minor subfield, numbered from 1 in allocation order.
    Minor(u8),
    FreeChoice,
}

impl fmt::Display for BucketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketKind::Thesis => write!(f, "Thesis"),
            BucketKind::InterdisciplinaryProject => write!(f, "Interdisciplinary project"),
            BucketKind::SupportElectives => write!(f, "Support electives"),
            BucketKind::Practical => write!(f, "Practical"),
            BucketKind::Major => write!(f, "Major"),
            BucketKind::Minor(n) => write!(f, "Minor {}", n),
            BucketKind::FreeChoice => write!(f, "Free choice"),
        }
    }
}

/// Achievements committed to one requirement slot.
///
/// Buckets borrow achievements from the input pool. The pipeline guarantees
/// that no achievement is committed to more than one bucket.
#[derive(Debug, Clone)]
pub struct Bucket<'a> {
    kind: BucketKind,
    area: Option<Area>,
    achievements: Vec<&'a Achievement>,
    credit_floor: u32,
    theoretical_floor: u32,
    average: GradeScore,
}

impl<'a> Bucket<'a> {
    /// Creates a bucket, computing its average with `ungraded` as sentinel.
    pub fn new(
        kind: BucketKind,
        achievements: Vec<&'a Achievement>,
        credit_floor: u32,
        ungraded: GradeScore,
    ) -> Self {
        let average = weighted_average_or(achievements.iter().copied(), ungraded);
        Self {
            kind,
            area: None,
            achievements,
            credit_floor,
            theoretical_floor: 0,
            average,
        }
    }

    /// Tags the bucket with the subfield it was filled from.
    pub fn with_area(mut self, area: Option<Area>) -> Self {
        self.area = area;
        self
    }

    /// Sets the theoretical-credit floor this bucket was filled against.
    pub fn with_theoretical_floor(mut self, floor: u32) -> Self {
        self.theoretical_floor = floor;
        self
    }

    pub fn kind(&self) -> BucketKind {
        self.kind
    }

    /// Subfield for major and minor buckets.
    pub fn area(&self) -> Option<Area> {
        self.area
    }

    pub fn achievements(&self) -> &[&'a Achievement] {
        &self.achievements
    }

    pub fn credit_floor(&self) -> u32 {
        self.credit_floor
    }

    pub fn theoretical_floor(&self) -> u32 {
        self.theoretical_floor
    }

    pub fn credits(&self) -> u32 {
        total_credits(self.achievements.iter().copied())
    }

    pub fn theoretical_credits(&self) -> u32 {
        total_theoretical_credits(self.achievements.iter().copied())
    }

    pub fn average(&self) -> GradeScore {
        self.average
    }

    /// Credits reach the floor.
    pub fn is_complete(&self) -> bool {
        self.credits() >= self.credit_floor
    }

    /// Credits capped at the floor, so over-fulfilment adds no weight.
    pub fn weighted_credits(&self) -> u32 {
        self.credits().min(self.credit_floor)
    }

    /// Returns true if `achievement` (by identity) is in this bucket.
    pub fn contains(&self, achievement: &Achievement) -> bool {
        self.achievements
            .iter()
            .any(|held| std::ptr::eq(*held, achievement))
    }
}
