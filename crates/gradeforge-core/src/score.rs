//! GradeScore - credit-weighted average grade

use std::cmp::Ordering;
use std::fmt;

/// A credit-weighted average grade.
///
/// Follows the academic convention: lower is better. Ordering is the plain
/// numeric ordering (total, via [`f64::total_cmp`]), so the best of a set of
/// scores is its *minimum*.
///
/// # Examples
///
/// ```
/// use gradeforge_core::GradeScore;
///
/// let good = GradeScore::of(1.3);
/// let poor = GradeScore::of(2.7);
///
/// assert!(good.is_better_than(&poor));
/// assert!(good < poor);
/// assert_eq!(GradeScore::default(), GradeScore::UNGRADED);
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GradeScore {
    value: f64,
}

impl GradeScore {
    /// Sentinel average for sets without any graded achievement.
    pub const UNGRADED: GradeScore = GradeScore { value: 5.0 };

    /// Creates a score with the given average.
    #[inline]
    pub const fn of(value: f64) -> Self {
        GradeScore { value }
    }

    /// Returns the average as a float.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Returns true if this score is strictly better (lower) than `other`.
    #[inline]
    pub fn is_better_than(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns true if this score is strictly worse (higher) than `other`.
    #[inline]
    pub fn is_worse_than(&self, other: &Self) -> bool {
        self > other
    }
}

impl Default for GradeScore {
    fn default() -> Self {
        GradeScore::UNGRADED
    }
}

impl PartialEq for GradeScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GradeScore {}

impl Ord for GradeScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for GradeScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for GradeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GradeScore({})", self.value)
    }
}

impl fmt::Display for GradeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.value)
    }
}

impl From<f64> for GradeScore {
    fn from(value: f64) -> Self {
        GradeScore::of(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let score = GradeScore::of(1.7);
        assert_eq!(score.value(), 1.7);
    }

    #[test]
    fn test_comparison() {
        let s1 = GradeScore::of(1.0);
        let s2 = GradeScore::of(2.3);

        assert!(s1 < s2);
        assert!(s1.is_better_than(&s2));
        assert!(s2.is_worse_than(&s1));
        assert!(!s1.is_better_than(&s1));
    }

    #[test]
    fn test_sentinel_is_worst_passing_grade() {
        assert!(GradeScore::of(4.0).is_better_than(&GradeScore::UNGRADED));
        assert_eq!(GradeScore::UNGRADED.value(), 5.0);
    }

    #[test]
    fn test_min_is_best() {
        let scores = [GradeScore::of(2.0), GradeScore::of(1.3), GradeScore::of(1.7)];
        assert_eq!(scores.iter().min(), Some(&GradeScore::of(1.3)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GradeScore::of(1.25)), "1.250");
        assert_eq!(format!("{:?}", GradeScore::of(1.5)), "GradeScore(1.5)");
    }
}
