//! The immutable achievement record and aggregates over sets of them.

use std::collections::HashSet;

use crate::area::Area;
use crate::error::{GradeForgeError, Result};
use crate::score::GradeScore;

/// A graded (or ungraded) academic achievement.
///
/// Achievements are created once by the data source and only read by the
/// solver. Credits are always positive; an ungraded achievement contributes
/// credits but is left out of every average.
///
/// # Examples
///
/// ```
/// use gradeforge_core::{Achievement, Area};
///
/// let course = Achievement::graded("EAD", Area::Alg, 8, 1.3).theoretical();
/// assert_eq!(course.theoretical_credits(), 8);
///
/// let seminar = Achievement::ungraded("Seminar", Area::Other, 5);
/// assert!(!seminar.is_graded());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Achievement {
    pub id: String,
    pub area: Area,
    pub credits: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub score: Option<f64>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub theoretical: bool,
}

impl Achievement {
    /// Creates a graded achievement.
    pub fn graded(id: impl Into<String>, area: Area, credits: u32, score: f64) -> Self {
        Self {
            id: id.into(),
            area,
            credits,
            score: Some(score),
            theoretical: false,
        }
    }

    /// Creates an ungraded (pass/fail) achievement.
    pub fn ungraded(id: impl Into<String>, area: Area, credits: u32) -> Self {
        Self {
            id: id.into(),
            area,
            credits,
            score: None,
            theoretical: false,
        }
    }

    /// Marks the achievement as counting toward the theoretical requirement.
    pub fn theoretical(mut self) -> Self {
        self.theoretical = true;
        self
    }

    /// Returns true if the achievement carries a score.
    #[inline]
    pub fn is_graded(&self) -> bool {
        self.score.is_some()
    }

    /// Credits that count toward the theoretical requirement.
    #[inline]
    pub fn theoretical_credits(&self) -> u32 {
        if self.theoretical {
            self.credits
        } else {
            0
        }
    }

    /// Returns the score wrapped as a [`GradeScore`], if graded.
    #[inline]
    pub fn grade(&self) -> Option<GradeScore> {
        self.score.map(GradeScore::of)
    }

    /// Checks the per-record invariants: positive credits and a finite score.
    pub fn validate(&self) -> Result<()> {
        if self.credits == 0 {
            return Err(GradeForgeError::InvalidAchievement {
                id: self.id.clone(),
                reason: "credits must be positive".to_string(),
            });
        }
        if let Some(score) = self.score {
            if !score.is_finite() {
                return Err(GradeForgeError::InvalidAchievement {
                    id: self.id.clone(),
                    reason: format!("score {score} is not a finite number"),
                });
            }
        }
        Ok(())
    }
}

/// Sum of credit weights.
pub fn total_credits<'a>(items: impl IntoIterator<Item = &'a Achievement>) -> u32 {
    items.into_iter().map(|a| a.credits).sum()
}

/// Sum of credit weights flagged as theoretical.
pub fn total_theoretical_credits<'a>(items: impl IntoIterator<Item = &'a Achievement>) -> u32 {
    items.into_iter().map(Achievement::theoretical_credits).sum()
}

/// Credit-weighted average over graded items.
///
/// Returns `fallback` when no item carries a score.
pub fn weighted_average_or<'a>(
    items: impl IntoIterator<Item = &'a Achievement>,
    fallback: GradeScore,
) -> GradeScore {
    let mut weighted = 0.0;
    let mut credits = 0u64;
    for item in items {
        if let Some(score) = item.score {
            weighted += f64::from(item.credits) * score;
            credits += u64::from(item.credits);
        }
    }
    if credits == 0 {
        fallback
    } else {
        GradeScore::of(weighted / credits as f64)
    }
}

/// Credit-weighted average over graded items, [`GradeScore::UNGRADED`] if none.
///
/// ```
/// use gradeforge_core::{weighted_average, Achievement, Area, GradeScore};
///
/// let items = [
///     Achievement::graded("A", Area::Alg, 6, 1.0),
///     Achievement::graded("B", Area::Alg, 2, 2.0),
/// ];
/// assert_eq!(weighted_average(&items), GradeScore::of(1.25));
/// assert_eq!(weighted_average(std::iter::empty()), GradeScore::UNGRADED);
/// ```
pub fn weighted_average<'a>(items: impl IntoIterator<Item = &'a Achievement>) -> GradeScore {
    weighted_average_or(items, GradeScore::UNGRADED)
}

/// Validates a whole pool: every record individually plus unique identifiers.
///
/// The solver does not call this; it is a boundary check for data sources.
pub fn validate_pool(pool: &[Achievement]) -> Result<()> {
    let mut seen = HashSet::with_capacity(pool.len());
    for achievement in pool {
        achievement.validate()?;
        if !seen.insert(achievement.id.as_str()) {
            return Err(GradeForgeError::DuplicateAchievement(
                achievement.id.clone(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theoretical_credits() {
        let plain = Achievement::graded("NLP", Area::Mla, 6, 2.3);
        let theo = Achievement::graded("ProgOpt", Area::Fma, 8, 2.3).theoretical();

        assert_eq!(plain.theoretical_credits(), 0);
        assert_eq!(theo.theoretical_credits(), 8);
        assert_eq!(total_theoretical_credits([&plain, &theo]), 8);
        assert_eq!(total_credits([&plain, &theo]), 14);
    }

    #[test]
    fn test_weighted_average_skips_ungraded() {
        let items = vec![
            Achievement::graded("A", Area::Mla, 5, 1.0),
            Achievement::ungraded("B", Area::Mla, 10),
            Achievement::graded("C", Area::Mla, 5, 2.0),
        ];
        assert_eq!(weighted_average(&items), GradeScore::of(1.5));
        assert_eq!(total_credits(&items), 20);
    }

    #[test]
    fn test_weighted_average_fallback() {
        let items = vec![Achievement::ungraded("B", Area::Mla, 10)];
        assert_eq!(weighted_average(&items), GradeScore::UNGRADED);
        assert_eq!(
            weighted_average_or(&items, GradeScore::of(4.0)),
            GradeScore::of(4.0)
        );
    }

    #[test]
    fn test_validate_rejects_zero_credits() {
        let item = Achievement::graded("Zero", Area::Se, 0, 1.0);
        assert!(matches!(
            item.validate(),
            Err(GradeForgeError::InvalidAchievement { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_nan_score() {
        let item = Achievement::graded("NaN", Area::Se, 5, f64::NAN);
        assert!(item.validate().is_err());
    }

    #[test]
    fn test_validate_pool_rejects_duplicates() {
        let pool = vec![
            Achievement::graded("ERDB", Area::Dbi, 6, 1.0),
            Achievement::graded("ERDB", Area::Dbi, 6, 1.3),
        ];
        assert_eq!(
            validate_pool(&pool),
            Err(GradeForgeError::DuplicateAchievement("ERDB".to_string()))
        );
    }

    #[test]
    fn test_validate_pool_accepts_clean_input() {
        let pool = vec![
            Achievement::graded("ERDB", Area::Dbi, 6, 1.0),
            Achievement::ungraded("Franz", Area::Sup, 3),
        ];
        assert!(validate_pool(&pool).is_ok());
    }
}
