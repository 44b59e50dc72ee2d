//! Exhaustive minimal-subset selection.
//!
//! The selector enumerates the power set of a candidate pool and keeps only
//! subsets that meet a credit floor and a theoretical-credit floor and that
//! are *minimal*: no single member can be dropped while both floors still
//! hold. Among those it returns the subset with the lowest weighted average.
//!
//! # Enumeration order
//!
//! Subsets are visited as bitmasks over pool indices in ascending numeric
//! order (`0..2^n`). Ties on the average keep the first mask visited, so the
//! result is deterministic for a given pool order.
//!
//! # Cost
//!
//! Search is `O(n * 2^n)`. Per-bucket pools are small; pools above the
//! configured threshold are logged at WARN but still searched in full.

use std::fmt;

use gradeforge_config::CurriculumConfig;
use gradeforge_core::{total_credits, weighted_average_or, Achievement, GradeScore};
use tracing::{error, trace, warn};

#[cfg(test)]
mod tests;

/// Widest pool a `u64` bitmask can enumerate.
const MAX_MASK_ITEMS: usize = 63;

/// How a [`Selection`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The pool held no more credits than the floor and was returned whole.
    Untrimmed,
    /// Best minimal subset meeting both floors.
    Optimal,
    /// No subset met both floors; the highest-credit subset was returned.
    Fallback,
    /// The pool was too wide to enumerate and was returned whole.
    Oversized,
}

impl fmt::Display for SelectionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionOutcome::Untrimmed => write!(f, "Untrimmed"),
            SelectionOutcome::Optimal => write!(f, "Optimal"),
            SelectionOutcome::Fallback => write!(f, "Fallback"),
            SelectionOutcome::Oversized => write!(f, "Oversized"),
        }
    }
}

/// Result of a subset search.
///
/// `indices` refer to positions in the pool passed to
/// [`SubsetSelector::select`]; `items` holds the same achievements in pool
/// order.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    indices: Vec<usize>,
    items: Vec<&'a Achievement>,
    average: GradeScore,
    outcome: SelectionOutcome,
    subsets_examined: u64,
}

impl<'a> Selection<'a> {
    /// An empty selection with the given sentinel average.
    pub fn empty(ungraded: GradeScore) -> Self {
        Self {
            indices: Vec::new(),
            items: Vec::new(),
            average: ungraded,
            outcome: SelectionOutcome::Untrimmed,
            subsets_examined: 0,
        }
    }

    /// Positions of the chosen achievements in the searched pool.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// The chosen achievements, in pool order.
    pub fn items(&self) -> &[&'a Achievement] {
        &self.items
    }

    /// Consumes the selection, returning the chosen achievements.
    pub fn into_items(self) -> Vec<&'a Achievement> {
        self.items
    }

    /// Weighted average of the chosen achievements.
    pub fn average(&self) -> GradeScore {
        self.average
    }

    /// Total credits of the chosen achievements.
    pub fn credits(&self) -> u32 {
        total_credits(self.items.iter().copied())
    }

    /// How the selection was produced.
    pub fn outcome(&self) -> SelectionOutcome {
        self.outcome
    }

    /// Number of subsets enumerated.
    pub fn subsets_examined(&self) -> u64 {
        self.subsets_examined
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

// Aggregates of one subset, accumulated in a single pass over its mask.
#[derive(Debug, Clone, Copy)]
struct SubsetStats {
    credits: u32,
    theoretical: u32,
    weighted: f64,
    graded_credits: u32,
}

impl SubsetStats {
    fn of(pool: &[&Achievement], mask: u64) -> Self {
        let mut stats = SubsetStats {
            credits: 0,
            theoretical: 0,
            weighted: 0.0,
            graded_credits: 0,
        };
        for (i, item) in pool.iter().enumerate() {
            if mask & (1 << i) == 0 {
                continue;
            }
            stats.credits += item.credits;
            stats.theoretical += item.theoretical_credits();
            if let Some(score) = item.score {
                stats.weighted += f64::from(item.credits) * score;
                stats.graded_credits += item.credits;
            }
        }
        stats
    }

    fn average(&self, ungraded: GradeScore) -> GradeScore {
        if self.graded_credits == 0 {
            ungraded
        } else {
            GradeScore::of(self.weighted / f64::from(self.graded_credits))
        }
    }

    fn meets(&self, credit_floor: u32, theoretical_floor: u32) -> bool {
        self.credits >= credit_floor && self.theoretical >= theoretical_floor
    }

    // Every member must be load-bearing for at least one floor.
    fn is_minimal(
        &self,
        pool: &[&Achievement],
        mask: u64,
        credit_floor: u32,
        theoretical_floor: u32,
    ) -> bool {
        pool.iter().enumerate().all(|(i, item)| {
            mask & (1 << i) == 0
                || self.credits - item.credits < credit_floor
                || self.theoretical - item.theoretical_credits() < theoretical_floor
        })
    }
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    mask: u64,
    credits: u32,
    average: GradeScore,
}

/// Finds the minimal floor-satisfying subset with the best average.
///
/// # Examples
///
/// ```
/// use gradeforge_core::{Achievement, Area, GradeScore};
/// use gradeforge_solver::selector::{SelectionOutcome, SubsetSelector};
///
/// let a = Achievement::graded("A", Area::Mla, 6, 1.0);
/// let b = Achievement::graded("B", Area::Mla, 5, 1.5);
/// let c = Achievement::graded("C", Area::Mla, 3, 1.7);
///
/// let selector = SubsetSelector::default();
/// let selection = selector.select(&[&a, &b, &c], 6, 0);
///
/// assert_eq!(selection.items(), &[&a]);
/// assert_eq!(selection.average(), GradeScore::of(1.0));
/// assert_eq!(selection.outcome(), SelectionOutcome::Optimal);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SubsetSelector {
    ungraded: GradeScore,
    warn_threshold: usize,
}

impl Default for SubsetSelector {
    fn default() -> Self {
        Self::new(GradeScore::UNGRADED)
    }
}

impl SubsetSelector {
    /// Creates a selector using `ungraded` as the sentinel average.
    pub fn new(ungraded: GradeScore) -> Self {
        Self {
            ungraded,
            warn_threshold: 20,
        }
    }

    /// Creates a selector from the curriculum configuration.
    pub fn from_config(config: &CurriculumConfig) -> Self {
        Self::new(config.ungraded_score()).with_warn_threshold(config.max_exhaustive_items)
    }

    /// Sets the pool size above which a warning is logged.
    pub fn with_warn_threshold(mut self, items: usize) -> Self {
        self.warn_threshold = items;
        self
    }

    /// Returns the sentinel average.
    pub fn ungraded(&self) -> GradeScore {
        self.ungraded
    }

    /// Selects the best minimal subset of `pool`.
    ///
    /// Never fails: an empty pool yields an empty selection, an infeasible
    /// pool yields the highest-credit subset.
    pub fn select<'a>(
        &self,
        pool: &[&'a Achievement],
        credit_floor: u32,
        theoretical_floor: u32,
    ) -> Selection<'a> {
        let n = pool.len();
        let total = total_credits(pool.iter().copied());

        if total <= credit_floor {
            return self.whole(pool, SelectionOutcome::Untrimmed);
        }

        if n > MAX_MASK_ITEMS {
            error!(
                event = "selection_oversized",
                pool_size = n,
                limit = MAX_MASK_ITEMS,
            );
            return self.whole(pool, SelectionOutcome::Oversized);
        }
        if n > self.warn_threshold {
            warn!(
                event = "selection_large_pool",
                pool_size = n,
                threshold = self.warn_threshold,
                subsets = 1u64 << n,
            );
        }

        let subsets = 1u64 << n;
        let mut best: Option<Candidate> = None;
        let mut fallback: Option<Candidate> = None;

        for mask in 0..subsets {
            let stats = SubsetStats::of(pool, mask);
            let candidate = Candidate {
                mask,
                credits: stats.credits,
                average: stats.average(self.ungraded),
            };

            if stats.meets(credit_floor, theoretical_floor) {
                if !stats.is_minimal(pool, mask, credit_floor, theoretical_floor) {
                    continue;
                }
                let improves = match &best {
                    None => true,
                    Some(current) => candidate.average.is_better_than(&current.average),
                };
                if improves {
                    best = Some(candidate);
                }
            } else {
                let improves = match &fallback {
                    None => true,
                    Some(current) => {
                        candidate.credits > current.credits
                            || (candidate.credits == current.credits
                                && candidate.average.is_better_than(&current.average))
                    }
                };
                if improves {
                    fallback = Some(candidate);
                }
            }
        }

        let (chosen, outcome) = match (best, fallback) {
            (Some(best), _) => (best, SelectionOutcome::Optimal),
            (None, Some(fallback)) => (fallback, SelectionOutcome::Fallback),
            // The empty mask is always visited, so one of the two is set.
            (None, None) => return self.whole(pool, SelectionOutcome::Fallback),
        };

        let indices: Vec<usize> = (0..n).filter(|i| chosen.mask & (1 << i) != 0).collect();
        let items = indices.iter().map(|&i| pool[i]).collect();

        trace!(
            event = "selection",
            pool_size = n,
            credit_floor,
            theoretical_floor,
            outcome = %outcome,
            credits = chosen.credits,
            average = %chosen.average,
            subsets = subsets,
        );

        Selection {
            indices,
            items,
            average: chosen.average,
            outcome,
            subsets_examined: subsets,
        }
    }

    fn whole<'a>(&self, pool: &[&'a Achievement], outcome: SelectionOutcome) -> Selection<'a> {
        Selection {
            indices: (0..pool.len()).collect(),
            items: pool.to_vec(),
            average: weighted_average_or(pool.iter().copied(), self.ungraded),
            outcome,
            subsets_examined: 0,
        }
    }
}
