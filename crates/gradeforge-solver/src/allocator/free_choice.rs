//! Residual free-choice allocation.
//!
//! Free choice is filled in three steps:
//!
//! 1. **Swap-in**: a strong second practical or guided research project is
//!    committed first if its grade beats the default fill of the pool.
//! 2. **Baseline**: the selector fills the remaining credit and theoretical
//!    deficit from the remaining pool.
//! 3. **Improvement**: unclaimed achievements are added one at a time, best
//!    grade first, while each one lowers the running average of everything
//!    committed so far. This is a local greedy optimum.

use gradeforge_core::{total_credits, weighted_average_or, Achievement};
use tracing::debug;

use super::best_graded;
use crate::selector::{Selection, SubsetSelector};

/// The free-choice set, split by the step that contributed each item.
#[derive(Debug, Clone)]
pub struct FreeChoice<'a> {
    /// Project work committed before the baseline fill.
    pub swapped_in: Option<&'a Achievement>,
    /// Selector result over the remaining pool.
    pub baseline: Selection<'a>,
    /// Items added by the greedy pass, in the order they were added.
    pub improvements: Vec<&'a Achievement>,
    /// Credits still requested from the baseline after the swap-in.
    pub credit_needed: u32,
    /// Theoretical credits still requested from the baseline after the swap-in.
    pub theoretical_needed: u32,
}

impl<'a> FreeChoice<'a> {
    /// All free-choice achievements: swap-in, then baseline, then improvements.
    pub fn achievements(&self) -> Vec<&'a Achievement> {
        self.swapped_in
            .into_iter()
            .chain(self.baseline.items().iter().copied())
            .chain(self.improvements.iter().copied())
            .collect()
    }

    pub fn credits(&self) -> u32 {
        total_credits(self.achievements())
    }
}

/// Fills free choice from everything no other bucket claimed.
#[derive(Debug, Clone, Copy)]
pub struct FreeChoiceAllocator {
    selector: SubsetSelector,
}

impl FreeChoiceAllocator {
    pub fn new(selector: SubsetSelector) -> Self {
        Self { selector }
    }

    /// Allocates free choice.
    ///
    /// `pool` holds only unclaimed achievements; `committed` holds every
    /// achievement already placed in another bucket and only feeds the
    /// running average of the improvement pass.
    pub fn allocate<'a>(
        &self,
        mut pool: Vec<&'a Achievement>,
        credit_needed: u32,
        theoretical_needed: u32,
        committed: &[&'a Achievement],
    ) -> FreeChoice<'a> {
        let ungraded = self.selector.ungraded();
        let mut credit_needed = credit_needed;
        let mut theoretical_needed = theoretical_needed;

        let default_fill = self.selector.select(&pool, credit_needed, theoretical_needed);
        let project = best_graded(
            pool.iter()
                .copied()
                .enumerate()
                .filter(|(_, item)| item.area.is_project_work()),
        );
        let swapped_in = match project {
            Some((index, item, grade)) if grade.is_better_than(&default_fill.average()) => {
                pool.remove(index);
                credit_needed = credit_needed.saturating_sub(item.credits);
                theoretical_needed = theoretical_needed.saturating_sub(item.theoretical_credits());
                debug!(
                    event = "free_choice_swap_in",
                    achievement = %item.id,
                    area = %item.area,
                    grade = %grade,
                    default_fill_average = %default_fill.average(),
                );
                Some(item)
            }
            _ => None,
        };

        let baseline = self.selector.select(&pool, credit_needed, theoretical_needed);
        let mut remaining: Vec<&'a Achievement> = pool
            .iter()
            .enumerate()
            .filter(|(index, _)| !baseline.indices().contains(index))
            .map(|(_, item)| *item)
            .collect();

        let mut chosen: Vec<&'a Achievement> = swapped_in
            .into_iter()
            .chain(baseline.items().iter().copied())
            .collect();
        let mut improvements = Vec::new();

        while let Some((index, item, grade)) = best_graded(remaining.iter().copied().enumerate())
        {
            let running = weighted_average_or(
                committed.iter().copied().chain(chosen.iter().copied()),
                ungraded,
            );
            if !grade.is_better_than(&running) {
                break;
            }
            remaining.remove(index);
            chosen.push(item);
            improvements.push(item);
            debug!(
                event = "free_choice_improvement",
                achievement = %item.id,
                grade = %grade,
                running_average = %running,
            );
        }

        FreeChoice {
            swapped_in,
            baseline,
            improvements,
            credit_needed,
            theoretical_needed,
        }
    }
}
