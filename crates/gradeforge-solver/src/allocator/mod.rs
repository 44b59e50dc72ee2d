//! Allocators built on top of the subset selector.
//!
//! - [`SubfieldAllocator`] picks the best elective area for a major or minor
//! - [`FreeChoiceAllocator`] fills free choice from everything unclaimed

mod free_choice;
mod subfield;

pub use free_choice::{FreeChoice, FreeChoiceAllocator};
pub use subfield::{SubfieldAllocation, SubfieldAllocator};

use gradeforge_core::{Achievement, GradeScore};

// Best-scoring graded entry; the first one wins ties.
pub(crate) fn best_graded<'a>(
    items: impl IntoIterator<Item = (usize, &'a Achievement)>,
) -> Option<(usize, &'a Achievement, GradeScore)> {
    let mut best: Option<(usize, &'a Achievement, GradeScore)> = None;
    for (index, item) in items {
        let Some(grade) = item.grade() else {
            continue;
        };
        let improves = match &best {
            None => true,
            Some((_, _, current)) => grade.is_better_than(current),
        };
        if improves {
            best = Some((index, item, grade));
        }
    }
    best
}
