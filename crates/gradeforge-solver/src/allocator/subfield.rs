//! Major and minor subfield allocation.

use gradeforge_core::{Area, GradeScore};
use tracing::debug;

use crate::pool::{AreaPools, AreaSet};
use crate::selector::{Selection, SubsetSelector};

/// The winning area of a subfield allocation and its chosen subset.
#[derive(Debug, Clone)]
pub struct SubfieldAllocation<'a> {
    /// `None` when there was no candidate area.
    pub area: Option<Area>,
    pub selection: Selection<'a>,
}

impl<'a> SubfieldAllocation<'a> {
    /// The "no area" result for an empty candidate set.
    pub fn none(ungraded: GradeScore) -> Self {
        Self {
            area: None,
            selection: Selection::empty(ungraded),
        }
    }

    pub fn is_none(&self) -> bool {
        self.area.is_none()
    }
}

/// Picks the single best-performing area for a credit target.
///
/// For every candidate area the selector trims that area's achievements to
/// the floor. If no area reaches the floor, the area closest to it (most
/// credits) wins. Otherwise the area with the best average among those that
/// reach it wins. Ties go to the first area in enumeration order.
#[derive(Debug, Clone, Copy)]
pub struct SubfieldAllocator {
    selector: SubsetSelector,
}

impl SubfieldAllocator {
    pub fn new(selector: SubsetSelector) -> Self {
        Self { selector }
    }

    /// Allocates the best area among `candidates`.
    pub fn allocate_best<'a>(
        &self,
        credit_floor: u32,
        pools: &AreaPools<'a>,
        candidates: &AreaSet,
    ) -> SubfieldAllocation<'a> {
        let results: Vec<(Area, Selection<'a>)> = candidates
            .iter()
            .map(|area| (area, self.selector.select(pools.get(area), credit_floor, 0)))
            .collect();

        let any_reaches_floor = results
            .iter()
            .any(|(_, selection)| selection.credits() >= credit_floor);

        let mut winner: Option<(Area, Selection<'a>)> = None;
        for (area, selection) in results {
            let improves = match &winner {
                None => !any_reaches_floor || selection.credits() >= credit_floor,
                Some((_, current)) if any_reaches_floor => {
                    selection.credits() >= credit_floor
                        && selection.average().is_better_than(&current.average())
                }
                Some((_, current)) => selection.credits() > current.credits(),
            };
            if improves {
                winner = Some((area, selection));
            }
        }

        match winner {
            Some((area, selection)) => {
                debug!(
                    event = "subfield_selected",
                    area = %area,
                    credit_floor,
                    credits = selection.credits(),
                    average = %selection.average(),
                    candidates = candidates.len(),
                );
                SubfieldAllocation {
                    area: Some(area),
                    selection,
                }
            }
            None => {
                debug!(event = "subfield_unavailable", credit_floor);
                SubfieldAllocation::none(self.selector.ungraded())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeforge_core::Achievement;

    fn allocator() -> SubfieldAllocator {
        SubfieldAllocator::new(SubsetSelector::default())
    }

    #[test]
    fn test_best_average_wins_when_both_reach_floor() {
        let items = vec![
            Achievement::graded("X1", Area::Alg, 20, 1.0),
            Achievement::graded("Y1", Area::Mla, 18, 2.0),
        ];
        let pools = AreaPools::from_achievements(&items);

        let allocation = allocator().allocate_best(18, &pools, &pools.elective_areas());

        assert_eq!(allocation.area, Some(Area::Alg));
        assert_eq!(allocation.selection.items(), &[&items[0]]);
    }

    #[test]
    fn test_closest_area_wins_when_none_reach_floor() {
        let items = vec![
            Achievement::graded("A", Area::Alg, 6, 1.0),
            Achievement::graded("M1", Area::Mla, 6, 2.0),
            Achievement::graded("M2", Area::Mla, 5, 2.3),
        ];
        let pools = AreaPools::from_achievements(&items);

        let allocation = allocator().allocate_best(18, &pools, &pools.elective_areas());

        assert_eq!(allocation.area, Some(Area::Mla));
        assert_eq!(allocation.selection.credits(), 11);
    }

    #[test]
    fn test_area_reaching_floor_beats_better_average_below_it() {
        let items = vec![
            Achievement::graded("A", Area::Alg, 6, 1.0),
            Achievement::graded("S", Area::Sp, 8, 2.7),
        ];
        let pools = AreaPools::from_achievements(&items);

        let allocation = allocator().allocate_best(8, &pools, &pools.elective_areas());

        assert_eq!(allocation.area, Some(Area::Sp));
    }

    #[test]
    fn test_empty_candidates() {
        let pools = AreaPools::default();

        let allocation = allocator().allocate_best(8, &pools, &AreaSet::new());

        assert!(allocation.is_none());
        assert!(allocation.selection.is_empty());
        assert_eq!(allocation.selection.average(), GradeScore::UNGRADED);
    }

    #[test]
    fn test_ties_go_to_first_area() {
        let items = vec![
            Achievement::graded("S", Area::Sp, 8, 1.3),
            Achievement::graded("A", Area::Alg, 8, 1.3),
        ];
        let pools = AreaPools::from_achievements(&items);

        let allocation = allocator().allocate_best(8, &pools, &pools.elective_areas());

        assert_eq!(allocation.area, Some(Area::Alg));
    }

    #[test]
    fn test_sequential_exclusion() {
        let items = vec![
            Achievement::graded("A", Area::Alg, 18, 1.0),
            Achievement::graded("M", Area::Mla, 8, 1.3),
            Achievement::graded("S", Area::Sp, 8, 1.7),
        ];
        let pools = AreaPools::from_achievements(&items);
        let allocator = allocator();

        let areas = pools.elective_areas();
        let major = allocator.allocate_best(18, &pools, &areas);
        let areas = areas.without(major.area.unwrap());
        let first = allocator.allocate_best(8, &pools, &areas);
        let areas = areas.without(first.area.unwrap());
        let second = allocator.allocate_best(8, &pools, &areas);
        let areas = areas.without(second.area.unwrap());
        let third = allocator.allocate_best(8, &pools, &areas);

        assert_eq!(major.area, Some(Area::Alg));
        assert_eq!(first.area, Some(Area::Mla));
        assert_eq!(second.area, Some(Area::Sp));
        assert!(third.is_none());
    }
}
