//! Area-grouped views over the achievement pool.

use std::collections::{BTreeMap, BTreeSet};

use gradeforge_core::{Achievement, Area};

/// Achievements grouped by area, input order preserved within each area.
#[derive(Debug, Clone, Default)]
pub struct AreaPools<'a> {
    by_area: BTreeMap<Area, Vec<&'a Achievement>>,
}

impl<'a> AreaPools<'a> {
    /// Groups the given achievements by area.
    pub fn from_achievements(achievements: &'a [Achievement]) -> Self {
        let mut by_area: BTreeMap<Area, Vec<&'a Achievement>> = BTreeMap::new();
        for achievement in achievements {
            by_area.entry(achievement.area).or_default().push(achievement);
        }
        Self { by_area }
    }

    /// Returns the achievements of `area`, empty if there are none.
    pub fn get(&self, area: Area) -> &[&'a Achievement] {
        self.by_area.get(&area).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Elective areas that hold at least one achievement.
    pub fn elective_areas(&self) -> AreaSet {
        self.by_area
            .keys()
            .copied()
            .filter(|area| area.is_elective())
            .collect()
    }

    /// Iterates areas in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Area, &[&'a Achievement])> + '_ {
        self.by_area
            .iter()
            .map(|(area, items)| (*area, items.as_slice()))
    }
}

/// The set of areas still open for subfield allocation.
///
/// Threaded by value through the allocation pipeline; each stage hands the
/// next one a set without the area it claimed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AreaSet {
    areas: BTreeSet<Area>,
}

impl AreaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set without `area`.
    pub fn without(mut self, area: Area) -> Self {
        self.areas.remove(&area);
        self
    }

    pub fn contains(&self, area: Area) -> bool {
        self.areas.contains(&area)
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    /// Iterates areas in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = Area> + '_ {
        self.areas.iter().copied()
    }
}

impl FromIterator<Area> for AreaSet {
    fn from_iter<I: IntoIterator<Item = Area>>(iter: I) -> Self {
        Self {
            areas: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_preserves_order() {
        let items = vec![
            Achievement::graded("NLP", Area::Mla, 6, 2.3),
            Achievement::graded("ERDB", Area::Dbi, 6, 1.0),
            Achievement::graded("I2DL", Area::Mla, 6, 2.0),
        ];
        let pools = AreaPools::from_achievements(&items);

        let mla: Vec<&str> = pools.get(Area::Mla).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(mla, vec!["NLP", "I2DL"]);
        assert!(pools.get(Area::Thesis).is_empty());
    }

    #[test]
    fn test_elective_areas_skip_requirements() {
        let items = vec![
            Achievement::graded("DDML", Area::Practical, 10, 1.0),
            Achievement::graded("Franz", Area::Sup, 3, 1.7),
            Achievement::graded("EAD", Area::Alg, 8, 1.3),
        ];
        let areas = AreaPools::from_achievements(&items).elective_areas();

        assert_eq!(areas.iter().collect::<Vec<_>>(), vec![Area::Alg]);
    }

    #[test]
    fn test_without_threads_by_value() {
        let areas: AreaSet = [Area::Mla, Area::Alg, Area::Sp].into_iter().collect();
        let areas = areas.without(Area::Alg);

        assert_eq!(areas.len(), 2);
        assert!(!areas.contains(Area::Alg));
        assert_eq!(areas.iter().collect::<Vec<_>>(), vec![Area::Mla, Area::Sp]);
    }
}
