//! Tests for the subset selector.

use gradeforge_core::{total_credits, total_theoretical_credits, weighted_average, Area};
use gradeforge_test::AchievementBuilder;

use super::*;

fn refs(items: &[Achievement]) -> Vec<&Achievement> {
    items.iter().collect()
}

fn ids(selection: &Selection<'_>) -> Vec<String> {
    selection.items().iter().map(|a| a.id.clone()).collect()
}

// Independent oracle: every minimal floor-satisfying subset, as index lists.
fn minimal_feasible_subsets(
    pool: &[&Achievement],
    credit_floor: u32,
    theoretical_floor: u32,
) -> Vec<Vec<usize>> {
    let n = pool.len();
    let mut out = Vec::new();
    for mask in 0u64..(1 << n) {
        let members: Vec<usize> = (0..n).filter(|i| mask & (1 << i) != 0).collect();
        let credits: u32 = members.iter().map(|&i| pool[i].credits).sum();
        let theo: u32 = members.iter().map(|&i| pool[i].theoretical_credits()).sum();
        if credits < credit_floor || theo < theoretical_floor {
            continue;
        }
        let minimal = members.iter().all(|&i| {
            credits - pool[i].credits < credit_floor
                || theo - pool[i].theoretical_credits() < theoretical_floor
        });
        if minimal {
            out.push(members);
        }
    }
    out
}

#[test]
fn test_picks_single_item_over_supersets() {
    let pool = vec![
        AchievementBuilder::new("A").area(Area::Mla).credits(6).score(1.0).build(),
        AchievementBuilder::new("B").area(Area::Mla).credits(5).score(1.5).build(),
        AchievementBuilder::new("C").area(Area::Mla).credits(3).score(1.7).build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 6, 0);

    assert_eq!(ids(&selection), vec!["A"]);
    assert_eq!(selection.average(), GradeScore::of(1.0));
    assert_eq!(selection.outcome(), SelectionOutcome::Optimal);
    assert_eq!(selection.subsets_examined(), 8);
    assert_eq!(selection.indices(), &[0]);
}

#[test]
fn test_empty_pool() {
    let selection = SubsetSelector::default().select(&[], 10, 0);

    assert!(selection.is_empty());
    assert_eq!(selection.average(), GradeScore::UNGRADED);
    assert_eq!(selection.credits(), 0);
    assert!(selection.credits() < 10);
}

#[test]
fn test_pool_at_or_below_floor_is_untouched() {
    let pool = vec![
        AchievementBuilder::new("A").credits(5).score(3.0).build(),
        AchievementBuilder::new("B").credits(5).score(1.0).build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 10, 0);

    assert_eq!(selection.outcome(), SelectionOutcome::Untrimmed);
    assert_eq!(selection.len(), 2);
    assert_eq!(selection.average(), GradeScore::of(2.0));
}

#[test]
fn test_single_oversized_item() {
    let pool = vec![AchievementBuilder::new("X").credits(20).score(1.0).build()];

    let selection = SubsetSelector::default().select(&refs(&pool), 18, 0);

    assert_eq!(ids(&selection), vec!["X"]);
    assert_eq!(selection.outcome(), SelectionOutcome::Optimal);
}

#[test]
fn test_theoretical_floor_forces_theory_course() {
    let pool = vec![
        AchievementBuilder::new("Applied").credits(6).score(1.0).build(),
        AchievementBuilder::new("Theory")
            .credits(6)
            .score(2.0)
            .theoretical()
            .build(),
        AchievementBuilder::new("Filler").credits(4).score(1.3).build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 6, 6);

    assert_eq!(ids(&selection), vec!["Theory"]);
    assert!(total_theoretical_credits(selection.items().iter().copied()) >= 6);
}

#[test]
fn test_minimality_keeps_item_needed_only_for_theory() {
    // {Applied, Theory} is minimal: dropping Applied breaks the credit floor,
    // dropping Theory breaks the theoretical floor.
    let pool = vec![
        AchievementBuilder::new("Applied").credits(8).score(1.0).build(),
        AchievementBuilder::new("Theory")
            .credits(4)
            .score(3.0)
            .theoretical()
            .build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 10, 4);

    assert_eq!(ids(&selection), vec!["Applied", "Theory"]);
    assert_eq!(selection.outcome(), SelectionOutcome::Optimal);
}

#[test]
fn test_infeasible_theory_falls_back_to_most_credits() {
    let pool = vec![
        AchievementBuilder::new("A").credits(6).score(1.0).build(),
        AchievementBuilder::new("B").credits(6).score(2.0).build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 6, 5);

    assert_eq!(selection.outcome(), SelectionOutcome::Fallback);
    assert_eq!(selection.credits(), 12);
    assert_eq!(selection.len(), 2);
}

#[test]
fn test_ties_keep_first_mask() {
    let pool = vec![
        AchievementBuilder::new("First").credits(6).score(1.7).build(),
        AchievementBuilder::new("Second").credits(6).score(1.7).build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 6, 0);

    assert_eq!(ids(&selection), vec!["First"]);
}

#[test]
fn test_ungraded_items_use_sentinel() {
    let pool = vec![
        AchievementBuilder::new("PassFail").credits(6).build(),
        AchievementBuilder::new("Graded").credits(6).score(4.0).build(),
    ];

    let selection = SubsetSelector::default().select(&refs(&pool), 6, 0);

    // 4.0 beats the 5.0 sentinel of the ungraded-only subset.
    assert_eq!(ids(&selection), vec!["Graded"]);

    let lenient = SubsetSelector::new(GradeScore::of(3.0)).select(&refs(&pool), 6, 0);
    assert_eq!(ids(&lenient), vec!["PassFail"]);
}

#[test]
fn test_zero_floor_selects_nothing() {
    let pool = vec![AchievementBuilder::new("A").credits(6).score(1.0).build()];

    let selection = SubsetSelector::default().select(&refs(&pool), 0, 0);

    assert!(selection.is_empty());
    assert_eq!(selection.outcome(), SelectionOutcome::Optimal);
}

#[test]
fn test_minimality_and_optimality_against_oracle() {
    let pool = vec![
        AchievementBuilder::new("ERDB").area(Area::Dbi).credits(6).score(1.0).build(),
        AchievementBuilder::new("MMDS").area(Area::Mla).credits(5).score(1.5).build(),
        AchievementBuilder::new("ADL4CV").area(Area::Cgv).credits(8).score(1.3).build(),
        AchievementBuilder::new("NLP").area(Area::Mla).credits(6).score(2.3).build(),
        AchievementBuilder::new("EAD")
            .area(Area::Alg)
            .credits(8)
            .score(1.3)
            .theoretical()
            .build(),
        AchievementBuilder::new("I2DL").area(Area::Mla).credits(6).score(2.0).build(),
        AchievementBuilder::new("ProgOpt")
            .area(Area::Fma)
            .credits(8)
            .score(2.3)
            .theoretical()
            .build(),
        AchievementBuilder::new("itsec").area(Area::Sp).credits(5).score(2.7).build(),
    ];
    let pool = refs(&pool);
    let selector = SubsetSelector::default();

    for (credit_floor, theoretical_floor) in [(6, 0), (13, 0), (19, 0), (19, 10), (30, 16)] {
        let selection = selector.select(&pool, credit_floor, theoretical_floor);
        let chosen = selection.items();
        let credits = total_credits(chosen.iter().copied());
        let theo = total_theoretical_credits(chosen.iter().copied());

        assert_eq!(selection.outcome(), SelectionOutcome::Optimal);
        assert!(credits >= credit_floor);
        assert!(theo >= theoretical_floor);
        for item in chosen {
            assert!(
                credits - item.credits < credit_floor
                    || theo - item.theoretical_credits() < theoretical_floor,
                "{} is redundant for floors ({credit_floor}, {theoretical_floor})",
                item.id
            );
        }

        let oracle = minimal_feasible_subsets(&pool, credit_floor, theoretical_floor);
        assert!(oracle.contains(&selection.indices().to_vec()));
        for members in oracle {
            let average = weighted_average(members.iter().map(|&i| pool[i]));
            assert!(!average.is_better_than(&selection.average()));
        }
    }
}
