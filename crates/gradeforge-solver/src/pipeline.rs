//! Allocation pipeline driver.
//!
//! Runs the whole curriculum allocation in one synchronous pass:
//!
//! 1. fixed buckets (thesis, interdisciplinary project, support electives,
//!    practical) from their own areas
//! 2. major, then each minor, from the elective areas still open
//! 3. free choice from everything unclaimed
//! 4. aggregation
//!
//! Logging levels:
//! - **INFO**: allocation start/end with the final score
//! - **DEBUG**: per-bucket results and allocator decisions
//! - **TRACE**: selector internals

use gradeforge_config::CurriculumConfig;
use gradeforge_core::{total_credits, total_theoretical_credits, Achievement, Area};
use tracing::{debug, info};

use crate::aggregate::{Aggregator, Summary};
use crate::allocator::{FreeChoiceAllocator, SubfieldAllocator};
use crate::bucket::{Bucket, BucketKind};
use crate::pool::AreaPools;
use crate::report::PlanReport;
use crate::selector::SubsetSelector;

/// Result of one allocation run.
#[derive(Debug, Clone)]
pub struct CurriculumPlan<'a> {
    buckets: Vec<Bucket<'a>>,
    summary: Summary,
    non_contributing: Vec<&'a Achievement>,
}

impl<'a> CurriculumPlan<'a> {
    /// Buckets in allocation order.
    pub fn buckets(&self) -> &[Bucket<'a>] {
        &self.buckets
    }

    pub fn bucket(&self, kind: BucketKind) -> Option<&Bucket<'a>> {
        self.buckets.iter().find(|b| b.kind() == kind)
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    /// Achievements that ended up in no bucket, in input order.
    pub fn non_contributing(&self) -> &[&'a Achievement] {
        &self.non_contributing
    }

    /// Every committed achievement, bucket by bucket.
    pub fn committed(&self) -> impl Iterator<Item = &'a Achievement> + '_ {
        self.buckets
            .iter()
            .flat_map(|b| b.achievements().iter().copied())
    }

    /// Owned, serializable view of the plan.
    pub fn report(&self) -> PlanReport {
        PlanReport::from_plan(self)
    }
}

/// Allocates a pool of achievements to curriculum requirements.
///
/// # Examples
///
/// ```
/// use gradeforge_config::CurriculumConfig;
/// use gradeforge_core::{Achievement, Area};
/// use gradeforge_solver::{BucketKind, CurriculumSolver};
///
/// let transcript = vec![
///     Achievement::graded("Thesis", Area::Thesis, 30, 1.3),
///     Achievement::graded("EAD", Area::Alg, 8, 1.3).theoretical(),
/// ];
///
/// let solver = CurriculumSolver::new(CurriculumConfig::default());
/// let plan = solver.solve(&transcript);
///
/// assert!(plan.bucket(BucketKind::Thesis).unwrap().is_complete());
/// assert_eq!(plan.bucket(BucketKind::Major).unwrap().area(), Some(Area::Alg));
/// assert!(!plan.summary().complete);
/// ```
#[derive(Debug, Clone)]
pub struct CurriculumSolver {
    config: CurriculumConfig,
    selector: SubsetSelector,
}

impl Default for CurriculumSolver {
    fn default() -> Self {
        Self::new(CurriculumConfig::default())
    }
}

impl CurriculumSolver {
    pub fn new(config: CurriculumConfig) -> Self {
        let selector = SubsetSelector::from_config(&config);
        Self { config, selector }
    }

    pub fn config(&self) -> &CurriculumConfig {
        &self.config
    }

    /// Runs the full allocation over `achievements`.
    pub fn solve<'a>(&self, achievements: &'a [Achievement]) -> CurriculumPlan<'a> {
        let config = &self.config;
        let ungraded = self.selector.ungraded();

        info!(
            event = "allocation_start",
            achievement_count = achievements.len(),
            total_credits = total_credits(achievements),
        );

        let pools = AreaPools::from_achievements(achievements);
        let mut buckets: Vec<Bucket<'a>> = Vec::new();

        buckets.push(self.fixed_bucket(
            BucketKind::Thesis,
            &pools,
            Area::Thesis,
            config.thesis.credits,
        ));

        let project = &config.interdisciplinary_project;
        let mut idp = self
            .selector
            .select(pools.get(Area::IdpLecture), project.lecture_credits, 0)
            .into_items();
        idp.extend(
            self.selector
                .select(pools.get(Area::Idp), project.project_credits, 0)
                .into_items(),
        );
        buckets.push(Bucket::new(
            BucketKind::InterdisciplinaryProject,
            idp,
            project.total_credits(),
            ungraded,
        ));

        buckets.push(self.fixed_bucket(
            BucketKind::SupportElectives,
            &pools,
            Area::Sup,
            config.support_electives.credits,
        ));
        buckets.push(self.fixed_bucket(
            BucketKind::Practical,
            &pools,
            Area::Practical,
            config.practical.credits,
        ));
        log_bucket_range(&buckets);

        let subfields = SubfieldAllocator::new(self.selector);
        let mut areas = pools.elective_areas();

        let major = subfields.allocate_best(config.major.credits, &pools, &areas);
        if let Some(area) = major.area {
            areas = areas.without(area);
        }
        buckets.push(
            Bucket::new(
                BucketKind::Major,
                major.selection.into_items(),
                config.major.credits,
                ungraded,
            )
            .with_area(major.area),
        );

        for n in 1..=config.minors.count {
            let minor = subfields.allocate_best(config.minors.credits, &pools, &areas);
            if let Some(area) = minor.area {
                areas = areas.without(area);
            }
            buckets.push(
                Bucket::new(
                    BucketKind::Minor(u8::try_from(n).unwrap_or(u8::MAX)),
                    minor.selection.into_items(),
                    config.minors.credits,
                    ungraded,
                )
                .with_area(minor.area),
            );
        }
        log_bucket_range(&buckets[4..]);

        let committed: Vec<&'a Achievement> = buckets
            .iter()
            .flat_map(|b| b.achievements().iter().copied())
            .collect();
        let pool: Vec<&'a Achievement> = achievements
            .iter()
            .filter(|a| a.area.is_free_choice_eligible())
            .filter(|a| !buckets.iter().any(|b| b.contains(a)))
            .collect();
        let theoretical_needed = config
            .theory
            .credits
            .saturating_sub(total_theoretical_credits(committed.iter().copied()));

        let free = FreeChoiceAllocator::new(self.selector).allocate(
            pool,
            config.free_choice.credits,
            theoretical_needed,
            &committed,
        );
        buckets.push(
            Bucket::new(
                BucketKind::FreeChoice,
                free.achievements(),
                config.free_choice.credits,
                ungraded,
            )
            .with_theoretical_floor(theoretical_needed),
        );
        log_bucket_range(&buckets[buckets.len() - 1..]);

        let summary = Aggregator::new(ungraded).aggregate(&buckets, config.theory.credits);
        let non_contributing: Vec<&'a Achievement> = achievements
            .iter()
            .filter(|a| !buckets.iter().any(|b| b.contains(a)))
            .collect();

        info!(
            event = "allocation_end",
            final_score = %summary.final_score,
            capped_score = %summary.capped_score,
            complete = summary.complete,
            theoretical_credits = summary.theoretical_credits,
            non_contributing = non_contributing.len(),
        );

        CurriculumPlan {
            buckets,
            summary,
            non_contributing,
        }
    }

    fn fixed_bucket<'a>(
        &self,
        kind: BucketKind,
        pools: &AreaPools<'a>,
        area: Area,
        credit_floor: u32,
    ) -> Bucket<'a> {
        let selection = self.selector.select(pools.get(area), credit_floor, 0);
        Bucket::new(
            kind,
            selection.into_items(),
            credit_floor,
            self.selector.ungraded(),
        )
    }
}

fn log_bucket_range(buckets: &[Bucket<'_>]) {
    for bucket in buckets {
        debug!(
            event = "bucket_filled",
            bucket = %bucket.kind(),
            area = bucket.area().map(|a| a.code()).unwrap_or("-"),
            credits = bucket.credits(),
            credit_floor = bucket.credit_floor(),
            average = %bucket.average(),
            complete = bucket.is_complete(),
        );
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
