//! Allocation entry point that hides the configuration wiring.

use gradeforge_config::CurriculumConfig;
use gradeforge_core::Achievement;
use gradeforge_solver::{CurriculumPlan, CurriculumSolver};

/// Configuration file picked up by [`plan`] from the working directory.
pub const CONFIG_FILE: &str = "curriculum.toml";

/// Allocates `achievements` using `curriculum.toml` if present, otherwise
/// the default curriculum.
pub fn plan(achievements: &[Achievement]) -> CurriculumPlan<'_> {
    let config = CurriculumConfig::load(CONFIG_FILE).unwrap_or_default();
    plan_with_config(achievements, config)
}

/// Allocates `achievements` under an explicit configuration.
pub fn plan_with_config(
    achievements: &[Achievement],
    config: CurriculumConfig,
) -> CurriculumPlan<'_> {
    #[cfg(feature = "console")]
    gradeforge_console::init();

    CurriculumSolver::new(config).solve(achievements)
}
