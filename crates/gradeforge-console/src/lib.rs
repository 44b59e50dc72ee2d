//! Colorful console output for allocation runs.
//!
//! Provides a custom `tracing` layer that formats allocation events with
//! colors, and a renderer for finished plans.
//!
//! ## Log Levels
//!
//! - **INFO**: Allocation start and end
//! - **DEBUG**: Filled buckets, subfield choices, free-choice decisions
//! - **TRACE**: Individual selector runs

use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod render;

pub use render::render_report;

static INIT: OnceLock<()> = OnceLock::new();

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "gradeforge_solver=info";

/// Initializes console output with [`DEFAULT_FILTER`] or `RUST_LOG`.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Initializes console output, falling back to `default_filter` when
/// `RUST_LOG` is unset or invalid.
pub fn init_with_filter(default_filter: &str) {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_filter));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(AllocationConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats allocation events with colors.
pub struct AllocationConsoleLayer;

impl<S: Subscriber> Layer<S> for AllocationConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("gradeforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    bucket: Option<String>,
    area: Option<String>,
    achievement: Option<String>,
    average: Option<String>,
    grade: Option<String>,
    running_average: Option<String>,
    default_fill_average: Option<String>,
    final_score: Option<String>,
    capped_score: Option<String>,
    outcome: Option<String>,
    achievement_count: Option<u64>,
    total_credits: Option<u64>,
    credits: Option<u64>,
    credit_floor: Option<u64>,
    candidates: Option<u64>,
    theoretical_credits: Option<u64>,
    non_contributing: Option<u64>,
    pool_size: Option<u64>,
    threshold: Option<u64>,
    limit: Option<u64>,
    subsets: Option<u64>,
    complete: Option<bool>,
}

impl EventVisitor {
    fn set_text(&mut self, name: &str, value: String) {
        let slot = match name {
            "event" => &mut self.event,
            "bucket" => &mut self.bucket,
            "area" => &mut self.area,
            "achievement" => &mut self.achievement,
            "average" => &mut self.average,
            "grade" => &mut self.grade,
            "running_average" => &mut self.running_average,
            "default_fill_average" => &mut self.default_fill_average,
            "final_score" => &mut self.final_score,
            "capped_score" => &mut self.capped_score,
            "outcome" => &mut self.outcome,
            _ => return,
        };
        *slot = Some(value);
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_text(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "achievement_count" => self.achievement_count = Some(value),
            "total_credits" => self.total_credits = Some(value),
            "credits" => self.credits = Some(value),
            "credit_floor" => self.credit_floor = Some(value),
            "candidates" => self.candidates = Some(value),
            "theoretical_credits" => self.theoretical_credits = Some(value),
            "non_contributing" => self.non_contributing = Some(value),
            "pool_size" => self.pool_size = Some(value),
            "threshold" => self.threshold = Some(value),
            "limit" => self.limit = Some(value),
            "subsets" => self.subsets = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "complete" {
            self.complete = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_text(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "allocation_start" => format_allocation_start(v),
        "allocation_end" => format_allocation_end(v),
        "bucket_filled" => format_bucket_filled(v),
        "subfield_selected" => format_subfield_selected(v),
        "subfield_unavailable" => format_subfield_unavailable(v),
        "free_choice_swap_in" => format_swap_in(v),
        "free_choice_improvement" => format_improvement(v),
        "selection_large_pool" | "selection_oversized" => format_pool_warning(v, level),
        "selection" => format_selection(v, level),
        _ => String::new(),
    }
}

fn format_allocation_start(v: &EventVisitor) -> String {
    format!(
        "{} Allocating │ {} achievements │ {} credits",
        "▶".bright_green().bold(),
        v.achievement_count.unwrap_or(0).bright_yellow(),
        v.total_credits.unwrap_or(0).bright_yellow(),
    )
}

fn format_allocation_end(v: &EventVisitor) -> String {
    let status = if v.complete.unwrap_or(false) {
        "COMPLETE".bright_green().bold().to_string()
    } else {
        "INCOMPLETE".bright_red().bold().to_string()
    };

    format!(
        "{} Allocation finished │ final {} │ capped {} │ {} theoretical │ {} unused │ {}",
        "■".bright_cyan().bold(),
        format_grade(v.final_score.as_deref()),
        format_grade(v.capped_score.as_deref()),
        v.theoretical_credits.unwrap_or(0).bright_yellow(),
        v.non_contributing.unwrap_or(0),
        status,
    )
}

fn format_bucket_filled(v: &EventVisitor) -> String {
    let bucket = v.bucket.as_deref().unwrap_or("Unknown");
    let area = v.area.as_deref().unwrap_or("-");
    let icon = if v.complete.unwrap_or(false) {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };

    format!(
        "  {} {:<26} {:<16} {:>3}/{:<3} cr │ {}",
        icon,
        bucket.white().bold(),
        area.bright_blue(),
        v.credits.unwrap_or(0),
        v.credit_floor.unwrap_or(0),
        format_grade(v.average.as_deref()),
    )
}

fn format_subfield_selected(v: &EventVisitor) -> String {
    format!(
        "  {} {} wins {} candidates for {} credits │ {}",
        "◆".bright_blue(),
        v.area.as_deref().unwrap_or("-").bright_blue().bold(),
        v.candidates.unwrap_or(0),
        v.credit_floor.unwrap_or(0),
        format_grade(v.average.as_deref()),
    )
}

fn format_subfield_unavailable(v: &EventVisitor) -> String {
    format!(
        "  {} no area left for {} credits",
        "◇".bright_black(),
        v.credit_floor.unwrap_or(0),
    )
}

fn format_swap_in(v: &EventVisitor) -> String {
    format!(
        "  {} swap in {} ({}) │ {} beats {}",
        "⇄".bright_magenta(),
        v.achievement.as_deref().unwrap_or("?").white().bold(),
        v.area.as_deref().unwrap_or("-").bright_blue(),
        format_grade(v.grade.as_deref()),
        format_grade(v.default_fill_average.as_deref()),
    )
}

fn format_improvement(v: &EventVisitor) -> String {
    format!(
        "  {} add {} │ {} beats running {}",
        "+".bright_green(),
        v.achievement.as_deref().unwrap_or("?").white().bold(),
        format_grade(v.grade.as_deref()),
        format_grade(v.running_average.as_deref()),
    )
}

fn format_pool_warning(v: &EventVisitor, level: Level) -> String {
    let size = v.pool_size.unwrap_or(0);
    if level == Level::ERROR {
        format!(
            "{} pool of {} exceeds {} items, kept whole",
            "!".bright_red().bold(),
            size.bright_red(),
            v.limit.unwrap_or(0),
        )
    } else {
        format!(
            "{} pool of {} exceeds {} items, search is slow",
            "!".yellow().bold(),
            size.yellow(),
            v.threshold.unwrap_or(0),
        )
    }
}

fn format_selection(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "    {} {} │ {} subsets │ {} cr │ {}",
        "·".bright_black(),
        v.outcome.as_deref().unwrap_or("?").bright_black(),
        v.subsets.unwrap_or(0).bright_black(),
        v.credits.unwrap_or(0).bright_black(),
        v.average.as_deref().unwrap_or("N/A").bright_black(),
    )
}

/// Colors a grade: green up to 1.5, yellow up to 2.5, red above.
pub(crate) fn format_grade(grade: Option<&str>) -> String {
    let Some(grade) = grade else {
        return "N/A".white().to_string();
    };
    match grade.parse::<f64>() {
        Ok(g) if g <= 1.5 => grade.bright_green().to_string(),
        Ok(g) if g <= 2.5 => grade.yellow().to_string(),
        Ok(_) => grade.bright_red().to_string(),
        Err(_) => grade.white().to_string(),
    }
}
