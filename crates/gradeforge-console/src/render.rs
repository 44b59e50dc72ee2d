//! Plain-text rendering of finished plans.

use gradeforge_solver::{BucketReport, PlanReport};
use owo_colors::OwoColorize;

use crate::format_grade;

const INNER_WIDTH: usize = 64;

/// Renders a plan as a colored summary box.
pub fn render_report(report: &PlanReport) -> String {
    let mut output = String::new();

    push_rule(&mut output, '╔', '╗');
    let status = if report.complete {
        "ALL REQUIREMENTS MET"
    } else {
        "REQUIREMENTS INCOMPLETE"
    };
    let total_pad = INNER_WIDTH.saturating_sub(status.chars().count());
    let left_pad = total_pad / 2;
    let status_colored = if report.complete {
        status.bright_green().bold().to_string()
    } else {
        status.bright_red().bold().to_string()
    };
    output.push_str(&format!(
        "{}{}{}{}{}\n",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(total_pad - left_pad),
        "║".bright_cyan()
    ));
    push_rule(&mut output, '╠', '╣');

    for bucket in &report.buckets {
        push_bucket(&mut output, bucket);
    }

    push_rule(&mut output, '╠', '╣');
    push_line(
        &mut output,
        "Final score:",
        &format_grade(Some(&report.final_score.to_string())),
    );
    push_line(
        &mut output,
        "Capped score:",
        &format_grade(Some(&report.capped_score.to_string())),
    );
    let theoretical = &report.theoretical;
    let theory = format!(
        "{}/{} ({:.0}%){}",
        theoretical.credits,
        theoretical.floor,
        theoretical.ratio * 100.0,
        if theoretical.satisfied { "" } else { " short" },
    );
    push_line(&mut output, "Theoretical:", &theory);
    push_rule(&mut output, '╚', '╝');

    if !report.non_contributing.is_empty() {
        output.push_str(&format!(
            "\n{} {}\n",
            "Not counted:".bright_black(),
            report.non_contributing.join(", ")
        ));
    }

    output
}

fn push_rule(output: &mut String, left: char, right: char) {
    let rule = format!("{}{}{}", left, "═".repeat(INNER_WIDTH), right);
    output.push_str(&rule.bright_cyan().to_string());
    output.push('\n');
}

fn push_line(output: &mut String, label: &str, value: &str) {
    output.push_str(&format!(
        "{}  {:<18}{}\n",
        "║".bright_cyan(),
        label,
        value,
    ));
}

fn push_bucket(output: &mut String, bucket: &BucketReport) {
    let icon = if bucket.complete {
        "✓".bright_green().to_string()
    } else {
        "✗".bright_red().to_string()
    };
    let area = bucket.area.map(|a| a.code()).unwrap_or("");
    output.push_str(&format!(
        "{} {} {:<26}{:<16}{:>3}/{:<3} {}\n",
        "║".bright_cyan(),
        icon,
        bucket.name,
        area,
        bucket.credits,
        bucket.credit_floor,
        format_grade(Some(&bucket.average.to_string())),
    ));
    if !bucket.achievements.is_empty() {
        output.push_str(&format!(
            "{}     {}\n",
            "║".bright_cyan(),
            bucket.achievements.join(", ").bright_black()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradeforge_solver::CurriculumSolver;
    use gradeforge_test::sample_transcript;

    #[test]
    fn test_render_sample_plan() {
        let transcript = sample_transcript();
        let plan = CurriculumSolver::default().solve(&transcript);

        let output = render_report(&plan.report());

        assert!(output.contains("REQUIREMENTS INCOMPLETE"));
        assert!(output.contains("Minor 2"));
        assert!(output.contains("MMDS, NLP, I2DL"));
        assert!(output.contains("Final score:"));
        assert!(output.contains("16/10"));
        assert!(output.contains("itsec"));
    }
}
