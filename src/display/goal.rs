//! Goal display formatting

use crate::models::Goal;

use super::truncate;

const BAR_WIDTH: usize = 20;

/// Format a list of goals with progress bars
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:41} {:24} {:>12} {:>12} {:22} {:8}\n",
        "ID", "Objective", "Saved", "Target", "Progress", "Deadline"
    ));
    output.push_str(&"-".repeat(124));
    output.push('\n');

    for goal in goals {
        let pct = goal.progress();
        let filled = ((pct.min(1.0)) * BAR_WIDTH as f64).round() as usize;
        let bar = format!(
            "[{}{}]",
            "#".repeat(filled),
            " ".repeat(BAR_WIDTH - filled)
        );

        let deadline = goal
            .deadline
            .map(|p| p.label())
            .unwrap_or_else(|| "-".to_string());
        let status = if goal.is_reached() { " reached" } else { "" };

        output.push_str(&format!(
            "{} {} {:>12} {:>12} {} {:8}{}\n",
            goal.id,
            truncate(&goal.objective, 24),
            goal.saved.to_string(),
            goal.target.to_string(),
            bar,
            deadline,
            status
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, MonthPeriod, ProfileId};

    #[test]
    fn test_format_empty_list() {
        assert!(format_goal_list(&[]).contains("No goals found"));
    }

    #[test]
    fn test_format_goal_list() {
        let mut goal = Goal::new(ProfileId::new(), "Vacation", Money::from_cents(100000));
        goal.saved = Money::from_cents(50000);
        goal.deadline = Some(MonthPeriod::new(2025, 7).unwrap());

        let formatted = format_goal_list(&[goal]);
        assert!(formatted.contains("Vacation"));
        assert!(formatted.contains("$500.00"));
        assert!(formatted.contains("Jul/2025"));
        assert!(formatted.contains("##########"));
    }

    #[test]
    fn test_overfunded_goal_bar_is_capped() {
        let mut goal = Goal::new(ProfileId::new(), "Done", Money::from_cents(100));
        goal.saved = Money::from_cents(500);

        // Must not panic on progress above 100%
        let formatted = format_goal_list(&[goal]);
        assert!(formatted.contains("Done"));
        assert!(formatted.contains("reached"));
    }
}
