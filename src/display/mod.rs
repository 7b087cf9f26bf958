//! Display formatting for terminal output
//!
//! Formats data models into the tables the CLI prints.

pub mod debt;
pub mod goal;
pub mod movement;
pub mod profile;

pub use debt::format_debt_list;
pub use goal::format_goal_list;
pub use movement::{format_movement_details, format_movement_list};
pub use profile::format_profile_list;

/// Truncate a string to a maximum length, padding short strings
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10).trim(), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
