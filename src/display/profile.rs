//! Profile display formatting

use crate::models::Profile;

use super::truncate;

/// Format a list of profiles as a table
pub fn format_profile_list(profiles: &[Profile]) -> String {
    if profiles.is_empty() {
        return "No profiles found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:40} {:16} {:24} {:6} {:10}\n",
        "ID", "Username", "Name", "Role", "Birth date"
    ));
    output.push_str(&"-".repeat(102));
    output.push('\n');

    for profile in profiles {
        let birth = profile
            .birth_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "-".to_string());

        output.push_str(&format!(
            "{} {} {} {:6} {:10}\n",
            profile.id,
            truncate(&profile.username, 16),
            truncate(&profile.name, 24),
            profile.role,
            birth
        ));
    }

    output
}
