//! Movement display formatting

use crate::models::Movement;

use super::truncate;

/// Format a single movement row
pub fn format_movement_row(movement: &Movement) -> String {
    let method = movement
        .payment_method
        .map(|m| m.to_string())
        .unwrap_or_default();

    format!(
        "{} {} {:12} {:20} {:>12} {:10}",
        movement.id,
        movement.date.format("%Y-%m-%d"),
        movement.kind,
        truncate(&movement.category, 20),
        movement.amount,
        method
    )
}

/// Format a list of movements as a table
pub fn format_movement_list(movements: &[Movement]) -> String {
    if movements.is_empty() {
        return "No movements found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:40} {:10} {:12} {:20} {:>12} {:10}\n",
        "ID", "Date", "Kind", "Category", "Amount", "Method"
    ));
    output.push_str(&"-".repeat(108));
    output.push('\n');

    for movement in movements {
        output.push_str(&format_movement_row(movement));
        output.push('\n');
    }

    output
}

/// Format full movement details
pub fn format_movement_details(movement: &Movement) -> String {
    let mut output = String::new();

    output.push_str(&format!("Movement:  {}\n", movement.id));
    output.push_str(&format!("Date:      {}\n", movement.date.format("%Y-%m-%d")));
    output.push_str(&format!("Kind:      {}\n", movement.kind));
    output.push_str(&format!("Category:  {}\n", movement.category));
    output.push_str(&format!("Amount:    {}\n", movement.amount));

    if !movement.description.is_empty() {
        output.push_str(&format!("Details:   {}\n", movement.description));
    }
    if let Some(method) = movement.payment_method {
        output.push_str(&format!("Method:    {}\n", method));
    }

    output
}
