//! CSV export of movements

use std::io::Write;

use crate::error::{FintrackError, FintrackResult};
use crate::models::Movement;

/// Export movements to CSV
///
/// One row per movement with the amount in decimal units. Quoting is
/// handled by the writer, so free-form descriptions and categories are safe.
pub fn export_movements_csv<W: Write>(movements: &[Movement], writer: W) -> FintrackResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "id",
            "date",
            "kind",
            "category",
            "description",
            "amount",
            "payment_method",
        ])
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    for movement in movements {
        let method = movement
            .payment_method
            .map(|m| m.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                movement.id.to_string(),
                movement.date.format("%Y-%m-%d").to_string(),
                movement.kind.to_string(),
                movement.category.clone(),
                movement.description.clone(),
                format!("{:.2}", movement.amount.cents() as f64 / 100.0),
                method,
            ])
            .map_err(|e| FintrackError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| FintrackError::Export(e.to_string()))?;

    Ok(())
}
