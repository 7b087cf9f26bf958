//! Export functionality for fintrack
//!
//! CSV export of a profile's movements and a full JSON snapshot of the
//! store for backup purposes.

pub mod csv;
pub mod json;

pub use csv::export_movements_csv;
pub use json::{export_full_json, FullExport};
