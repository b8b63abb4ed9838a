//! `stockbook-interchange` — bulk/tabular exchange with the outside world.
//!
//! Implements the serialization contract consumed by import and export
//! collaborators: labeled rows in (case-insensitive, order-independent),
//! product rows with a computed total out, and a combined document bundling
//! summary, active products, and the full history view.

pub mod export;
pub mod import;
pub mod row;

pub use export::{CombinedExport, ProductExportRow, export_combined, export_products};
pub use import::{ImportReport, import_rows};
pub use row::{ImportError, ProductRow};
