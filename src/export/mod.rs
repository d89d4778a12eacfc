//! Spreadsheet export of batch results.
//!
//! Writes one row per resolved domain into a single-sheet `.xlsx` workbook
//! with the columns `domain, A, AAAA, CNAME`.

mod row;
mod xlsx;

pub use row::{header_row, record_row};
pub use xlsx::write_workbook;
