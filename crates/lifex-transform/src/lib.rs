//! Life expectancy cleaning core.
//!
//! This crate holds the transformation logic between a loaded raw export
//! and the cleaned observation table:
//!
//! - **melt**: wide-to-long reshaping with composite-key decoding
//! - **coerce**: year/value validation and typed casting
//! - **filter**: case-insensitive region selection
//! - **json**: normalization of the record-oriented JSON export
//! - **frame**: the six-column output table
//! - **pipeline**: per-encoding composition of the stages
//!
//! Everything here is pure and in-memory; loading and writing live with
//! the callers.

pub mod coerce;
pub mod filter;
pub mod frame;
pub mod json;
pub mod melt;
pub mod pipeline;

pub use coerce::{coerce_rows, extract_value, parse_year};
pub use filter::{filter_rows, matches_region};
pub use frame::ObservationFrame;
pub use json::normalize_records;
pub use melt::{MeltedRow, melt_wide_table};
pub use pipeline::{Encoding, RawInput, clean, clean_json, clean_wide};
