//! Record reading
//!
//! Parsing of single comma-separated genealogical records into [`Person`]s.
//!
//! [`Person`]: crate::models::Person

pub mod record;

pub use record::{parse_record, parse_record_with, RecordFields};
