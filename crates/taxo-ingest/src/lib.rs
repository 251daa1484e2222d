//! CSV dataset collaborator.
//!
//! The ordering core never touches files; it receives a read-only slice of
//! [`Record`]s. This crate produces that slice from a CSV export of the live
//! dataset. Field content is taken literally: a multi-valued cell stays one
//! pre-joined display string.

pub mod csv_records;
pub mod error;

pub use csv_records::read_records;
pub use error::{IngestError, Result};
