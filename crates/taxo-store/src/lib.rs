//! Persistence collaborator for the ordering subsystem.
//!
//! The core hands over and receives back a plain [`OrderDocument`]; it never
//! learns what medium the document lives in. This crate supplies the trait
//! the core's callers program against and a JSON-file implementation with
//! the two semantics the core requires: load returns the previous save, and
//! save replaces the whole document.
//!
//! A malformed document on disk is rejected here at the boundary: the load
//! logs a warning and degrades to the empty document, so a parse problem
//! never reaches the editing session.

pub mod error;
pub mod json_store;

pub use error::{Result, StoreError};
pub use json_store::JsonFileStore;

use taxo_model::OrderDocument;

/// Whole-document load/save.
pub trait OrderStore {
    /// The document from the previous save, or the empty document when
    /// nothing usable was saved before.
    fn load(&self) -> Result<OrderDocument>;

    /// Replace the stored document wholesale.
    fn save(&self, document: &OrderDocument) -> Result<()>;
}
