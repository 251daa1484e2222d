pub mod document;
pub mod error;
pub mod record;

pub use document::{OrderDocument, scope_key, split_scope_key};
pub use error::{ModelError, Result};
pub use record::{FlatDimension, Record};
