//! JSON-file order store.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use taxo_model::OrderDocument;

use crate::OrderStore;
use crate::error::{Result, StoreError};

/// Stores the order document as pretty-printed JSON at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderStore for JsonFileStore {
    /// Load the previously saved document.
    ///
    /// A missing file is the first-session case and yields the empty
    /// document. So does a file that fails to parse or has the wrong shape;
    /// that malformation is logged and swallowed here so the editing session
    /// starts from empty-order reconciliation instead of an error.
    fn load(&self) -> Result<OrderDocument> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved order document");
                return Ok(OrderDocument::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        match serde_json::from_str(&contents) {
            Ok(document) => Ok(document),
            Err(error) => {
                warn!(
                    path = %self.path.display(),
                    %error,
                    "malformed order document, falling back to empty order"
                );
                Ok(OrderDocument::new())
            }
        }
    }

    /// Replace the stored document atomically (temp file + rename).
    fn save(&self, document: &OrderDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)
            .map_err(|source| StoreError::Serialization { source })?;

        let temp_path = self.path.with_extension("json.tmp");
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let mut file = File::create(&temp_path).map_err(|source| StoreError::Io {
            operation: "create",
            path: temp_path.clone(),
            source,
        })?;
        file.write_all(json.as_bytes())
            .map_err(|source| StoreError::Io {
                operation: "write",
                path: temp_path.clone(),
                source,
            })?;
        file.sync_all().map_err(|source| StoreError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|source| StoreError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "saved order document");
        Ok(())
    }
}
