#![forbid(unsafe_code)]

//! JSON file persistence for the item list, plus import/export.
//!
//! The on-disk format is a plain JSON array of items
//! (`[{"name": …, "last": …, "enabled": …}]`). Loading fails soft — a
//! missing or malformed file yields an empty list and a warning, never an
//! error — while imports are strict: a payload that doesn't parse wholesale
//! is rejected and the prior list stays untouched.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use lunchwheel_core::Item;
use lunchwheel_runtime::{PersistError, Storage};

/// Errors from explicit store operations (save, import, export).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The payload was rejected wholesale; nothing was applied.
    #[error("malformed item list: {0}")]
    Malformed(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Parse a JSON item list, validating it wholesale.
///
/// Every entry must carry a non-empty name; one bad entry rejects the whole
/// payload.
pub fn parse_items(json: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> =
        serde_json::from_str(json).map_err(|e| StoreError::Malformed(e.to_string()))?;
    for item in &items {
        if item.name.trim().is_empty() {
            return Err(StoreError::Malformed(
                "entry with an empty name".to_string(),
            ));
        }
    }
    Ok(items)
}

/// Item list persistence backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the list, failing soft: a missing file is an empty list, and a
    /// file that doesn't parse is logged and treated as empty rather than
    /// taking the whole application down.
    #[must_use]
    pub fn load_items(&self) -> Vec<Item> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no stored list yet");
                return Vec::new();
            }
            Err(err) => {
                warn!(path = %self.path.display(), %err, "failed to read stored list; starting empty");
                return Vec::new();
            }
        };
        match parse_items(&raw) {
            Ok(items) => items,
            Err(err) => {
                warn!(path = %self.path.display(), %err, "stored list malformed; starting empty");
                Vec::new()
            }
        }
    }

    /// Persist the full list: serialize pretty, write a sibling temp file,
    /// then rename over the target so a crash can't leave a half-written
    /// list behind.
    pub fn save_items(&self, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        let io = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        let mut file = fs::File::create(&tmp).map_err(io)?;
        file.write_all(json.as_bytes()).map_err(io)?;
        file.write_all(b"\n").map_err(io)?;
        file.sync_all().map_err(io)?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(io)?;
        debug!(path = %self.path.display(), count = items.len(), "list saved");
        Ok(())
    }

    /// Replace-on-success import: parse `from` wholesale and return the new
    /// list. On any parse failure nothing is returned and the caller's list
    /// stays as it was.
    pub fn import_items(&self, from: &Path) -> Result<Vec<Item>> {
        let raw = fs::read_to_string(from).map_err(|source| StoreError::Io {
            path: from.to_path_buf(),
            source,
        })?;
        let items = parse_items(&raw)?;
        debug!(path = %from.display(), count = items.len(), "list imported");
        Ok(items)
    }

    /// Export the list as pretty JSON to `to`.
    pub fn export_items(&self, to: &Path, items: &[Item]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)
            .map_err(|e| StoreError::Malformed(e.to_string()))?;
        fs::write(to, json + "\n").map_err(|source| StoreError::Io {
            path: to.to_path_buf(),
            source,
        })
    }
}

impl Storage for FileStore {
    fn load(&mut self) -> Vec<Item> {
        self.load_items()
    }

    fn save(&mut self, items: &[Item]) -> std::result::Result<(), PersistError> {
        self.save_items(items).map_err(PersistError::from)
    }
}

impl From<StoreError> for PersistError {
    fn from(err: StoreError) -> Self {
        PersistError(err.to_string())
    }
}
