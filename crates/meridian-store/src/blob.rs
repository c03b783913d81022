//! # Blob Store Gateway
//!
//! Single point of contact between the system and durable storage. Every
//! other module in this crate reads and writes through [`BlobStore`]; nothing
//! else touches the data directory.
//!
//! ## Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Data Directory Layout                              │
//! │                                                                         │
//! │  <data_dir>/                                                            │
//! │  ├── products.json         ← whole catalog, one JSON array             │
//! │  ├── sales.json            ← whole ledger, one JSON array              │
//! │  ├── daily_counters.json   ← day key → order counter map               │
//! │  └── company.json          ← single CompanyInfo object                 │
//! │                                                                         │
//! │  One collection = one file. Writes replace the whole file;             │
//! │  there is no partial update and no cross-file transaction.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Read Recovery
//! A missing file or an undecodable blob is NEVER an error to the caller.
//! The gateway logs a warning and serves the collection's empty default, so
//! the register keeps working even after a corrupt write or a fresh install.
//!
//! ## Write Atomicity
//! Writes serialize into a tempfile in the same directory and then rename it
//! over the target. Readers see either the old blob or the new one, never a
//! torn write.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{StoreError, StoreResult};

// =============================================================================
// Collection Names
// =============================================================================

/// Product catalog collection.
pub const PRODUCTS: &str = "products";

/// Append-only sales ledger collection.
pub const SALES: &str = "sales";

/// Per-day order-number counters.
pub const DAILY_COUNTERS: &str = "daily_counters";

/// Single company-info record.
pub const COMPANY: &str = "company";

/// Every collection the gateway owns, for clear-all sweeps.
pub const ALL_COLLECTIONS: [&str; 4] = [PRODUCTS, SALES, DAILY_COUNTERS, COMPANY];

// =============================================================================
// BlobStore
// =============================================================================

/// JSON blob gateway rooted at a data directory.
///
/// Cloning is cheap; all clones share the same root. The gateway itself is
/// stateless between calls — every read hits the filesystem.
#[derive(Debug, Clone)]
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Creates a gateway rooted at `root`. The directory must already exist;
    /// [`crate::store::Store::open`] handles creation.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        BlobStore { root: root.into() }
    }

    /// Returns the data directory this gateway is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a collection's blob file.
    fn path(&self, collection: &str) -> PathBuf {
        self.root.join(format!("{collection}.json"))
    }

    /// Reads a whole collection, recovering to the empty default on any
    /// failure.
    ///
    /// ## Recovery Rules
    /// - File missing → default, logged at debug (normal on first run)
    /// - File unreadable or undecodable → default, logged at warn
    ///
    /// The caller can always proceed; a corrupt blob degrades to an empty
    /// collection rather than a dead register.
    pub fn read<T>(&self, collection: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.path(collection);

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(collection, "blob absent, serving empty default");
                return T::default();
            }
            Err(err) => {
                warn!(
                    collection,
                    error = %err,
                    "failed to read blob, serving empty default"
                );
                return T::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    collection,
                    error = %err,
                    "failed to decode blob, serving empty default"
                );
                T::default()
            }
        }
    }

    /// Replaces a whole collection atomically.
    ///
    /// Serializes into a tempfile in the data directory, then renames it over
    /// the target. On any error the previous blob is left intact.
    pub fn write<T>(&self, collection: &str, value: &T) -> StoreResult<()>
    where
        T: Serialize,
    {
        let bytes = serde_json::to_vec_pretty(value)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.root)?;
        tmp.write_all(&bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path(collection))
            .map_err(|e| StoreError::Io(e.error))?;

        debug!(collection, bytes = bytes.len(), "blob written");
        Ok(())
    }

    /// Removes a collection's blob file. Missing files are fine.
    pub fn clear(&self, collection: &str) -> StoreResult<()> {
        match std::fs::remove_file(self.path(collection)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
