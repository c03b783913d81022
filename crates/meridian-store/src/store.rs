//! # Store Facade
//!
//! Single entry point that owns the data directory and hands out the
//! individual stores and services.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Store Facade                                     │
//! │                                                                         │
//! │  StoreConfig::new(data_dir) ← configure the data directory             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config) ← create directory, root the blob gateway         │
//! │       │                                                                 │
//! │       ├── .catalog()    → CatalogStore                                 │
//! │       ├── .ledger()     → LedgerStore                                  │
//! │       ├── .sequencer()  → OrderSequencer                               │
//! │       ├── .inventory()  → InventoryService                             │
//! │       ├── .reports()    → ReportAggregator                             │
//! │       ├── .company()    → CompanyStore                                 │
//! │       ├── .snapshots()  → SnapshotService                              │
//! │       └── .checkout()   → CheckoutService                              │
//! │                                                                         │
//! │  All handles are cheap clones sharing one blob gateway. The store      │
//! │  assumes a single register instance owns the data directory.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tracing::info;

use crate::blob::{BlobStore, ALL_COLLECTIONS};
use crate::catalog::CatalogStore;
use crate::checkout::CheckoutService;
use crate::company::CompanyStore;
use crate::error::StoreResult;
use crate::inventory::InventoryService;
use crate::ledger::LedgerStore;
use crate::report::ReportAggregator;
use crate::sequencer::OrderSequencer;
use crate::snapshot::SnapshotService;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("./data").create_dir(true);
/// let store = Store::open(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the collection blob files.
    pub data_dir: PathBuf,

    /// Whether to create the data directory (and parents) if missing.
    /// Default: true
    pub create_dir: bool,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            create_dir: true,
        }
    }

    /// Sets whether the data directory is created on open.
    pub fn create_dir(mut self, create: bool) -> Self {
        self.create_dir = create;
        self
    }
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing access to every persistence service.
#[derive(Debug, Clone)]
pub struct Store {
    blob: BlobStore,
}

impl Store {
    /// Opens a store over the configured data directory.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        if config.create_dir {
            std::fs::create_dir_all(&config.data_dir)?;
        }

        info!(data_dir = %config.data_dir.display(), "store opened");
        Ok(Store {
            blob: BlobStore::new(config.data_dir),
        })
    }

    /// Returns the underlying blob gateway, for advanced callers.
    pub fn blob(&self) -> &BlobStore {
        &self.blob
    }

    /// Product catalog CRUD.
    pub fn catalog(&self) -> CatalogStore {
        CatalogStore::new(self.blob.clone())
    }

    /// Append-only sales ledger.
    pub fn ledger(&self) -> LedgerStore {
        LedgerStore::new(self.blob.clone())
    }

    /// Date-scoped order number source.
    pub fn sequencer(&self) -> OrderSequencer {
        OrderSequencer::new(self.blob.clone())
    }

    /// Stock adjustments and inventory summaries.
    pub fn inventory(&self) -> InventoryService {
        InventoryService::new(self.catalog())
    }

    /// On-demand sales reports.
    pub fn reports(&self) -> ReportAggregator {
        ReportAggregator::new(self.ledger())
    }

    /// Company info record.
    pub fn company(&self) -> CompanyStore {
        CompanyStore::new(self.blob.clone())
    }

    /// Snapshot export/import.
    pub fn snapshots(&self) -> SnapshotService {
        SnapshotService::new(self.catalog(), self.ledger(), self.company())
    }

    /// Cart-to-sale checkout pipeline.
    pub fn checkout(&self) -> CheckoutService {
        CheckoutService::new(self.ledger(), self.sequencer(), self.company())
    }

    /// Removes every collection blob. Catalog, ledger, counters, and company
    /// info all reset to their empty defaults.
    pub fn clear_all(&self) -> StoreResult<()> {
        for collection in ALL_COLLECTIONS {
            self.blob.clear(collection)?;
        }
        info!("all collections cleared");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::Product;

    #[test]
    fn test_open_creates_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("meridian");

        let store = Store::open(StoreConfig::new(&nested)).unwrap();
        assert!(nested.exists());
        assert!(store.catalog().list().is_empty());
    }

    #[test]
    fn test_handles_share_one_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(StoreConfig::new(dir.path())).unwrap();

        store
            .catalog()
            .create(Product::new("a", "Coffee", 50, 250, 50))
            .unwrap();

        // A second handle over the same directory sees the same data
        let other = Store::open(StoreConfig::new(dir.path())).unwrap();
        assert_eq!(other.catalog().list().len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(StoreConfig::new(dir.path())).unwrap();

        store
            .catalog()
            .create(Product::new("a", "Coffee", 50, 250, 50))
            .unwrap();
        store.sequencer().next_order_number();

        store.clear_all().unwrap();
        assert!(store.catalog().list().is_empty());
        assert!(store.ledger().list().is_empty());
    }
}
