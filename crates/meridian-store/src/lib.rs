//! # meridian-store: Persistence Layer for Meridian POS
//!
//! JSON blob persistence and the services built on top of it.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    meridian-store Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Store (facade)                               │   │
//! │  │   catalog │ ledger │ sequencer │ inventory │ reports │ ...      │   │
//! │  └───────┬─────────┬─────────┬─────────┬──────────┬───────────────┘   │
//! │          │         │         │         │          │                    │
//! │  ┌───────▼─────────▼─────────▼─────────▼──────────▼───────────────┐   │
//! │  │                    BlobStore (gateway)                          │   │
//! │  │   products.json │ sales.json │ daily_counters.json │ company   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  All I/O is synchronous and whole-file. Atomic writes via tempfile     │
//! │  rename; corrupt blobs degrade to empty defaults on read.              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`blob`] - JSON blob gateway (the only code touching the filesystem)
//! - [`catalog`] - Product catalog CRUD
//! - [`ledger`] - Append-only sales ledger with audited totals
//! - [`sequencer`] - Date-scoped order numbers (`C-DD-YY-n`)
//! - [`inventory`] - Stock adjustments and inventory summaries
//! - [`report`] - On-demand sales reports over a date range
//! - [`snapshot`] - Whole-dataset export/import
//! - [`company`] - Receipt company info
//! - [`checkout`] - Cart-to-sale pipeline
//! - [`store`] - Facade owning the data directory
//! - [`error`] - Store error types

pub mod blob;
pub mod catalog;
pub mod checkout;
pub mod company;
pub mod error;
pub mod inventory;
pub mod ledger;
pub mod report;
pub mod sequencer;
pub mod snapshot;
pub mod store;

pub use blob::BlobStore;
pub use catalog::{generate_product_id, CatalogStore};
pub use checkout::{CheckoutOutcome, CheckoutService};
pub use company::CompanyStore;
pub use error::{StoreError, StoreResult};
pub use inventory::InventoryService;
pub use ledger::LedgerStore;
pub use report::{DateRange, ReportAggregator};
pub use sequencer::OrderSequencer;
pub use snapshot::{Snapshot, SnapshotService, SNAPSHOT_VERSION};
pub use store::{Store, StoreConfig};
