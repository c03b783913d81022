//! # Snapshot Export / Import
//!
//! Whole-dataset backup and restore as a single JSON document.
//!
//! ## Document Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Snapshot Document                                   │
//! │                                                                         │
//! │  {                                                                      │
//! │    "products":   [ ... ],        ← required on import                  │
//! │    "sales":      [ ... ],        ← required on import                  │
//! │    "company":    { ... },        ← optional on import                  │
//! │    "exportDate": "2026-...",     ← informational                       │
//! │    "version":    "1.0"           ← informational                       │
//! │  }                                                                      │
//! │                                                                         │
//! │  Import is validate-then-replace: the document is fully decoded and    │
//! │  checked BEFORE anything is written. A rejected import leaves the      │
//! │  existing dataset byte-for-byte untouched.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use meridian_core::validation::validate_product;
use meridian_core::{CompanyInfo, Product, Sale};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::catalog::CatalogStore;
use crate::company::CompanyStore;
use crate::error::{StoreError, StoreResult};
use crate::ledger::LedgerStore;

/// Snapshot document format version.
pub const SNAPSHOT_VERSION: &str = "1.0";

/// A full-dataset snapshot, as exported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub sales: Vec<Sale>,
    pub company: CompanyInfo,
    pub export_date: DateTime<Utc>,
    pub version: String,
}

/// Export/import service over the catalog, ledger, and company stores.
#[derive(Debug, Clone)]
pub struct SnapshotService {
    catalog: CatalogStore,
    ledger: LedgerStore,
    company: CompanyStore,
}

impl SnapshotService {
    pub fn new(catalog: CatalogStore, ledger: LedgerStore, company: CompanyStore) -> Self {
        SnapshotService {
            catalog,
            ledger,
            company,
        }
    }

    /// Captures the whole dataset as of now.
    pub fn export(&self) -> Snapshot {
        Snapshot {
            products: self.catalog.list(),
            sales: self.ledger.list(),
            company: self.company.get(),
            export_date: Utc::now(),
            version: SNAPSHOT_VERSION.to_string(),
        }
    }

    /// Exports the dataset as a pretty-printed JSON document.
    pub fn export_json(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(&self.export())
            .map_err(|e| StoreError::Serialization(e.to_string()))
    }

    /// Imports a snapshot document, replacing the whole dataset.
    ///
    /// ## Required Shape
    /// - `products` and `sales` must be present and be arrays
    /// - `company` is optional; when absent the current record is kept
    /// - `exportDate` and `version` are ignored on import
    ///
    /// ## Errors
    /// Any shape or validation problem yields `ImportShape` and the existing
    /// dataset is not modified. A full replace happens only on success, even
    /// when the imported arrays are empty.
    pub fn import_json(&self, raw: &str) -> StoreResult<()> {
        let value: Value = serde_json::from_str(raw)
            .map_err(|e| StoreError::import_shape(format!("not valid JSON: {e}")))?;
        self.import_value(value)
    }

    /// See [`import_json`]; takes an already-parsed document.
    ///
    /// [`import_json`]: SnapshotService::import_json
    pub fn import_value(&self, value: Value) -> StoreResult<()> {
        let doc = match value {
            Value::Object(map) => map,
            _ => return Err(StoreError::import_shape("document is not a JSON object")),
        };

        let products = decode_collection::<Product>(&doc, "products")?;
        let sales = decode_collection::<Sale>(&doc, "sales")?;

        for product in &products {
            validate_product(product).map_err(|e| {
                StoreError::import_shape(format!("invalid product '{}': {e}", product.id))
            })?;
        }
        for sale in &sales {
            if !sale.totals_consistent() {
                return Err(StoreError::import_shape(format!(
                    "sale '{}' has totals inconsistent with its line items",
                    sale.id
                )));
            }
        }

        let company = match doc.get("company") {
            Some(raw) => Some(
                serde_json::from_value::<CompanyInfo>(raw.clone())
                    .map_err(|e| StoreError::import_shape(format!("invalid `company`: {e}")))?,
            ),
            None => None,
        };

        // Everything validated; replace the dataset
        self.catalog.replace_all(&products)?;
        self.ledger.replace_all(&sales)?;
        if let Some(company) = &company {
            self.company.set(company)?;
        }

        info!(
            products = products.len(),
            sales = sales.len(),
            company = company.is_some(),
            "snapshot imported"
        );
        Ok(())
    }
}

/// Decodes a required top-level array, rejecting absent or mis-typed fields.
fn decode_collection<T>(doc: &serde_json::Map<String, Value>, key: &str) -> StoreResult<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    let raw = doc
        .get(key)
        .ok_or_else(|| StoreError::import_shape(format!("missing `{key}` array")))?;

    if !raw.is_array() {
        return Err(StoreError::import_shape(format!("`{key}` is not an array")));
    }

    serde_json::from_value(raw.clone())
        .map_err(|e| StoreError::import_shape(format!("invalid `{key}` entry: {e}")))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::BlobStore;
    use meridian_core::{CartItem, PaymentMethod};

    struct Fixture {
        _dir: tempfile::TempDir,
        catalog: CatalogStore,
        ledger: LedgerStore,
        company: CompanyStore,
        snapshots: SnapshotService,
    }

    fn fixture() -> Fixture {
        let dir = tempfile::tempdir().unwrap();
        let blob = BlobStore::new(dir.path());
        let catalog = CatalogStore::new(blob.clone());
        let ledger = LedgerStore::new(blob.clone());
        let company = CompanyStore::new(blob);
        let snapshots = SnapshotService::new(catalog.clone(), ledger.clone(), company.clone());
        Fixture {
            _dir: dir,
            catalog,
            ledger,
            company,
            snapshots,
        }
    }

    fn sale(id: &str) -> Sale {
        let product = Product::new("p1", "Coffee", 50, 250, 10);
        let line = CartItem::new(product, 2).freeze();
        Sale {
            id: id.to_string(),
            total_cents: line.line_total().cents(),
            profit_cents: line.line_profit().cents(),
            items: vec![line],
            timestamp: Utc::now(),
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_export_import_round_trip() {
        let source = fixture();
        source
            .catalog
            .create(Product::new("a", "Coffee", 50, 250, 50))
            .unwrap();
        source.ledger.append(sale("C-01-26-1")).unwrap();
        let mut info = CompanyInfo::default();
        info.name = "Corner Store".to_string();
        source.company.set(&info).unwrap();

        let doc = source.snapshots.export_json().unwrap();

        let target = fixture();
        target.snapshots.import_json(&doc).unwrap();

        assert_eq!(target.catalog.list(), source.catalog.list());
        assert_eq!(target.ledger.list(), source.ledger.list());
        assert_eq!(target.company.get().name, "Corner Store");
    }

    #[test]
    fn test_export_document_shape() {
        let f = fixture();
        let doc: Value = serde_json::from_str(&f.snapshots.export_json().unwrap()).unwrap();

        assert!(doc["products"].is_array());
        assert!(doc["sales"].is_array());
        assert!(doc["company"].is_object());
        assert!(doc["exportDate"].is_string());
        assert_eq!(doc["version"], SNAPSHOT_VERSION);
    }

    #[test]
    fn test_import_missing_sales_rejected_and_state_untouched() {
        let f = fixture();
        f.catalog
            .create(Product::new("keep", "Keeper", 10, 20, 5))
            .unwrap();

        let err = f
            .snapshots
            .import_json(r#"{"products": []}"#)
            .unwrap_err();
        assert!(matches!(err, StoreError::ImportShape { .. }));

        // Rejected import must not modify the dataset
        assert_eq!(f.catalog.list().len(), 1);
        assert_eq!(f.catalog.list()[0].id, "keep");
    }

    #[test]
    fn test_import_wrong_type_rejected() {
        let f = fixture();
        let err = f
            .snapshots
            .import_json(r#"{"products": {}, "sales": []}"#)
            .unwrap_err();
        assert!(matches!(err, StoreError::ImportShape { .. }));
    }

    #[test]
    fn test_import_inconsistent_sale_rejected() {
        let f = fixture();
        let mut tampered = sale("C-01-26-1");
        tampered.total_cents += 1;

        let doc = serde_json::json!({
            "products": [],
            "sales": [tampered],
        });
        let err = f.snapshots.import_value(doc).unwrap_err();
        assert!(matches!(err, StoreError::ImportShape { .. }));
        assert!(f.ledger.list().is_empty());
    }

    #[test]
    fn test_import_empty_arrays_is_a_full_replace() {
        let f = fixture();
        f.catalog
            .create(Product::new("a", "Coffee", 50, 250, 50))
            .unwrap();
        f.ledger.append(sale("C-01-26-1")).unwrap();

        f.snapshots
            .import_json(r#"{"products": [], "sales": []}"#)
            .unwrap();

        assert!(f.catalog.list().is_empty());
        assert!(f.ledger.list().is_empty());
    }

    #[test]
    fn test_import_without_company_keeps_current_record() {
        let f = fixture();
        let mut info = CompanyInfo::default();
        info.name = "Corner Store".to_string();
        f.company.set(&info).unwrap();

        f.snapshots
            .import_json(r#"{"products": [], "sales": []}"#)
            .unwrap();
        assert_eq!(f.company.get().name, "Corner Store");
    }
}
