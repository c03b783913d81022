//! # Sales Ledger
//!
//! Append-only store of completed sales.
//!
//! ## Invariants
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Ledger Invariants                                 │
//! │                                                                         │
//! │  1. APPEND-ONLY: sales are never edited or removed one at a time.      │
//! │     The only bulk replacement path is snapshot import / clear-all.     │
//! │                                                                         │
//! │  2. AUDITED TOTALS: a sale whose stored total_cents / profit_cents     │
//! │     disagree with recomputation from its lines is refused.             │
//! │                                                                         │
//! │  3. FROZEN LINES: the ledger never looks at the catalog. Lines carry   │
//! │     their own name/price/cost snapshots.                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meridian_core::Sale;
use tracing::info;

use crate::blob::{BlobStore, SALES};
use crate::error::{StoreError, StoreResult};

/// Ledger store backed by the `sales` collection.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    blob: BlobStore,
}

impl LedgerStore {
    pub fn new(blob: BlobStore) -> Self {
        LedgerStore { blob }
    }

    /// Lists the whole ledger, oldest first.
    pub fn list(&self) -> Vec<Sale> {
        self.blob.read(SALES)
    }

    /// Appends a completed sale.
    ///
    /// ## Errors
    /// - `InconsistentTotals` when the stored totals don't match the lines
    pub fn append(&self, sale: Sale) -> StoreResult<Sale> {
        if !sale.totals_consistent() {
            return Err(StoreError::InconsistentTotals {
                sale_id: sale.id.clone(),
            });
        }

        let mut sales = self.list();
        sales.push(sale.clone());
        self.blob.write(SALES, &sales)?;

        info!(
            id = %sale.id,
            total_cents = sale.total_cents,
            lines = sale.items.len(),
            "sale appended"
        );
        Ok(sale)
    }

    /// Replaces the whole ledger. Used by snapshot import and clear-all.
    pub(crate) fn replace_all(&self, sales: &[Sale]) -> StoreResult<()> {
        self.blob.write(SALES, &sales)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use meridian_core::{CartItem, PaymentMethod, Product};

    fn ledger() -> (tempfile::TempDir, LedgerStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LedgerStore::new(BlobStore::new(dir.path()));
        (dir, store)
    }

    fn sale(id: &str, price_cents: i64, qty: i64) -> Sale {
        let product = Product::new("p1", "Coffee", 50, price_cents, 10);
        let line = CartItem::new(product, qty).freeze();
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
    fn test_append_and_list() {
        let (_dir, ledger) = ledger();
        ledger.append(sale("C-01-26-1", 250, 2)).unwrap();
        ledger.append(sale("C-01-26-2", 250, 1)).unwrap();

        let sales = ledger.list();
        assert_eq!(sales.len(), 2);
        assert_eq!(sales[0].id, "C-01-26-1");
        assert_eq!(sales[1].id, "C-01-26-2");
    }

    #[test]
    fn test_inconsistent_totals_refused() {
        let (_dir, ledger) = ledger();
        let mut tampered = sale("C-01-26-1", 250, 2);
        tampered.total_cents += 1;

        let err = ledger.append(tampered).unwrap_err();
        assert!(matches!(err, StoreError::InconsistentTotals { .. }));
        assert!(ledger.list().is_empty());
    }
}
