//! # Inventory Service
//!
//! Manual stock adjustments and inventory-wide summary figures.
//!
//! ## Adjustment Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Inventory Adjustment                                │
//! │                                                                         │
//! │  adjust(id, delta, direction)                                           │
//! │       │                                                                 │
//! │       ├── delta <= 0?         → Err(Validation)                        │
//! │       ├── id not in catalog?  → Err(NotFound)                          │
//! │       │                                                                 │
//! │       ├── Add      → inventory = current + delta                       │
//! │       └── Subtract → inventory = max(0, current − delta)               │
//! │                      (floors at zero, never negative)                  │
//! │                                                                         │
//! │  Checkout does NOT call this. Stock levels only move through explicit  │
//! │  adjustments; sales leave inventory untouched.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meridian_core::validation::validate_adjustment_delta;
use meridian_core::{AdjustmentDirection, Money, Product};
use tracing::info;

use crate::catalog::CatalogStore;
use crate::error::{StoreError, StoreResult};

/// Stock adjustment and summary service, layered over the catalog.
#[derive(Debug, Clone)]
pub struct InventoryService {
    catalog: CatalogStore,
}

impl InventoryService {
    pub fn new(catalog: CatalogStore) -> Self {
        InventoryService { catalog }
    }

    /// Applies a manual stock adjustment and returns the updated product.
    ///
    /// ## Errors
    /// - Validation failure when `delta` is not a positive integer
    /// - `NotFound` when the product isn't in the catalog
    pub fn adjust(
        &self,
        product_id: &str,
        delta: i64,
        direction: AdjustmentDirection,
    ) -> StoreResult<Product> {
        validate_adjustment_delta(delta)?;

        let mut product = self
            .catalog
            .get(product_id)
            .ok_or_else(|| StoreError::not_found("Product", product_id))?;

        product.inventory = match direction {
            AdjustmentDirection::Add => product.inventory + delta,
            AdjustmentDirection::Subtract => (product.inventory - delta).max(0),
        };
        product.touch();

        let product = self.catalog.update(product)?;
        info!(
            id = %product.id,
            delta,
            ?direction,
            inventory = product.inventory,
            "inventory adjusted"
        );
        Ok(product)
    }

    /// Total units on hand across the catalog.
    pub fn total_units(&self) -> i64 {
        self.catalog.list().iter().map(|p| p.inventory).sum()
    }

    /// Value of all stock on hand, at cost.
    pub fn total_value(&self) -> Money {
        self.catalog
            .list()
            .iter()
            .map(Product::inventory_value)
            .sum()
    }

    /// Products below the low-stock threshold, in catalog order.
    pub fn low_stock(&self) -> Vec<Product> {
        self.catalog
            .list()
            .into_iter()
            .filter(Product::is_low_stock)
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
