//! # Product Catalog
//!
//! CRUD over the product collection.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Operations                                  │
//! │                                                                         │
//! │  create(product)                                                        │
//! │       │                                                                 │
//! │       ├── validate (id, name, money, inventory)                        │
//! │       ├── duplicate id? → Err(Duplicate)                               │
//! │       └── append to products.json                                      │
//! │                                                                         │
//! │  update(product)  → id missing? → Err(NotFound), else replace entry    │
//! │  delete(id)       → id missing? → Err(NotFound), else remove entry     │
//! │                                                                         │
//! │  NOTE: deleting a product NEVER touches the ledger. Past sales keep    │
//! │  their frozen snapshots of it.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meridian_core::validation::validate_product;
use meridian_core::{CoreError, Product};
use tracing::info;
use uuid::Uuid;

use crate::blob::{BlobStore, PRODUCTS};
use crate::error::{StoreError, StoreResult};

/// Generates a fresh product id for callers that don't bring their own.
pub fn generate_product_id() -> String {
    Uuid::new_v4().to_string()
}

/// Catalog store backed by the `products` collection.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    blob: BlobStore,
}

impl CatalogStore {
    pub fn new(blob: BlobStore) -> Self {
        CatalogStore { blob }
    }

    /// Lists all products, in insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.blob.read(PRODUCTS)
    }

    /// Looks up a single product by id.
    pub fn get(&self, id: &str) -> Option<Product> {
        self.list().into_iter().find(|p| p.id == id)
    }

    /// Adds a new product to the catalog.
    ///
    /// ## Errors
    /// - Validation failure (empty name, negative money, negative inventory)
    /// - `Duplicate` when the id is already taken
    pub fn create(&self, product: Product) -> StoreResult<Product> {
        validate_product(&product).map_err(CoreError::Validation)?;

        let mut products = self.list();
        if products.iter().any(|p| p.id == product.id) {
            return Err(StoreError::duplicate("id", &product.id));
        }

        products.push(product.clone());
        self.blob.write(PRODUCTS, &products)?;

        info!(id = %product.id, name = %product.name, "product created");
        Ok(product)
    }

    /// Replaces an existing catalog entry wholesale.
    ///
    /// ## Errors
    /// - Validation failure on the replacement record
    /// - `NotFound` when the id isn't in the catalog
    pub fn update(&self, product: Product) -> StoreResult<Product> {
        validate_product(&product).map_err(CoreError::Validation)?;

        let mut products = self.list();
        let slot = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or_else(|| StoreError::not_found("Product", &product.id))?;

        *slot = product.clone();
        self.blob.write(PRODUCTS, &products)?;

        info!(id = %product.id, "product updated");
        Ok(product)
    }

    /// Removes a product from the catalog. The ledger is untouched; sales
    /// that referenced this product keep their frozen lines.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut products = self.list();
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            return Err(StoreError::not_found("Product", id));
        }

        self.blob.write(PRODUCTS, &products)?;
        info!(id, "product deleted");
        Ok(())
    }

    /// Replaces the whole catalog. Used by snapshot import and clear-all;
    /// entries are assumed to be pre-validated.
    pub(crate) fn replace_all(&self, products: &[Product]) -> StoreResult<()> {
        self.blob.write(PRODUCTS, &products)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
