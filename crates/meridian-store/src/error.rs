//! # Store Error Types
//!
//! Error types for blob store and ledger operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context and categorization            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller (presentation layer) displays user-friendly message            │
//! │                                                                         │
//! │  EXCEPTION: decode failures on READ never reach the caller.            │
//! │  The gateway logs a warning and serves the empty default instead,      │
//! │  so one corrupt blob cannot brick the register.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use meridian_core::{CoreError, ValidationError};
use thiserror::Error;

/// Persistence-layer errors.
///
/// These wrap I/O and serialization failures and add the store's own
/// invariant violations (missing ids, duplicates, inconsistent totals).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found in its collection.
    ///
    /// ## When This Occurs
    /// - Updating or deleting a product id that isn't in the catalog
    /// - Adjusting inventory for a deleted product
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique-id violation within a collection.
    ///
    /// ## When This Occurs
    /// - Creating a product with an id the catalog already holds
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A sale's stored totals disagree with recomputation from its lines.
    ///
    /// The ledger refuses such appends outright; stored totals are an audit
    /// trail and must always match Σ over the frozen lines.
    #[error("Sale {sale_id} has totals inconsistent with its line items")]
    InconsistentTotals { sale_id: String },

    /// An import document is missing a required top-level collection, or a
    /// collection has the wrong shape. The existing dataset is untouched.
    #[error("Import rejected: {reason}")]
    ImportShape { reason: String },

    /// Serializing a collection for persistence failed.
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Underlying filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Business rule violation surfaced by a store operation.
    #[error(transparent)]
    Domain(#[from] CoreError),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    /// Creates a Duplicate error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates an ImportShape rejection.
    pub fn import_shape(reason: impl Into<String>) -> Self {
        StoreError::ImportShape {
            reason: reason.into(),
        }
    }
}

/// Validation failures route through the domain error so `?` works on both.
impl From<ValidationError> for StoreError {
    fn from(err: ValidationError) -> Self {
        StoreError::Domain(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("Product", "prod-42");
        assert_eq!(err.to_string(), "Product not found: prod-42");

        let err = StoreError::duplicate("id", "prod-1");
        assert_eq!(err.to_string(), "Duplicate id: 'prod-1' already exists");

        let err = StoreError::import_shape("missing `sales` array");
        assert_eq!(err.to_string(), "Import rejected: missing `sales` array");
    }

    #[test]
    fn test_validation_error_routes_through_domain() {
        let err: StoreError = ValidationError::MustBePositive {
            field: "delta".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Domain(CoreError::Validation(_))));
    }
}
