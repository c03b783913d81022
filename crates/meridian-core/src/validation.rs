//! # Validation Module
//!
//! Input validation utilities for Meridian POS.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation layer (external collaborator)                   │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - business rule validation                       │
//! │  ├── Non-negative money, non-negative inventory                        │
//! │  └── Positive quantities and adjustment deltas                         │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store invariant checks (meridian-store)                      │
//! │  ├── Duplicate / missing id detection                                  │
//! │  └── Sale totals audited against recomputation                         │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use meridian_core::validation::{validate_quantity, validate_adjustment_delta};
//!
//! // Validate quantity before adding to cart
//! validate_quantity(5).unwrap();
//!
//! // Validate a stock adjustment delta
//! validate_adjustment_delta(10).unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a caller-assigned product id.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 100 characters
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: "id".to_string(),
        });
    }

    if id.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "id".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a money amount in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items, zero-cost items)
pub fn validate_money_cents(field: &str, cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates an inventory level.
///
/// ## Rules
/// - Must be non-negative (>= 0); the ledger never records negative stock
pub fn validate_inventory(units: i64) -> ValidationResult<()> {
    if units < 0 {
        return Err(ValidationError::OutOfRange {
            field: "inventory".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a cart quantity.
///
/// ## Rules
/// - Must be positive (>= 1); a cart item always carries at least one unit
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates an inventory adjustment delta.
///
/// ## Rules
/// - Must be a positive integer; direction is carried separately
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Inventory: Adjust Stock                                                │
/// │                                                                         │
/// │  User enters delta: 10, direction: subtract                            │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_adjustment_delta(10) ← THIS FUNCTION                         │
/// │       │                                                                 │
/// │       ├── delta <= 0? → Error: "delta must be positive"                │
/// │       │                                                                 │
/// │       └── OK → InventoryService applies max(0, current − delta)        │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_adjustment_delta(delta: i64) -> ValidationResult<()> {
    if delta <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "delta".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Composite Validators
// =============================================================================

/// Validates a whole product record before it enters the catalog.
///
/// Checks id, name, cost, price, and inventory. Optional fields (category,
/// description, image, barcode) are free-form and not validated here.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_id(&product.id)?;
    validate_product_name(&product.name)?;
    validate_money_cents("cost", product.cost_cents)?;
    validate_money_cents("price", product.price_cents)?;
    validate_inventory(product.inventory)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
