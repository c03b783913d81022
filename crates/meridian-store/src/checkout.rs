//! # Checkout
//!
//! Turns a cart into a ledger entry and a receipt payload.
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Checkout Pipeline                                 │
//! │                                                                         │
//! │  checkout(cart, payment_method)                                         │
//! │       │                                                                 │
//! │       ├── cart empty?          → Err(EmptyCart)                        │
//! │       ├── any quantity < 1?    → Err(Validation)                       │
//! │       │                                                                 │
//! │       ├── order number  ← sequencer (C-DD-YY-n)                        │
//! │       ├── freeze lines  ← CartItem::freeze (price/cost snapshots)      │
//! │       ├── totals        ← Σ over frozen lines                          │
//! │       ├── append sale   ← ledger (verifies audited totals)             │
//! │       └── build receipt ← flattened lines + current company info       │
//! │                                                                         │
//! │  Inventory is NOT decremented here. Stock only moves through the       │
//! │  explicit adjustment path.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use meridian_core::validation::validate_quantity;
use meridian_core::{
    CartItem, CompanyInfo, CoreError, Money, PaymentMethod, ReceiptLine, ReceiptPayload, Sale,
    SaleLine,
};
use tracing::info;

use crate::company::CompanyStore;
use crate::error::StoreResult;
use crate::ledger::LedgerStore;
use crate::sequencer::OrderSequencer;

/// Everything the caller needs after a completed checkout.
#[derive(Debug, Clone)]
pub struct CheckoutOutcome {
    /// The sale as appended to the ledger.
    pub sale: Sale,
    /// Flattened receipt payload for the printing collaborator.
    pub receipt: ReceiptPayload,
    /// Company info current at checkout time, for the receipt header/footer.
    pub company: CompanyInfo,
}

/// Checkout service wiring the sequencer, ledger, and company stores.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    ledger: LedgerStore,
    sequencer: OrderSequencer,
    company: CompanyStore,
}

impl CheckoutService {
    pub fn new(ledger: LedgerStore, sequencer: OrderSequencer, company: CompanyStore) -> Self {
        CheckoutService {
            ledger,
            sequencer,
            company,
        }
    }

    /// Completes a sale from the given cart.
    ///
    /// ## Errors
    /// - `EmptyCart` for an empty cart
    /// - Validation failure for any non-positive quantity
    /// - Ledger append failures (I/O)
    pub fn checkout(
        &self,
        cart: &[CartItem],
        payment_method: PaymentMethod,
    ) -> StoreResult<CheckoutOutcome> {
        if cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }
        for item in cart {
            validate_quantity(item.quantity)?;
        }

        let order_number = self.sequencer.next_order_number();
        let items: Vec<SaleLine> = cart.iter().map(CartItem::freeze).collect();
        let total: Money = items.iter().map(SaleLine::line_total).sum();
        let profit: Money = items.iter().map(SaleLine::line_profit).sum();
        let timestamp = Utc::now();

        let sale = self.ledger.append(Sale {
            id: order_number.clone(),
            items,
            total_cents: total.cents(),
            profit_cents: profit.cents(),
            timestamp,
            payment_method,
        })?;

        let receipt = ReceiptPayload {
            order_number,
            items: cart
                .iter()
                .map(|item| ReceiptLine {
                    name: item.product.name.clone(),
                    quantity: item.quantity,
                    price_cents: item.product.price_cents,
                    total_cents: item.line_total().cents(),
                })
                .collect(),
            total_cents: sale.total_cents,
            timestamp,
        };

        info!(
            order = %sale.id,
            total_cents = sale.total_cents,
            ?payment_method,
            "checkout complete"
        );

        Ok(CheckoutOutcome {
            sale,
            receipt,
            company: self.company.get(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
