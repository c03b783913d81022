//! # Domain Types
//!
//! Core domain types used throughout Meridian POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │      Sale       │   │   SalesReport   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (caller's)  │   │  id (order no.) │   │  totals         │       │
//! │  │  name           │   │  items (frozen) │   │  best sellers   │       │
//! │  │  price_cents    │   │  total_cents    │   │  sales by date  │       │
//! │  │  cost_cents     │   │  profit_cents   │   └─────────────────┘       │
//! │  │  inventory      │   │  timestamp      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    CartItem     │   │    SaleLine     │   │ PaymentMethod   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  transient,     │   │  frozen product │   │  Cash (default) │       │
//! │  │  pre-checkout   │   │  snapshot       │   │  Card / Other   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A Sale never references catalog rows. Each SaleLine freezes the product
//! fields it needs at checkout time, so later product edits or deletions
//! cannot corrupt historical reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::{DEFAULT_THANKS_MESSAGE, LOW_STOCK_THRESHOLD};

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// The `id` is caller-assigned and unique within the catalog. Cost and price
/// are integer cents; inventory is a unit count that is never negative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier, assigned by the caller at creation time.
    pub id: String,

    /// Display name shown at the register and on receipts.
    pub name: String,

    /// Acquisition cost in cents (for profit margin calculations).
    pub cost_cents: i64,

    /// Selling price in cents.
    pub price_cents: i64,

    /// Units on hand. Invariant: never negative.
    pub inventory: i64,

    /// Optional grouping shown on the register grid.
    pub category: Option<String>,

    /// Optional description for product details.
    pub description: Option<String>,

    /// Opaque image reference (base64 data or URL); encoding is handled by
    /// an external collaborator, the ledger just carries the string.
    pub image: Option<String>,

    /// Barcode (EAN-13, UPC-A, etc.).
    pub barcode: Option<String>,

    /// When the product was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with the required fields; optional fields start empty
    /// and both timestamps are set to now.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        cost_cents: i64,
        price_cents: i64,
        inventory: i64,
    ) -> Self {
        let now = Utc::now();
        Product {
            id: id.into(),
            name: name.into(),
            cost_cents,
            price_cents,
            inventory,
            category: None,
            description: None,
            image: None,
            barcode: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the selling price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the acquisition cost as a Money type.
    #[inline]
    pub fn cost(&self) -> Money {
        Money::from_cents(self.cost_cents)
    }

    /// Value of the units on hand, at cost.
    #[inline]
    pub fn inventory_value(&self) -> Money {
        self.cost().multiply_quantity(self.inventory)
    }

    /// Low-stock predicate: fewer than [`LOW_STOCK_THRESHOLD`] units on hand.
    #[inline]
    pub fn is_low_stock(&self) -> bool {
        self.inventory < LOW_STOCK_THRESHOLD
    }

    /// Bumps `updated_at` to now. Call after any mutation.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An item in the cart: a product plus a quantity of at least one.
///
/// Cart items exist only between "add to cart" and checkout. They are never
/// persisted on their own; checkout freezes them into [`SaleLine`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    pub product: Product,
    pub quantity: i64,
}

impl CartItem {
    pub fn new(product: Product, quantity: i64) -> Self {
        CartItem { product, quantity }
    }

    /// Line total: price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    /// Line profit: (price − cost) × quantity.
    pub fn line_profit(&self) -> Money {
        (self.product.price() - self.product.cost()).multiply_quantity(self.quantity)
    }

    /// Freezes this cart item into an immutable sale line.
    ///
    /// ## Price Freezing
    /// Price and cost are captured at this moment. If the product changes in
    /// the catalog later, the sale line retains the original values.
    pub fn freeze(&self) -> SaleLine {
        SaleLine {
            product_id: self.product.id.clone(),
            name: self.product.name.clone(),
            unit_price_cents: self.product.price_cents,
            unit_cost_cents: self.product.cost_cents,
            quantity: self.quantity,
        }
    }
}

// =============================================================================
// Payment Method
// =============================================================================

/// How a sale was paid for. Defaults to cash, including when the field is
/// absent in persisted data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    Cash,
    Card,
    Other,
}

impl Default for PaymentMethod {
    fn default() -> Self {
        PaymentMethod::Cash
    }
}

// =============================================================================
// Inventory Adjustment
// =============================================================================

/// Direction of a manual inventory adjustment.
///
/// The delta itself is always a positive integer; the direction decides
/// whether it is added to or subtracted from the current level. Subtraction
/// floors at zero, never producing negative inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentDirection {
    Add,
    Subtract,
}

// =============================================================================
// Sale
// =============================================================================

/// A line item in a sale.
/// Uses the snapshot pattern to freeze product data at time of sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SaleLine {
    /// Id of the product this line was frozen from.
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name: String,
    /// Unit price in cents at time of sale (frozen).
    pub unit_price_cents: i64,
    /// Unit cost in cents at time of sale (frozen).
    pub unit_cost_cents: i64,
    /// Quantity sold.
    pub quantity: i64,
}

impl SaleLine {
    /// Line total: frozen price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }

    /// Line profit: frozen (price − cost) × quantity.
    #[inline]
    pub fn line_profit(&self) -> Money {
        Money::from_cents(self.unit_price_cents - self.unit_cost_cents)
            .multiply_quantity(self.quantity)
    }
}

/// A completed sale: one immutable entry in the ledger.
///
/// ## Audited Redundancy
/// `total_cents` and `profit_cents` are stored alongside the lines they were
/// computed from. They must always equal the recomputation from `items`;
/// [`Sale::totals_consistent`] checks this and the ledger refuses appends
/// that fail it. They are an audit trail, not a second source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Sale {
    /// Sale id. Equal to the order number issued at checkout.
    pub id: String,

    /// Frozen product snapshots and quantities.
    pub items: Vec<SaleLine>,

    /// Σ(price × qty) over items, stored at checkout time.
    pub total_cents: i64,

    /// Σ((price − cost) × qty) over items, stored at checkout time.
    pub profit_cents: i64,

    /// When the sale was completed.
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,

    /// Defaults to cash when absent in persisted data.
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

impl Sale {
    /// Returns the stored total as Money.
    #[inline]
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }

    /// Returns the stored profit as Money.
    #[inline]
    pub fn profit(&self) -> Money {
        Money::from_cents(self.profit_cents)
    }

    /// Recomputes the total from the frozen lines.
    pub fn computed_total(&self) -> Money {
        self.items.iter().map(SaleLine::line_total).sum()
    }

    /// Recomputes the profit from the frozen lines.
    pub fn computed_profit(&self) -> Money {
        self.items.iter().map(SaleLine::line_profit).sum()
    }

    /// Checks the stored totals against recomputation from the lines.
    pub fn totals_consistent(&self) -> bool {
        self.computed_total().cents() == self.total_cents
            && self.computed_profit().cents() == self.profit_cents
    }
}

// =============================================================================
// Company Info
// =============================================================================

/// Company details shown on receipts and reports. One record per store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub telephone: String,
    pub email: String,
    /// Opaque logo reference (base64 data or URL).
    pub logo: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
    pub tiktok: Option<String>,
    /// Printed at the bottom of every receipt.
    pub thanks_message: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        CompanyInfo {
            name: String::new(),
            address: String::new(),
            telephone: String::new(),
            email: String::new(),
            logo: None,
            facebook: None,
            instagram: None,
            tiktok: None,
            thanks_message: DEFAULT_THANKS_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Reports
// =============================================================================

/// One entry in the best-sellers ranking: summed quantity per product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BestSeller {
    pub product_id: String,
    /// Name frozen in the sale lines (not the current catalog name).
    pub name: String,
    /// Frozen unit price, for the "$x.xx each" display.
    pub unit_price_cents: i64,
    pub quantity: i64,
}

/// Per-calendar-day sales and profit totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DailySales {
    /// Day key, `YYYY-MM-DD` of the UTC timestamp.
    pub date: String,
    pub sales_cents: i64,
    pub profit_cents: i64,
}

/// Summary derived from a date-filtered ledger scan.
///
/// Absent entirely (the aggregator returns `None`) when no sales fall inside
/// the range; there is never a report with undefined averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SalesReport {
    pub total_sales_cents: i64,
    pub total_profit_cents: i64,
    pub total_transactions: u64,
    /// total_sales / transactions, integer cents (truncating division).
    pub average_transaction_cents: i64,
    /// At most five entries, descending by quantity.
    pub best_selling_products: Vec<BestSeller>,
    /// Ascending by day key.
    pub sales_by_date: Vec<DailySales>,
}

// =============================================================================
// Receipt Payload
// =============================================================================

/// One flattened line on a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: i64,
    pub price_cents: i64,
    pub total_cents: i64,
}

/// The payload handed to the (external) receipt-formatting collaborator
/// after checkout, alongside the current [`CompanyInfo`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReceiptPayload {
    pub order_number: String,
    pub items: Vec<ReceiptLine>,
    pub total_cents: i64,
    #[ts(as = "String")]
    pub timestamp: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, cost: i64, price: i64, inventory: i64) -> Product {
        Product::new(id, format!("Product {}", id), cost, price, inventory)
    }

    #[test]
    fn test_cart_item_math() {
        let item = CartItem::new(product("1", 50, 250, 10), 3);
        assert_eq!(item.line_total().cents(), 750);
        assert_eq!(item.line_profit().cents(), 600);
    }

    #[test]
    fn test_freeze_captures_price_and_cost() {
        let mut p = product("1", 200, 699, 5);
        let line = CartItem::new(p.clone(), 2).freeze();

        // Later catalog edits must not affect the frozen line
        p.price_cents = 999;
        assert_eq!(line.unit_price_cents, 699);
        assert_eq!(line.unit_cost_cents, 200);
        assert_eq!(line.line_total().cents(), 1398);
        assert_eq!(line.line_profit().cents(), 998);
    }

    #[test]
    fn test_sale_totals_consistent() {
        let lines = vec![
            CartItem::new(product("1", 50, 250, 10), 2).freeze(),
            CartItem::new(product("2", 200, 699, 10), 1).freeze(),
        ];
        let sale = Sale {
            id: "C-15-26-1".to_string(),
            total_cents: 1199,
            profit_cents: 899,
            items: lines,
            timestamp: Utc::now(),
            payment_method: PaymentMethod::default(),
        };

        assert!(sale.totals_consistent());

        let tampered = Sale {
            total_cents: 1200,
            ..sale
        };
        assert!(!tampered.totals_consistent());
    }

    #[test]
    fn test_payment_method_defaults_to_cash() {
        assert_eq!(PaymentMethod::default(), PaymentMethod::Cash);

        // Absent field in persisted data must also default to cash
        let json = r#"{
            "id": "C-01-26-1",
            "items": [],
            "totalCents": 0,
            "profitCents": 0,
            "timestamp": "2026-01-01T12:00:00Z"
        }"#;
        let sale: Sale = serde_json::from_str(json).unwrap();
        assert_eq!(sale.payment_method, PaymentMethod::Cash);
    }

    #[test]
    fn test_low_stock_threshold() {
        assert!(product("1", 50, 250, 9).is_low_stock());
        assert!(!product("2", 50, 250, 10).is_low_stock());
    }

    #[test]
    fn test_inventory_value() {
        let p = product("1", 150, 450, 15);
        assert_eq!(p.inventory_value().cents(), 2250);
    }

    #[test]
    fn test_company_info_default_thanks_message() {
        let info = CompanyInfo::default();
        assert_eq!(info.thanks_message, DEFAULT_THANKS_MESSAGE);

        // Partial persisted records fill in defaults
        let partial: CompanyInfo = serde_json::from_str(r#"{"name": "Corner Store"}"#).unwrap();
        assert_eq!(partial.name, "Corner Store");
        assert_eq!(partial.thanks_message, DEFAULT_THANKS_MESSAGE);
    }
}
