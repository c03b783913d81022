//! # Report Aggregator
//!
//! Derives sales summaries from a date-filtered ledger scan. Reports are
//! computed on demand and never persisted; the ledger is the only source.
//!
//! ## Aggregation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Report Pipeline                                     │
//! │                                                                         │
//! │  DateRange ──► inclusive bounds (00:00:00.000 – 23:59:59.999 UTC)      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ledger scan ──► sales with start ≤ timestamp ≤ end                    │
//! │       │                                                                 │
//! │       ├── no sales? → None (never a report with undefined averages)    │
//! │       │                                                                 │
//! │       ├── totals: Σ total_cents, Σ profit_cents, count                 │
//! │       ├── average: total / count (truncating cent division)            │
//! │       ├── best sellers: qty per product id, top 5, stable order        │
//! │       └── sales by date: per-day totals, ascending day key             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Day keys use the `YYYY-MM-DD` rendering of the UTC timestamp, the same
//! truncation rule the order sequencer uses.

use std::collections::BTreeMap;
use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use meridian_core::{BestSeller, DailySales, Sale, SalesReport, BEST_SELLERS_LIMIT};

use crate::ledger::LedgerStore;

// =============================================================================
// Date Range
// =============================================================================

/// An inclusive calendar-day range, interpreted in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateRange { start, end }
    }

    /// A range covering a single day.
    pub fn single_day(day: NaiveDate) -> Self {
        DateRange {
            start: day,
            end: day,
        }
    }

    /// Inclusive timestamp bounds: start-of-day on `start` through the last
    /// representable millisecond of `end`.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        let start = NaiveDateTime::new(self.start, NaiveTime::MIN).and_utc();
        let end = (NaiveDateTime::new(self.end, NaiveTime::MIN) + Duration::days(1)
            - Duration::milliseconds(1))
        .and_utc();
        (start, end)
    }

    /// Whether `timestamp` falls inside the range, inclusive on both ends.
    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        let (start, end) = self.bounds();
        timestamp >= start && timestamp <= end
    }
}

// =============================================================================
// Aggregator
// =============================================================================

/// On-demand report computation over the sales ledger.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    ledger: LedgerStore,
}

impl ReportAggregator {
    pub fn new(ledger: LedgerStore) -> Self {
        ReportAggregator { ledger }
    }

    /// Builds a sales report for the range, or `None` when no sales fall
    /// inside it.
    pub fn sales_report(&self, range: DateRange) -> Option<SalesReport> {
        let sales: Vec<Sale> = self
            .ledger
            .list()
            .into_iter()
            .filter(|s| range.contains(s.timestamp))
            .collect();

        if sales.is_empty() {
            return None;
        }

        let total_sales_cents: i64 = sales.iter().map(|s| s.total_cents).sum();
        let total_profit_cents: i64 = sales.iter().map(|s| s.profit_cents).sum();
        let total_transactions = sales.len() as u64;
        let average_transaction_cents = total_sales_cents / total_transactions as i64;

        Some(SalesReport {
            total_sales_cents,
            total_profit_cents,
            total_transactions,
            average_transaction_cents,
            best_selling_products: best_sellers(&sales),
            sales_by_date: sales_by_date(&sales),
        })
    }
}

/// Ranks products by summed quantity, descending, at most
/// [`BEST_SELLERS_LIMIT`] entries.
///
/// Entries keep first-appearance order among equal quantities (stable sort),
/// so reruns over the same ledger always rank identically.
fn best_sellers(sales: &[Sale]) -> Vec<BestSeller> {
    let mut ranking: Vec<BestSeller> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for sale in sales {
        for line in &sale.items {
            match index.get(line.product_id.as_str()) {
                Some(&slot) => ranking[slot].quantity += line.quantity,
                None => {
                    index.insert(&line.product_id, ranking.len());
                    ranking.push(BestSeller {
                        product_id: line.product_id.clone(),
                        name: line.name.clone(),
                        unit_price_cents: line.unit_price_cents,
                        quantity: line.quantity,
                    });
                }
            }
        }
    }

    ranking.sort_by(|a, b| b.quantity.cmp(&a.quantity));
    ranking.truncate(BEST_SELLERS_LIMIT);
    ranking
}

/// Per-day totals, ascending by day key. BTreeMap gives the ordering.
fn sales_by_date(sales: &[Sale]) -> Vec<DailySales> {
    let mut days: BTreeMap<String, DailySales> = BTreeMap::new();

    for sale in sales {
        let key = sale.timestamp.format("%Y-%m-%d").to_string();
        let entry = days.entry(key.clone()).or_insert_with(|| DailySales {
            date: key,
            sales_cents: 0,
            profit_cents: 0,
        });
        entry.sales_cents += sale.total_cents;
        entry.profit_cents += sale.profit_cents;
    }

    days.into_values().collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blob::BlobStore;
    use chrono::TimeZone;
    use meridian_core::{CartItem, PaymentMethod, Product};

    fn aggregator() -> (tempfile::TempDir, LedgerStore, ReportAggregator) {
        let dir = tempfile::tempdir().unwrap();
        let ledger = LedgerStore::new(BlobStore::new(dir.path()));
        let reports = ReportAggregator::new(ledger.clone());
        (dir, ledger, reports)
    }

    fn sale_at(
        id: &str,
        product_id: &str,
        cost: i64,
        price: i64,
        qty: i64,
        timestamp: DateTime<Utc>,
    ) -> Sale {
        let product = Product::new(product_id, format!("Product {}", product_id), cost, price, 10);
        let line = CartItem::new(product, qty).freeze();
        Sale {
            id: id.to_string(),
            total_cents: line.line_total().cents(),
            profit_cents: line.line_profit().cents(),
            items: vec![line],
            timestamp,
            payment_method: PaymentMethod::Cash,
        }
    }

    fn march(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn test_empty_range_yields_none() {
        let (_dir, _ledger, reports) = aggregator();
        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        assert!(reports.sales_report(range).is_none());
    }

    #[test]
    fn test_totals_and_average() {
        let (_dir, ledger, reports) = aggregator();
        // $10 sale with $3 profit, $20 sale with $4 profit
        ledger
            .append(sale_at("s1", "a", 700, 1000, 1, march(15, 10)))
            .unwrap();
        ledger
            .append(sale_at("s2", "b", 1600, 2000, 1, march(15, 11)))
            .unwrap();

        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        let report = reports.sales_report(range).unwrap();

        assert_eq!(report.total_sales_cents, 3000);
        assert_eq!(report.total_profit_cents, 700);
        assert_eq!(report.total_transactions, 2);
        assert_eq!(report.average_transaction_cents, 1500);
    }

    #[test]
    fn test_average_truncates() {
        let (_dir, ledger, reports) = aggregator();
        ledger
            .append(sale_at("s1", "a", 0, 1000, 1, march(15, 10)))
            .unwrap();
        ledger
            .append(sale_at("s2", "a", 0, 1000, 1, march(15, 11)))
            .unwrap();
        ledger
            .append(sale_at("s3", "a", 0, 1001, 1, march(15, 12)))
            .unwrap();

        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        let report = reports.sales_report(range).unwrap();

        // 3001 / 3 = 1000 remainder 1, remainder dropped
        assert_eq!(report.average_transaction_cents, 1000);
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let (_dir, ledger, reports) = aggregator();
        let first_ms = Utc.with_ymd_and_hms(2026, 3, 15, 0, 0, 0).unwrap();
        let last_ms = Utc
            .with_ymd_and_hms(2026, 3, 15, 23, 59, 59)
            .unwrap()
            .checked_add_signed(Duration::milliseconds(999))
            .unwrap();
        let next_day = Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap();

        ledger
            .append(sale_at("s1", "a", 0, 100, 1, first_ms))
            .unwrap();
        ledger
            .append(sale_at("s2", "a", 0, 100, 1, last_ms))
            .unwrap();
        ledger
            .append(sale_at("s3", "a", 0, 100, 1, next_day))
            .unwrap();

        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        let report = reports.sales_report(range).unwrap();
        assert_eq!(report.total_transactions, 2);
    }

    #[test]
    fn test_best_sellers_capped_and_stable() {
        let (_dir, ledger, reports) = aggregator();
        // Six products; "p0" and "p1" tie on quantity
        for (i, qty) in [(0, 5), (1, 5), (2, 9), (3, 2), (4, 1), (5, 1)] {
            let id = format!("p{}", i);
            ledger
                .append(sale_at(&format!("s{}", i), &id, 0, 100, qty, march(15, 10)))
                .unwrap();
        }

        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        let report = reports.sales_report(range).unwrap();

        let ids: Vec<&str> = report
            .best_selling_products
            .iter()
            .map(|b| b.product_id.as_str())
            .collect();
        assert_eq!(ids.len(), BEST_SELLERS_LIMIT);
        // p2 leads; tied p0/p1 keep first-seen order; then p3, then first of the 1s
        assert_eq!(ids, vec!["p2", "p0", "p1", "p3", "p4"]);
    }

    #[test]
    fn test_best_sellers_sum_across_sales() {
        let (_dir, ledger, reports) = aggregator();
        ledger
            .append(sale_at("s1", "a", 0, 100, 2, march(15, 10)))
            .unwrap();
        ledger
            .append(sale_at("s2", "a", 0, 100, 3, march(15, 11)))
            .unwrap();

        let range = DateRange::single_day(NaiveDate::from_ymd_opt(2026, 3, 15).unwrap());
        let report = reports.sales_report(range).unwrap();

        assert_eq!(report.best_selling_products.len(), 1);
        assert_eq!(report.best_selling_products[0].quantity, 5);
    }

    #[test]
    fn test_sales_by_date_ascending() {
        let (_dir, ledger, reports) = aggregator();
        ledger
            .append(sale_at("s1", "a", 0, 200, 1, march(16, 10)))
            .unwrap();
        ledger
            .append(sale_at("s2", "a", 0, 100, 1, march(15, 10)))
            .unwrap();
        ledger
            .append(sale_at("s3", "a", 0, 300, 1, march(16, 12)))
            .unwrap();

        let range = DateRange::new(
            NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 16).unwrap(),
        );
        let report = reports.sales_report(range).unwrap();

        assert_eq!(report.sales_by_date.len(), 2);
        assert_eq!(report.sales_by_date[0].date, "2026-03-15");
        assert_eq!(report.sales_by_date[0].sales_cents, 100);
        assert_eq!(report.sales_by_date[1].date, "2026-03-16");
        assert_eq!(report.sales_by_date[1].sales_cents, 500);
    }
}
