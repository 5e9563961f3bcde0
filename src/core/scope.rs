//! Fee-schedule totals for proposal scope items.

use crate::core::config::ScopeItem;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScopeTotals {
    pub total_hours: f64,
    pub total_cost: f64,
}

/// Fee for a single line item.
pub fn item_cost(item: &ScopeItem) -> f64 {
    item.default_hours * item.rate_per_hour
}

/// Sums hours and fees over an already-selected list of scope items, in
/// list order. The caller is responsible for filtering to the in-scope
/// subset (required items plus client selections) and for rejecting
/// malformed items; this function only accumulates.
pub fn scope_totals(items: &[ScopeItem]) -> ScopeTotals {
    let mut totals = ScopeTotals {
        total_hours: 0.0,
        total_cost: 0.0,
    };
    for item in items {
        totals.total_hours += item.default_hours;
        totals.total_cost += item_cost(item);
    }
    totals
}
