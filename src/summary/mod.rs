//! Pure aggregation over the in-memory ledger. No side effects, no failure
//! modes; sums over an empty ledger are zero.

use std::collections::HashMap;

use crate::domain::{Category, Ledger};

pub struct SummaryService;

impl SummaryService {
    /// Sums amounts grouped by category. Categories with no entries are
    /// absent from the result, not zero.
    pub fn category_totals(ledger: &Ledger) -> HashMap<Category, f64> {
        let mut totals = HashMap::new();
        for entry in &ledger.entries {
            *totals.entry(entry.category).or_insert(0.0) += entry.amount;
        }
        totals
    }

    /// Totals lifetime spending against the configured monthly budget.
    pub fn budget_status(ledger: &Ledger) -> BudgetStatus {
        let total_spent = ledger.entries.iter().map(|entry| entry.amount).sum();
        BudgetStatus {
            monthly_budget: ledger.monthly_budget,
            total_spent,
            remaining: ledger.monthly_budget - total_spent,
        }
    }
}

/// Spending position against the monthly budget. A negative `remaining`
/// signals overspend; it is a normal output value, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStatus {
    pub monthly_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
}

impl BudgetStatus {
    pub fn over_budget(&self) -> bool {
        self.remaining < 0.0
    }
}
