//! The persisted ledger structure.

use serde::{Deserialize, Serialize};

use crate::domain::entry::Entry;

/// The full set of recorded expenses plus the configured monthly budget.
///
/// Entries keep insertion order; nothing removes or reorders them. On disk the
/// entry list serialises under the `expenses` key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(rename = "expenses")]
    pub entries: Vec<Entry>,
    pub monthly_budget: f64,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            monthly_budget: 0.0,
        }
    }
}

impl Ledger {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
