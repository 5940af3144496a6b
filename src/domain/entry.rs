//! Domain types representing recorded expenses.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ExpenseError;

/// Fixed set of spending categories.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Travel,
    Rent,
    Shopping,
    Utilities,
    Entertainment,
    Health,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Travel,
        Category::Rent,
        Category::Shopping,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Rent => "Rent",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ExpenseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim();
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ExpenseError::InvalidEntry(format!("unknown category `{value}`")))
    }
}

/// One recorded expense. Immutable once appended to a ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Entry {
    pub date: NaiveDate,
    pub description: String,
    pub category: Category,
    pub amount: f64,
}

impl Entry {
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        category: Category,
        amount: f64,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            category,
            amount,
        }
    }

    /// Checks the invariants enforced at the append boundary: a non-empty
    /// description and a non-negative, finite amount.
    pub fn validate(&self) -> Result<(), ExpenseError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseError::InvalidEntry(
                "description cannot be empty".into(),
            ));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(ExpenseError::InvalidEntry(format!(
                "amount must be non-negative, got {}",
                self.amount
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry(description: &str, amount: f64) -> Entry {
        Entry::new(
            NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            description,
            Category::Food,
            amount,
        )
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" Travel ".parse::<Category>().unwrap(), Category::Travel);
        assert_eq!("UTILITIES".parse::<Category>().unwrap(), Category::Utilities);
    }

    #[test]
    fn unknown_category_is_rejected() {
        let err = "groceries".parse::<Category>().expect_err("must fail");
        assert!(
            matches!(err, ExpenseError::InvalidEntry(ref message) if message.contains("groceries")),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn category_serializes_as_bare_name() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"Entertainment\"");
    }

    #[test]
    fn blank_description_fails_validation() {
        let err = sample_entry("   ", 10.0).validate().expect_err("must fail");
        assert!(matches!(err, ExpenseError::InvalidEntry(_)));
    }

    #[test]
    fn negative_amount_fails_validation() {
        let err = sample_entry("lunch", -1.0).validate().expect_err("must fail");
        assert!(matches!(err, ExpenseError::InvalidEntry(_)));
    }

    #[test]
    fn non_finite_amount_fails_validation() {
        assert!(sample_entry("lunch", f64::NAN).validate().is_err());
        assert!(sample_entry("lunch", f64::INFINITY).validate().is_err());
    }

    #[test]
    fn zero_amount_is_valid() {
        sample_entry("freebie", 0.0).validate().expect("zero is allowed");
    }
}
