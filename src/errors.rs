use thiserror::Error;

/// Unified error type for ledger validation and persistence failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
    #[error("Invalid budget: {0}")]
    InvalidBudget(String),
    #[error("Ledger file is corrupt: {0}")]
    CorruptLedger(String),
    #[error("Persistence error: {0}")]
    Storage(String),
}

pub type Result<T> = std::result::Result<T, ExpenseError>;

impl From<std::io::Error> for ExpenseError {
    fn from(err: std::io::Error) -> Self {
        ExpenseError::Storage(err.to_string())
    }
}
