//! Pure domain models (Ledger, Entry, Category).
//! No I/O, no CLI, no storage. Only data types.

pub mod entry;
pub mod ledger;

pub use entry::{Category, Entry};
pub use ledger::Ledger;
