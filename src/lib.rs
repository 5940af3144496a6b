#![doc(test(attr(deny(warnings))))]

//! Spendlog records dated, categorised expenses in a single JSON ledger and
//! reports spending against a configured monthly budget.

pub mod cli;
pub mod domain;
pub mod errors;
pub mod store;
pub mod summary;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("spendlog=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Spendlog tracing initialized.");
    });
}
