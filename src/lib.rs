#![doc(test(attr(deny(warnings))))]

//! Fiscal Core offers the ledger, tax-enrichment, and period-aggregation
//! primitives that power monthly financial reporting front ends.

pub mod config;
pub mod currency;
pub mod errors;
pub mod export;
pub mod ledger;
pub mod report;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Fiscal Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
