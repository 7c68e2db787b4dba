#![doc(test(attr(deny(warnings))))]

//! Calm Compass turns coarse, uncertain personal-finance ranges into a handful of
//! stable, bounded display metrics: runway months, daily freedom, milestone
//! progress and the two-sided rerouting tradeoff after an unplanned expense.

pub mod cli;
pub mod compass;
pub mod config;
pub mod errors;
pub mod estimate;
pub mod format;
pub mod ledger;
pub mod parse;
pub mod storage;
pub mod time;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Calm Compass tracing initialized.");
    });
}
