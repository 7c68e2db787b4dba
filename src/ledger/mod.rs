//! Transaction ledger (read side): entries, time windows and aggregation.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod summary;
pub mod transaction;
pub mod window;

pub use ledger::Ledger;
pub use summary::{LedgerSummary, MotiveCounts};
pub use transaction::{Motive, Transaction};
pub use window::{days_left_in_month, MonthKey, TimeWindow};
