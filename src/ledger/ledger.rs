use serde::{Deserialize, Serialize};

use super::transaction::Transaction;

const CURRENT_SCHEMA_VERSION: u8 = 1;

/// Ordered sequence of transactions, newest first. Entries are never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default = "Ledger::schema_version_default")]
    pub schema_version: u8,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Wraps an already newest-first sequence.
    pub fn from_newest_first(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            schema_version: CURRENT_SCHEMA_VERSION,
        }
    }

    /// Records `transaction` as the newest entry.
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn newest(&self) -> Option<&Transaction> {
        self.transactions.first()
    }

    pub fn schema_version_default() -> u8 {
        CURRENT_SCHEMA_VERSION
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Motive;
    use chrono::{TimeZone, Utc};

    #[test]
    fn record_puts_newest_first() {
        let mut ledger = Ledger::new();
        let day = |d| Utc.with_ymd_and_hms(2024, 1, d, 8, 0, 0).unwrap();
        let older = Transaction::new(10.0, Motive::Needs, day(1));
        let newer = Transaction::new(20.0, Motive::Social, day(2));
        ledger.record(older.clone());
        ledger.record(newer.clone());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.newest(), Some(&newer));
        assert_eq!(ledger.transactions[1], older);
    }

    #[test]
    fn empty_snapshot_deserializes() {
        let ledger: Ledger = serde_json::from_str("{}").unwrap();
        assert!(ledger.is_empty());
        assert_eq!(ledger.schema_version, 1);
    }
}
