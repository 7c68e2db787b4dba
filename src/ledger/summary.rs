use chrono::TimeZone;
use serde::Serialize;

use super::{
    ledger::Ledger,
    transaction::{Motive, Transaction},
    window::{MonthKey, TimeWindow},
};

/// Per-motive tallies over spend entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MotiveCounts {
    pub needs: usize,
    pub emotion: usize,
    pub social: usize,
    pub unknown: usize,
}

impl MotiveCounts {
    pub fn get(&self, motive: Motive) -> usize {
        match motive {
            Motive::Needs => self.needs,
            Motive::Emotion => self.emotion,
            Motive::Social => self.social,
            Motive::Unknown => self.unknown,
        }
    }

    fn increment(&mut self, motive: Motive) {
        match motive {
            Motive::Needs => self.needs += 1,
            Motive::Emotion => self.emotion += 1,
            Motive::Social => self.social += 1,
            Motive::Unknown => self.unknown += 1,
        }
    }
}

/// Aggregate of a set of ledger entries, partitioned by the intercepted flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct LedgerSummary {
    pub spend_total: f64,
    pub intercepted_total: f64,
    pub spend_count: usize,
    pub intercepted_count: usize,
    pub motive_counts: MotiveCounts,
    /// Most frequent motive among spends. Ties go to the earlier motive in
    /// [`Motive::ALL`] order, whatever order the entries were logged in; `None` when
    /// there were no spends.
    pub top_motive: Option<Motive>,
}

impl LedgerSummary {
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = LedgerSummary::default();

        for entry in entries {
            if entry.is_intercepted {
                summary.intercepted_total += entry.counted_amount();
                summary.intercepted_count += 1;
                continue;
            }
            summary.spend_total += entry.counted_amount();
            summary.spend_count += 1;
            summary.motive_counts.increment(entry.motive);
        }

        if summary.spend_count > 0 {
            let counts = summary.motive_counts;
            summary.top_motive = Motive::ALL.into_iter().fold(None, |best, motive| match best {
                Some(current) if counts.get(current) >= counts.get(motive) => Some(current),
                _ => Some(motive),
            });
        }
        summary
    }

    pub fn is_empty(&self) -> bool {
        self.spend_count == 0 && self.intercepted_count == 0
    }
}

impl Ledger {
    /// Summary of entries whose local month (in `tz`) equals `month`.
    pub fn summarize_month<Tz: TimeZone>(&self, month: MonthKey, tz: &Tz) -> LedgerSummary {
        LedgerSummary::from_entries(
            self.iter()
                .filter(|entry| MonthKey::of(&entry.timestamp, tz) == month),
        )
    }

    pub fn summarize_window(&self, window: &TimeWindow) -> LedgerSummary {
        LedgerSummary::from_entries(self.iter().filter(|entry| window.contains(&entry.timestamp)))
    }

    /// Money actually spent inside `window`; intercepted entries are excluded.
    pub fn spent_in(&self, window: &TimeWindow) -> f64 {
        self.iter()
            .filter(|entry| !entry.is_intercepted && window.contains(&entry.timestamp))
            .map(Transaction::counted_amount)
            .sum()
    }

    /// All-time money preserved by intercepted purchases.
    pub fn preserved_total(&self) -> f64 {
        self.iter()
            .filter(|entry| entry.is_intercepted)
            .map(Transaction::counted_amount)
            .sum()
    }
}
