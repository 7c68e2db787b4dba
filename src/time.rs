use chrono::{DateTime, FixedOffset, Local, Offset, Utc};

/// Clock abstracts access to the current timestamp so derivations remain deterministic in tests.
pub trait Clock: Send + Sync {
    /// Returns the current UTC timestamp.
    fn now(&self) -> DateTime<Utc>;

    /// Offset used to resolve local calendar days and months.
    fn offset(&self) -> FixedOffset;
}

/// Wall clock backed by the host's local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset(&self) -> FixedOffset {
        *Local::now().offset()
    }
}

/// Clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl FixedClock {
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self {
            now,
            offset: utc_offset(),
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn offset(&self) -> FixedOffset {
        self.offset
    }
}

/// Zero offset, used whenever no local zone is known.
pub fn utc_offset() -> FixedOffset {
    Utc.fix()
}
