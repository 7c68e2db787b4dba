use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    compass::{StoredProfile, UserProfile},
    errors::StorageError,
    ledger::{Ledger, Transaction},
};

use super::{CompassStore, LedgerChange, LedgerObserver, ObserverRegistry, Result, SubscriptionId};

#[derive(Default)]
struct MemoryState {
    profile: Option<StoredProfile>,
    ledger: Ledger,
}

/// In-process store. Snapshots live only as long as the value.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
    observers: ObserverRegistry,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> Result<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|err| StorageError::Poisoned(err.to_string()))
    }
}

impl CompassStore for MemoryStore {
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        Ok(self.state()?.profile.clone().and_then(StoredProfile::resolve))
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.state()?.profile = Some(profile.to_stored());
        Ok(())
    }

    fn clear_profile(&self) -> Result<()> {
        self.state()?.profile = None;
        Ok(())
    }

    fn load_ledger(&self) -> Result<Ledger> {
        Ok(self.state()?.ledger.clone())
    }

    fn append_transaction(&self, transaction: Transaction) -> Result<LedgerChange> {
        let change = {
            let mut state = self.state()?;
            let id = transaction.id;
            state.ledger.record(transaction);
            LedgerChange::Appended {
                id,
                len: state.ledger.len(),
            }
        };
        self.observers.notify(&change);
        Ok(change)
    }

    fn clear_ledger(&self) -> Result<LedgerChange> {
        self.state()?.ledger = Ledger::new();
        let change = LedgerChange::Cleared;
        self.observers.notify(&change);
        Ok(change)
    }

    fn subscribe(&self, observer: Arc<dyn LedgerObserver>) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }
}
