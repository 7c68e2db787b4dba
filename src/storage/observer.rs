use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex, PoisonError,
};

use uuid::Uuid;

/// What happened to the ledger. Consumers re-read the ledger after any change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerChange {
    Appended { id: Uuid, len: usize },
    Cleared,
}

/// Receives ledger change notifications.
pub trait LedgerObserver: Send + Sync {
    fn ledger_changed(&self, change: &LedgerChange);
}

impl<F> LedgerObserver for F
where
    F: Fn(&LedgerChange) + Send + Sync,
{
    fn ledger_changed(&self, change: &LedgerChange) {
        self(change)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscribers = Vec<(SubscriptionId, Arc<dyn LedgerObserver>)>;

/// Subscriber list shared by the store implementations.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    observers: Mutex<Subscribers>,
}

impl ObserverRegistry {
    pub fn subscribe(&self, observer: Arc<dyn LedgerObserver>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.lock().push((id, observer));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = self.lock();
        let before = observers.len();
        observers.retain(|(existing, _)| *existing != id);
        observers.len() != before
    }

    pub fn notify(&self, change: &LedgerChange) {
        // Snapshot so observers may subscribe or unsubscribe from inside the callback.
        let observers: Vec<_> = self
            .lock()
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        tracing::debug!(?change, observers = observers.len(), "ledger changed");
        for observer in observers {
            observer.ledger_changed(change);
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Subscribers> {
        self.observers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
