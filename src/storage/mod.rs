//! Storage collaborator: where the profile and ledger snapshots live.
//!
//! The estimation core never touches storage; callers load a snapshot through a
//! [`CompassStore`] and hand it to the pure derivations.

pub mod json_backend;
pub mod memory;
pub mod observer;

use std::sync::Arc;

use crate::{
    compass::UserProfile,
    errors::StorageError,
    ledger::{Ledger, Transaction},
};

pub use json_backend::JsonStore;
pub use memory::MemoryStore;
pub use observer::{LedgerChange, LedgerObserver, ObserverRegistry, SubscriptionId};

pub type Result<T> = std::result::Result<T, StorageError>;

/// Abstraction over persistence backends holding one profile and one ledger.
pub trait CompassStore: Send + Sync {
    /// `None` when no usable profile has been saved yet.
    fn load_profile(&self) -> Result<Option<UserProfile>>;
    /// Replaces any stored profile wholesale.
    fn save_profile(&self, profile: &UserProfile) -> Result<()>;
    fn clear_profile(&self) -> Result<()>;

    /// Newest-first ledger snapshot.
    fn load_ledger(&self) -> Result<Ledger>;
    /// Records `transaction` as the newest entry and notifies subscribers.
    fn append_transaction(&self, transaction: Transaction) -> Result<LedgerChange>;
    /// Drops every entry and notifies subscribers.
    fn clear_ledger(&self) -> Result<LedgerChange>;

    fn subscribe(&self, observer: Arc<dyn LedgerObserver>) -> SubscriptionId;
    fn unsubscribe(&self, id: SubscriptionId) -> bool;
}
