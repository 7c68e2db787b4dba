use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    compass::{StoredProfile, UserProfile},
    ledger::{Ledger, Transaction},
    utils::paths::{ensure_dir, write_atomic},
};

use super::{CompassStore, LedgerChange, LedgerObserver, ObserverRegistry, Result, SubscriptionId};

const PROFILE_FILE: &str = "profile.json";
const LEDGER_FILE: &str = "ledger.json";

/// Directory-backed store: `profile.json` and `ledger.json` under one root.
///
/// Writes stage to a temporary file and rename into place. An unreadable snapshot is
/// logged and treated as absent.
pub struct JsonStore {
    root: PathBuf,
    profile_path: PathBuf,
    ledger_path: PathBuf,
    observers: ObserverRegistry,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self {
            profile_path: root.join(PROFILE_FILE),
            ledger_path: root.join(LEDGER_FILE),
            root,
            observers: ObserverRegistry::default(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn profile_path(&self) -> &Path {
        &self.profile_path
    }

    pub fn ledger_path(&self) -> &Path {
        &self.ledger_path
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<()> {
        write_json(&self.ledger_path, ledger)
    }
}

impl CompassStore for JsonStore {
    fn load_profile(&self) -> Result<Option<UserProfile>> {
        let stored: Option<StoredProfile> = read_json(&self.profile_path)?;
        Ok(stored.and_then(StoredProfile::resolve))
    }

    fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        write_json(&self.profile_path, &profile.to_stored())
    }

    fn clear_profile(&self) -> Result<()> {
        remove_if_exists(&self.profile_path)
    }

    fn load_ledger(&self) -> Result<Ledger> {
        Ok(read_json(&self.ledger_path)?.unwrap_or_default())
    }

    fn append_transaction(&self, transaction: Transaction) -> Result<LedgerChange> {
        let mut ledger = self.load_ledger()?;
        let id = transaction.id;
        ledger.record(transaction);
        self.save_ledger(&ledger)?;
        let change = LedgerChange::Appended {
            id,
            len: ledger.len(),
        };
        self.observers.notify(&change);
        Ok(change)
    }

    fn clear_ledger(&self) -> Result<LedgerChange> {
        remove_if_exists(&self.ledger_path)?;
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

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let data = fs::read_to_string(path)?;
    match serde_json::from_str(&data) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring unreadable snapshot");
            Ok(None)
        }
    }
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    write_atomic(path, &json)?;
    Ok(())
}

fn remove_if_exists(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{compass::NumericRange, ledger::Motive};
    use crate::utils::paths::tmp_path;
    use chrono::Utc;
    use tempfile::tempdir;

    #[test]
    fn corrupt_snapshots_load_as_absent() {
        let dir = tempdir().expect("tempdir");
        let store = JsonStore::new(dir.path()).expect("store");
        fs::write(store.profile_path(), "{not json").unwrap();
        fs::write(store.ledger_path(), "[1, 2").unwrap();
        assert!(store.load_profile().unwrap().is_none());
        assert!(store.load_ledger().unwrap().is_empty());
    }

    #[test]
    fn persists_between_instances() {
        let dir = tempdir().expect("tempdir");
        let profile = UserProfile::new(
            NumericRange::new(20_000.0, 40_000.0),
            NumericRange::new(6_000.0, 10_000.0),
        );
        let tx = Transaction::new(12.0, Motive::Emotion, Utc::now());
        {
            let store = JsonStore::new(dir.path()).expect("store");
            store.save_profile(&profile).unwrap();
            store.append_transaction(tx.clone()).unwrap();
        }
        let reopened = JsonStore::new(dir.path()).expect("store");
        assert_eq!(reopened.load_profile().unwrap(), Some(profile));
        assert_eq!(reopened.load_ledger().unwrap().transactions, vec![tx]);
        assert!(!tmp_path(reopened.ledger_path()).exists());
    }
}
