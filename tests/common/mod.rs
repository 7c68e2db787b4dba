#![allow(dead_code)]

use calm_compass::{
    compass::{NumericRange, UserProfile},
    config::ConfigManager,
    storage::JsonStore,
};
use tempfile::TempDir;

/// Isolated store and config rooted in a fresh temp dir. Keep the guard alive for the
/// duration of the test.
pub fn setup_test_env() -> (TempDir, JsonStore, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    let config = ConfigManager::with_base_dir(base.clone()).expect("create config manager");
    let store = JsonStore::new(base.join("store")).expect("create json store");
    (temp, store, config)
}

pub fn profile(safety_net: (f64, f64), monthly_spend: (f64, f64)) -> UserProfile {
    UserProfile::new(
        NumericRange::new(safety_net.0, safety_net.1),
        NumericRange::new(monthly_spend.0, monthly_spend.1),
    )
}
