use crate::{
    compass::{NumericRange, SpendView},
    config::{Config, ConfigManager},
    errors::CliError,
    estimate::EvaluationContext,
    format::{format_money_grouped, format_money_range},
    storage::{CompassStore, JsonStore},
    time::{Clock, SystemClock},
};

/// Everything a command handler needs: the store, user preferences and a clock.
pub struct CliContext {
    pub store: Box<dyn CompassStore>,
    pub config: Config,
    pub clock: Box<dyn Clock>,
}

impl CliContext {
    pub fn new(store: Box<dyn CompassStore>, config: Config, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            config,
            clock,
        }
    }

    /// Opens the JSON store under the configured base directory with the wall clock.
    pub fn from_env() -> Result<Self, CliError> {
        let manager = ConfigManager::new()?;
        let config = manager.load()?;
        let store = JsonStore::new(manager.store_dir(&config))?;
        tracing::debug!(root = %store.root().display(), "opened store");
        Ok(Self::new(Box::new(store), config, Box::new(SystemClock)))
    }

    pub fn evaluation(&self, view: SpendView) -> EvaluationContext {
        EvaluationContext::from_clock(self.clock.as_ref(), view)
    }

    pub fn money(&self, value: f64) -> String {
        format_money_grouped(
            value,
            &self.config.currency_symbol,
            self.config.grouping_separator(),
        )
    }

    pub fn money_range(&self, range: &NumericRange) -> String {
        format_money_range(
            range,
            &self.config.currency_symbol,
            self.config.grouping_separator(),
        )
    }
}
