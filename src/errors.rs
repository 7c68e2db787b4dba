use thiserror::Error;

/// Failures raised by the storage collaborator.
///
/// The estimation core itself has no error type: every derivation is total.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Store lock poisoned: {0}")]
    Poisoned(String),
}

/// Failures raised while loading or saving [`crate::config::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Failures surfaced by the command-line front end. Rendered as `Error: <message>`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("unknown command `{0}`, run `help` to list commands")]
    UnknownCommand(String),

    #[error("could not read `{0}` as an amount")]
    InvalidAmount(String),

    #[error("{0}")]
    InvalidValue(String),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),
}
