use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Catalog request or configuration failed
    #[error("{0}")]
    Catalog(#[from] pokedex_api::CatalogError),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),

    /// A page could not be loaded, even after retrying
    #[error("Load failed: {0}")]
    Load(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }

    pub(crate) fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }
}
