/// Message carried by every failed catalog request.
pub const REQUEST_FAILED_MESSAGE: &str = "Something went wrong!";

/// Errors surfaced by the catalog client.
///
/// Request failures are deliberately opaque: transport errors, HTTP error
/// statuses and malformed payloads all become [`CatalogError::RequestFailed`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("{}", REQUEST_FAILED_MESSAGE)]
    RequestFailed,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// User-facing message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }
}
