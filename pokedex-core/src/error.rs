use thiserror::Error;

/// Errors raised while deriving a display entry from a raw catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The trailing path segment of an entry URL is not a decimal id.
    #[error("Invalid entry URL '{url}': '{segment}' is not a numeric id")]
    InvalidId { url: String, segment: String },
}
