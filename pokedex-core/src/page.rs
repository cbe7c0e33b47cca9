use serde::{Deserialize, Serialize};

/// One page of the remote catalog listing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Total number of entries in the catalog, as reported by this page.
    pub count: u32,
    /// Entries on this page, in server order.
    #[serde(default)]
    pub results: Vec<RawEntry>,
}

/// A catalog entry as listed by the API. The URL's trailing path segment
/// carries the numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub name: String,
    pub url: String,
}

impl RawEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
