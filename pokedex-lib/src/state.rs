use pokedex_core::DisplayEntry;

/// Observable state of a [`crate::ListController`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    /// Every entry loaded so far, in fetch order. Only ever appended to.
    pub entries: Vec<DisplayEntry>,
    /// Zero-based index of the next page to request.
    pub cursor: u32,
    /// A page request is in flight.
    pub is_loading: bool,
    /// No further pages exist, per the last reported total.
    pub end_reached: bool,
    /// Message of the last failed load; empty when the last load succeeded.
    pub load_error: String,
    /// Active search query and its matches, if search mode is on.
    pub search: Option<SearchResults>,
}

/// Entries matching a search query, in accumulation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResults {
    pub query: String,
    pub matches: Vec<DisplayEntry>,
}

impl ListState {
    pub fn is_searching(&self) -> bool {
        self.search.is_some()
    }

    pub fn has_error(&self) -> bool {
        !self.load_error.is_empty()
    }

    /// Entries a list view should show: search matches in search mode,
    /// otherwise everything loaded.
    pub fn visible(&self) -> &[DisplayEntry] {
        match &self.search {
            Some(results) => &results.matches,
            None => &self.entries,
        }
    }

    /// Whether a caller should request another page.
    ///
    /// Not enforced by the controller itself.
    pub fn can_load_more(&self) -> bool {
        !self.is_loading && !self.end_reached && !self.is_searching()
    }
}
