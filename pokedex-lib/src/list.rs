use tokio::sync::watch;

use pokedex_api::{CatalogError, CatalogSource, REQUEST_FAILED_MESSAGE};
use pokedex_core::{CatalogPage, DisplayEntry};

use crate::state::{ListState, SearchResults};

/// Incrementally loads catalog pages and accumulates display entries.
///
/// Construction performs no I/O; call [`ListController::load_next_page`]
/// for the first page. Loading takes `&mut self`, so a controller can never
/// have two page requests in flight at once.
pub struct ListController<S> {
    source: S,
    page_size: u32,
    state: ListState,
    tx: watch::Sender<ListState>,
}

impl<S: CatalogSource> ListController<S> {
    /// Create a controller requesting `page_size` entries per page
    /// (at least one).
    pub fn new(source: S, page_size: u32) -> Self {
        let state = ListState::default();
        let (tx, _rx) = watch::channel(state.clone());
        Self {
            source,
            page_size: page_size.max(1),
            state,
            tx,
        }
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Receive a snapshot every time the state changes.
    ///
    /// The receiver starts at the current state.
    pub fn subscribe(&self) -> watch::Receiver<ListState> {
        self.tx.send_replace(self.state.clone());
        self.tx.subscribe()
    }

    /// Request the page at the cursor and fold the result into the state.
    ///
    /// On success the entries are appended, the cursor advances, the error
    /// clears and `end_reached` becomes `cursor * page_size >= count`. On
    /// failure only `load_error` changes, so calling again retries the same
    /// page. An entry without a numeric id fails the whole page.
    ///
    /// Dropping the returned future abandons the request and clears
    /// `is_loading`.
    pub async fn load_next_page(&mut self) -> &ListState {
        let page_size = self.page_size;
        let offset = self.state.cursor.saturating_mul(page_size);

        log::debug!(
            "Loading page {} (limit={}, offset={})",
            self.state.cursor,
            page_size,
            offset
        );

        let mut flag = LoadingFlag::raise(&mut self.state, &self.tx);
        let result = self.source.fetch_page(page_size, offset).await;
        apply_page(&mut *flag.state, page_size, result);
        drop(flag);

        &self.state
    }

    /// Filter the loaded entries by name substring or exact id.
    ///
    /// An empty query leaves search mode and shows every loaded entry
    /// again. The accumulated entries themselves are never touched.
    pub fn search(&mut self, query: &str) -> &ListState {
        let query = query.trim();
        if query.is_empty() {
            self.state.search = None;
        } else {
            self.state.search = Some(SearchResults {
                query: query.to_string(),
                matches: filter_entries(&self.state.entries, query),
            });
        }
        publish(&self.tx, &self.state);
        &self.state
    }
}

/// Holds `is_loading` up while a request is in flight. Dropping it,
/// on completion or cancellation, lowers the flag and publishes.
struct LoadingFlag<'a> {
    state: &'a mut ListState,
    tx: &'a watch::Sender<ListState>,
}

impl<'a> LoadingFlag<'a> {
    fn raise(state: &'a mut ListState, tx: &'a watch::Sender<ListState>) -> Self {
        state.is_loading = true;
        publish(tx, &*state);
        Self { state, tx }
    }
}

impl Drop for LoadingFlag<'_> {
    fn drop(&mut self) {
        self.state.is_loading = false;
        publish(self.tx, &*self.state);
    }
}

fn apply_page(
    state: &mut ListState,
    page_size: u32,
    result: Result<CatalogPage, CatalogError>,
) {
    let page = match result {
        Ok(page) => page,
        Err(e) => {
            log::warn!("Failed to load page {}: {}", state.cursor, e);
            state.load_error = e.message();
            return;
        }
    };

    let entries = match page
        .results
        .iter()
        .map(DisplayEntry::from_raw)
        .collect::<Result<Vec<_>, _>>()
    {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Failed to load page {}: {}", state.cursor, e);
            state.load_error = REQUEST_FAILED_MESSAGE.to_string();
            return;
        }
    };

    let appended = entries.len();
    state.entries.extend(entries);
    state.cursor += 1;
    state.end_reached = u64::from(state.cursor) * u64::from(page_size) >= u64::from(page.count);
    state.load_error.clear();
    if let Some(search) = state.search.as_mut() {
        search.matches = filter_entries(&state.entries, &search.query);
    }

    log::info!(
        "Loaded {} entries ({} of {} total){}",
        appended,
        state.entries.len(),
        page.count,
        if state.end_reached { ", end reached" } else { "" },
    );
}

/// Send a snapshot to subscribers. Skipped when nobody is listening;
/// [`ListController::subscribe`] catches a new receiver up.
fn publish(tx: &watch::Sender<ListState>, state: &ListState) {
    if tx.receiver_count() > 0 {
        tx.send_replace(state.clone());
    }
}

fn filter_entries(entries: &[DisplayEntry], query: &str) -> Vec<DisplayEntry> {
    entries.iter().filter(|e| e.matches(query)).cloned().collect()
}

#[cfg(test)]
#[path = "tests/list_tests.rs"]
mod tests;
