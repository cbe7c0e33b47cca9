//! Paginated catalog browsing on top of any [`CatalogSource`].
//!
//! [`ListController`] accumulates pages of display entries and exposes its
//! loading, end-of-data, error and search state as [`ListState`] snapshots.

pub mod detail;
pub mod list;
pub mod state;

pub use detail::load_detail;
pub use list::ListController;
pub use state::ListState;

// Re-export so frontends only need this crate
pub use pokedex_api::{
    CatalogError, CatalogSource, ClientConfig, PokeApiClient, REQUEST_FAILED_MESSAGE,
};
pub use pokedex_core::{DisplayEntry, ItemDetail};
