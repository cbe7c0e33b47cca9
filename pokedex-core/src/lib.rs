//! Domain records and pure derivations for the Pokédex catalog.
//!
//! Nothing in this crate performs I/O. The API crate fills these records
//! from JSON and the list controller turns them into display entries.

pub mod detail;
pub mod entry;
pub mod error;
pub mod page;

pub use detail::{BaseStat, ItemDetail, stat_abbreviation};
pub use entry::{DisplayEntry, SPRITE_URL_PREFIX, capitalize, extract_id, sprite_url};
pub use error::EntryError;
pub use page::{CatalogPage, RawEntry};
