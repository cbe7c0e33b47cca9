pub mod client;
pub mod config;
pub mod error;
pub mod source;
pub mod types;

pub use client::PokeApiClient;
pub use config::{
    ClientConfig, ConfigSource, ConfigSources, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, config_path,
    config_sources, save_to_file,
};
pub use error::{CatalogError, REQUEST_FAILED_MESSAGE};
pub use source::CatalogSource;
