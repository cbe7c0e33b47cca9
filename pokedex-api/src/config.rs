use std::path::{Path, PathBuf};

use crate::error::CatalogError;

/// Base URL of the public PokeAPI.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Entries requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

const BASE_URL_VAR: &str = "POKEDEX_BASE_URL";
const PAGE_SIZE_VAR: &str = "POKEDEX_PAGE_SIZE";

/// Settings for talking to the catalog API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where a config field's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Provenance of each config field.
#[derive(Debug)]
pub struct ConfigSources {
    pub base_url: ConfigSource,
    pub page_size: ConfigSource,
}

/// TOML config file format.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct ConfigFile {
    catalog: Option<CatalogSection>,
}

#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
struct CatalogSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

impl ClientConfig {
    /// Load config from environment variables, the config file, or defaults.
    ///
    /// Priority per field: env vars > config file > default.
    pub fn load() -> Result<Self, CatalogError> {
        let file = config_path().and_then(|p| load_config_file(&p));
        Self::resolve(
            std::env::var(BASE_URL_VAR).ok(),
            std::env::var(PAGE_SIZE_VAR).ok(),
            file,
        )
    }

    /// Load config from an explicit file, ignoring the environment.
    pub fn load_from_path(path: &Path) -> Result<Self, CatalogError> {
        Self::resolve(None, None, load_config_file(path))
    }

    fn resolve(
        env_base_url: Option<String>,
        env_page_size: Option<String>,
        file: Option<CatalogSection>,
    ) -> Result<Self, CatalogError> {
        let base_url = env_base_url
            .or_else(|| file.as_ref().and_then(|c| c.base_url.clone()))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let page_size = match env_page_size {
            Some(raw) => raw.trim().parse::<u32>().map_err(|e| {
                CatalogError::Config(format!("Invalid {PAGE_SIZE_VAR} '{raw}': {e}"))
            })?,
            None => file
                .as_ref()
                .and_then(|c| c.page_size)
                .unwrap_or(DEFAULT_PAGE_SIZE),
        };

        Self::default()
            .with_base_url(base_url)
            .with_page_size(page_size)
    }

    /// Replace the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let url: String = base_url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Replace the page size. Zero is rejected.
    pub fn with_page_size(mut self, page_size: u32) -> Result<Self, CatalogError> {
        if page_size == 0 {
            return Err(CatalogError::Config(
                "page_size must be greater than zero".to_string(),
            ));
        }
        self.page_size = page_size;
        Ok(self)
    }
}

/// Return the path to the config file.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex").join("config.toml"))
}

/// Save config to the default config file. Returns the path written.
pub fn save_to_file(config: &ClientConfig) -> Result<PathBuf, CatalogError> {
    let path = config_path().ok_or_else(|| {
        CatalogError::Config("Could not determine config directory".to_string())
    })?;
    save_to_path(config, &path)?;
    Ok(path)
}

/// Save config to `path`, creating parent directories as needed.
///
/// Fields equal to their defaults are left out of the file.
pub fn save_to_path(config: &ClientConfig, path: &Path) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| CatalogError::Config(format!("Failed to create {}: {e}", parent.display())))?;
    }

    let file = ConfigFile {
        catalog: Some(CatalogSection {
            base_url: (config.base_url != DEFAULT_BASE_URL).then(|| config.base_url.clone()),
            page_size: (config.page_size != DEFAULT_PAGE_SIZE).then_some(config.page_size),
        }),
    };

    let toml_str = toml::to_string_pretty(&file)
        .map_err(|e| CatalogError::Config(format!("Failed to serialize config: {}", e)))?;

    std::fs::write(path, toml_str)
        .map_err(|e| CatalogError::Config(format!("Failed to write {}: {e}", path.display())))
}

/// Determine where each config field is coming from.
pub fn config_sources() -> ConfigSources {
    let file = config_path().and_then(|p| load_config_file(&p));

    let base_url = if std::env::var(BASE_URL_VAR).is_ok() {
        ConfigSource::EnvVar(BASE_URL_VAR)
    } else if file.as_ref().and_then(|c| c.base_url.as_ref()).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    let page_size = if std::env::var(PAGE_SIZE_VAR).is_ok() {
        ConfigSource::EnvVar(PAGE_SIZE_VAR)
    } else if file.as_ref().and_then(|c| c.page_size).is_some() {
        ConfigSource::ConfigFile
    } else {
        ConfigSource::Default
    };

    ConfigSources {
        base_url,
        page_size,
    }
}

/// Read the `[catalog]` table. Missing or malformed files count as absent.
fn load_config_file(path: &Path) -> Option<CatalogSection> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str::<ConfigFile>(&content) {
        Ok(config) => config.catalog,
        Err(e) => {
            log::warn!("Ignoring malformed config file {}: {e}", path.display());
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
