use pokedex_api::{CatalogError, CatalogSource};
use pokedex_core::ItemDetail;

/// Fetch the full record for one catalog item.
///
/// Display names are capitalized, so the name is trimmed and lowercased
/// before it is used as a path segment.
pub async fn load_detail<S: CatalogSource>(
    source: &S,
    name: &str,
) -> Result<ItemDetail, CatalogError> {
    let key = name.trim().to_lowercase();
    log::debug!("Loading detail for '{}'", key);

    let result = source.fetch_detail(&key).await;
    if let Err(e) = &result {
        log::warn!("Failed to load detail for '{}': {}", key, e);
    }
    result
}
