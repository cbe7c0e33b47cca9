use pokedex_core::{CatalogPage, ItemDetail};

use crate::error::CatalogError;

/// Anything that can serve catalog pages and item details.
///
/// [`crate::PokeApiClient`] is the network implementation; the list
/// controller is generic over this trait so it can be driven without a
/// server.
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    /// Fetch `limit` entries starting at `offset`.
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError>;

    /// Fetch the full record for one item by name or id.
    async fn fetch_detail(&self, name: &str) -> Result<ItemDetail, CatalogError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for &T {
    async fn fetch_page(&self, limit: u32, offset: u32) -> Result<CatalogPage, CatalogError> {
        (**self).fetch_page(limit, offset).await
    }

    async fn fetch_detail(&self, name: &str) -> Result<ItemDetail, CatalogError> {
        (**self).fetch_detail(name).await
    }
}
