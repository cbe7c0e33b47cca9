//! Wire types for the item detail endpoint.
//!
//! The listing endpoint deserializes straight into
//! [`pokedex_core::CatalogPage`]; the detail payload is much larger, so only
//! the fields the domain record needs are declared here.

use serde::Deserialize;

use pokedex_core::{BaseStat, ItemDetail};

/// Response body of `GET /pokemon/{name}`.
#[derive(Debug, Deserialize)]
pub struct PokemonResponse {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Option<Sprites>,
}

#[derive(Debug, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

/// The `{name, url}` pair PokeAPI uses for every cross reference; only
/// the name is kept.
#[derive(Debug, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

impl From<PokemonResponse> for ItemDetail {
    fn from(resp: PokemonResponse) -> Self {
        let mut types = resp.types;
        types.sort_by_key(|t| t.slot);

        ItemDetail {
            id: resp.id,
            name: resp.name,
            height: resp.height,
            weight: resp.weight,
            stats: resp
                .stats
                .into_iter()
                .map(|s| BaseStat {
                    name: s.stat.name,
                    base: s.base_stat,
                })
                .collect(),
            types: types.into_iter().map(|t| t.kind.name).collect(),
            sprite_url: resp.sprites.and_then(|s| s.front_default),
        }
    }
}

#[cfg(test)]
#[path = "tests/types_tests.rs"]
mod tests;
