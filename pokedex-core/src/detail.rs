use serde::{Deserialize, Serialize};

use crate::entry::capitalize;

/// One base stat of a Pokémon, in API order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStat {
    pub name: String,
    pub base: u32,
}

/// Full record for a single catalog item, fetched lazily per item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    /// Height in decimetres.
    pub height: u32,
    /// Weight in hectograms.
    pub weight: u32,
    pub stats: Vec<BaseStat>,
    /// Type names ordered by slot.
    pub types: Vec<String>,
    pub sprite_url: Option<String>,
}

impl ItemDetail {
    pub fn display_name(&self) -> String {
        capitalize(&self.name)
    }

    /// Weight converted from hectograms to kilograms.
    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }

    /// Height converted from decimetres to metres.
    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    /// Largest base stat value, or 0 when no stats were reported.
    pub fn max_base_stat(&self) -> u32 {
        self.stats.iter().map(|s| s.base).max().unwrap_or(0)
    }
}

/// Short label for a stat name. Unknown stats map to an empty string.
pub fn stat_abbreviation(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "hp" => "HP",
        "attack" => "Atk",
        "defense" => "Def",
        "special-attack" => "SpAtk",
        "special-defense" => "SpDef",
        "speed" => "Spd",
        _ => "",
    }
}

#[cfg(test)]
#[path = "tests/detail_tests.rs"]
mod tests;
