//! Projection of raw catalog entries into UI-ready display entries.

use serde::{Deserialize, Serialize};

use crate::error::EntryError;
use crate::page::RawEntry;

/// Fixed prefix of the sprite image URL; the id and `.png` follow.
pub const SPRITE_URL_PREFIX: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/";

/// A catalog entry ready for display: capitalized name, sprite URL and id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayEntry {
    pub name: String,
    pub image_url: String,
    pub id: u32,
}

impl DisplayEntry {
    /// Derive a display entry from a listed entry.
    ///
    /// Fails when the entry URL does not end in a numeric id.
    pub fn from_raw(raw: &RawEntry) -> Result<Self, EntryError> {
        let id = extract_id(&raw.url)?;
        Ok(Self {
            name: capitalize(&raw.name),
            image_url: sprite_url(id),
            id,
        })
    }

    /// Whether this entry matches a search query.
    ///
    /// The query is trimmed, then compared case-insensitively against the
    /// name as a substring, or exactly against the decimal id.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            return false;
        }
        self.name.to_lowercase().contains(&query.to_lowercase()) || self.id.to_string() == query
    }
}

/// Extract the numeric id from the last path segment of an entry URL.
///
/// A single trailing slash is dropped first, so `.../pokemon/25/` and
/// `.../pokemon/25` both yield 25. The whole segment must be digits:
/// `.../pokemon/form25` is an error, not 25.
pub fn extract_id(url: &str) -> Result<u32, EntryError> {
    let trimmed = url.strip_suffix('/').unwrap_or(url);
    let segment = trimmed.rsplit('/').next().unwrap_or(trimmed);

    let invalid = || EntryError::InvalidId {
        url: url.to_string(),
        segment: segment.to_string(),
    };

    // `u32::from_str` accepts a leading '+', which is not an id.
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    segment.parse().map_err(|_| invalid())
}

/// Sprite image URL for a numeric id.
pub fn sprite_url(id: u32) -> String {
    format!("{SPRITE_URL_PREFIX}{id}.png")
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/entry_tests.rs"]
mod tests;
