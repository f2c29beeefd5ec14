//! Pokemon record payload from the PokeAPI `pokemon` endpoint.

use serde::{Deserialize, Deserializer};

use super::NamedResource;

/// A pokemon record, trimmed to the fields the commands display.
///
/// `base_experience` doubles as the catch difficulty: the catch roll has to
/// beat it.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Base experience yield; higher means harder to catch. The API sends
    /// `null` for some pokemon; those decode as 0 and are trivially caught.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub base_experience: u32,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stat values
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonType>,
}

/// One base stat entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// The stat's base value
    pub base_stat: u32,
    /// Effort value yield
    pub effort: u32,
    /// Which stat this is (hp, attack, ...)
    pub stat: NamedResource,
}

/// One type slot.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// Slot ordering within the pokemon's types
    pub slot: u32,
    /// The type itself (grass, poison, ...)
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

/// Decodes an optional number, mapping JSON `null` (and absence, via
/// `#[serde(default)]`) to zero.
fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or(0))
}
