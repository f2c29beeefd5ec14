//! Models Module
//!
//! Serde shapes for the PokeAPI payloads the client decodes. The cache never
//! sees these; it stores the raw response bytes they are decoded from.

mod location;
mod pokemon;

pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
