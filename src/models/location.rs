//! Location area payloads from the PokeAPI `location-area` endpoints.

use serde::Deserialize;

/// A named API resource with its canonical URL.
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name
    pub name: String,
    /// Fully-resolved resource URL
    pub url: String,
}

/// One page of location areas (20 per page) with pagination cursors.
///
/// `next` and `previous` are fully-resolved page URLs, absent at either end
/// of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// The location areas on this page
    pub results: Vec<NamedResource>,
}

/// Detail for a single location area: which pokemon are encountered there.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    /// Area name
    pub name: String,
    /// Pokemon that can be encountered in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One encounter slot in a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The encountered pokemon
    pub pokemon: NamedResource,
}
