//! Client Module
//!
//! The PokeAPI fetch layer: cache-first HTTP access with raw-byte caching.

mod api;

pub use api::ApiClient;
