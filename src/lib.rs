//! Pokedex - A PokeAPI REPL client backed by an expiring in-memory cache
//!
//! The core is the [`cache`] module: a time-bounded, concurrency-safe byte
//! cache with a background reaper. The [`client`] fetch layer memoizes
//! PokeAPI responses in it, keyed by request URL, and the [`repl`] drives
//! everything from an interactive prompt.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::ApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Repl;
