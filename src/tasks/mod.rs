//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of their owner.
//!
//! # Tasks
//! - Reaper: removes cache entries older than the TTL at a fixed interval

mod reaper;

pub use reaper::spawn_reaper_task;
