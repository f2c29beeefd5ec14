//! REPL Module
//!
//! The interactive prompt: input tokenization, the command registry, and
//! dispatch to the async command handlers.

mod commands;
mod input;

pub use commands::{Flow, Repl, COMMANDS};
pub use input::clean_input;
