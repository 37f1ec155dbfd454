//! Pokedex - A command-line client for a remote creature catalog
//!
//! Catalog responses are memoized in a time-bound cache whose background
//! reaper evicts stale entries once per interval.

pub mod cache;
pub mod catch;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod session;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeClient;
pub use config::Config;
pub use repl::Repl;
pub use session::Session;
