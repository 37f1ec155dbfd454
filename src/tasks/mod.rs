//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: evicts stale cache entries once per interval

mod reaper;

pub use reaper::spawn_reaper;
