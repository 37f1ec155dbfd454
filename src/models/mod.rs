//! Catalog models
//!
//! Typed views of the JSON payloads served by the remote catalog.

pub mod creature;
pub mod location;

// Re-export commonly used types
pub use creature::{Creature, StatSlot, TypeSlot};
pub use location::{Encounter, LocationArea, LocationAreaPage, NamedResource};
