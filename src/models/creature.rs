//! Creature DTOs
//!
//! Shape of the catalog's `GET /pokemon/{name}` payload, trimmed to the
//! fields the REPL displays or rolls against.

use serde::Deserialize;

use super::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct Creature {
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    /// Experience granted for defeating it; drives the catch chance.
    /// A handful of catalog entries publish `null` here.
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
