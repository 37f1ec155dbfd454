//! Location DTOs
//!
//! Shapes of the catalog's location-area listing and detail payloads.

use serde::Deserialize;

/// A name/URL pair the catalog uses to reference another resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area/`.
///
/// `next` and `previous` are `null` at either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail payload of `GET /location-area/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    #[serde(default)]
    pub name: String,
    pub pokemon_encounters: Vec<Encounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Encounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of every creature that can be met in this area, in catalog order.
    pub fn creature_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize_with_null_links() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://catalog.test/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://catalog.test/location-area/2/"}
            ]
        }"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();
        assert!(page.next.is_none());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[1].name, "eterna-city-area");
    }

    #[test]
    fn test_area_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "encounter_method_rates": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "u"}, "version_details": []},
                {"pokemon": {"name": "staryu", "url": "u"}, "version_details": []}
            ]
        }"#;
        let area: LocationArea = serde_json::from_str(json).unwrap();
        let names: Vec<&str> = area.creature_names().collect();
        assert_eq!(names, vec!["tentacool", "staryu"]);
    }

    #[test]
    fn test_page_missing_results_is_an_error() {
        let json = r#"{"count": 0, "next": null, "previous": null}"#;
        assert!(serde_json::from_str::<LocationAreaPage>(json).is_err());
    }
}
