//! REPL session state
//!
//! Pagination cursors and the caught collection, passed explicitly to every
//! command handler.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::{Creature, LocationAreaPage};

/// A creature the user has caught, with when it happened.
#[derive(Debug, Clone)]
pub struct CaughtCreature {
    pub creature: Creature,
    pub caught_at: DateTime<Utc>,
}

/// Mutable state for one interactive session.
#[derive(Debug, Default)]
pub struct Session {
    /// URL `map` loads next; `None` means start from the first page
    pub next_page: Option<String>,
    /// URL `mapb` loads; `None` means we are on the first page
    pub previous_page: Option<String>,
    /// Caught creatures keyed by the name the user typed
    pokedex: BTreeMap<String, CaughtCreature>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces both cursors with the links of the page just shown.
    pub fn follow_page(&mut self, page: &LocationAreaPage) {
        self.next_page = page.next.clone().filter(|url| !url.is_empty());
        self.previous_page = page.previous.clone().filter(|url| !url.is_empty());
    }

    /// Records a catch. Catching the same name again replaces the earlier one.
    pub fn record_catch(&mut self, name: impl Into<String>, creature: Creature) {
        self.pokedex.insert(
            name.into(),
            CaughtCreature {
                creature,
                caught_at: Utc::now(),
            },
        );
    }

    pub fn caught(&self, name: &str) -> Option<&CaughtCreature> {
        self.pokedex.get(name)
    }

    /// Caught names in alphabetical order.
    pub fn caught_names(&self) -> impl Iterator<Item = &str> {
        self.pokedex.keys().map(String::as_str)
    }

    pub fn caught_count(&self) -> usize {
        self.pokedex.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedResource;

    fn creature(name: &str) -> Creature {
        Creature {
            name: name.to_string(),
            height: 1,
            weight: 1,
            base_experience: Some(50),
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    fn page(next: Option<&str>, previous: Option<&str>) -> LocationAreaPage {
        LocationAreaPage {
            count: 1,
            next: next.map(str::to_string),
            previous: previous.map(str::to_string),
            results: vec![NamedResource {
                name: "area".to_string(),
                url: String::new(),
            }],
        }
    }

    #[test]
    fn test_follow_page_updates_cursors() {
        let mut session = Session::new();
        session.follow_page(&page(Some("p3"), Some("p1")));
        assert_eq!(session.next_page.as_deref(), Some("p3"));
        assert_eq!(session.previous_page.as_deref(), Some("p1"));

        session.follow_page(&page(None, Some("")));
        assert!(session.next_page.is_none());
        assert!(session.previous_page.is_none());
    }

    #[test]
    fn test_caught_names_sorted() {
        let mut session = Session::new();
        session.record_catch("pidgey", creature("pidgey"));
        session.record_catch("abra", creature("abra"));
        session.record_catch("pidgey", creature("pidgey"));

        let names: Vec<&str> = session.caught_names().collect();
        assert_eq!(names, vec!["abra", "pidgey"]);
        assert_eq!(session.caught_count(), 2);
        assert!(session.caught("abra").is_some());
        assert!(session.caught("mew").is_none());
    }
}
