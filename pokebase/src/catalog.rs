use crate::error::Cause;

use serde::Deserialize;
use std::sync::Arc;

/// The ordered list of every Pokémon the API knows about.
///
/// Fetched once in bulk and fixed afterwards. Cloning is cheap; all clones
/// share the same entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog(Arc<[Entry]>);

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub name: String,
    pub url: String,
}

impl Catalog {
    pub fn new(entries: impl Into<Arc<[Entry]>>) -> Self {
        Self(entries.into())
    }

    /// Parses the body of a `/pokemon` listing.
    ///
    /// A listing without any results is rejected, since there would be nothing
    /// to navigate.
    pub fn from_json(json: &[u8]) -> Result<Self, Cause> {
        #[derive(Deserialize)]
        struct Response {
            results: Vec<Entry>,
        }

        let response: Response = serde_json::from_slice(json)?;

        if response.results.is_empty() {
            return Err(Cause::Empty);
        }

        Ok(Self::new(response.results))
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.0.get(index)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new([])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_listing() {
        let json = br#"{
            "count": 1302,
            "next": null,
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;

        let catalog = Catalog::from_json(json).expect("valid listing");

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).map(|entry| entry.name.as_str()), Some("ivysaur"));
        assert_eq!(
            catalog.get(0).map(|entry| entry.url.as_str()),
            Some("https://pokeapi.co/api/v2/pokemon/1/")
        );
        assert!(catalog.get(2).is_none());
    }

    #[test]
    fn rejects_listing_without_results() {
        assert!(matches!(
            Catalog::from_json(br#"{ "count": 0 }"#),
            Err(Cause::Malformed(_))
        ));
        assert!(matches!(
            Catalog::from_json(br#"{ "results": [] }"#),
            Err(Cause::Empty)
        ));
        assert!(matches!(
            Catalog::from_json(b"<html>"),
            Err(Cause::Malformed(_))
        ));
    }
}
