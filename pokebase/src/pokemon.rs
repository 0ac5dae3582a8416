use crate::error::Cause;

use serde::Deserialize;

/// The detail record of a single Pokémon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: Id,
    pub name: String,
    /// Empty when the API has no front sprite for this Pokémon.
    pub sprite: String,
}

impl Pokemon {
    pub fn from_json(json: &[u8]) -> Result<Self, Cause> {
        #[derive(Deserialize)]
        struct Response {
            id: Id,
            name: String,
            sprites: Sprites,
        }

        #[derive(Deserialize)]
        struct Sprites {
            #[serde(default)]
            front_default: Option<String>,
        }

        let response: Response = serde_json::from_slice(json)?;

        Ok(Self {
            id: response.id,
            name: response.name,
            sprite: response.sprites.front_default.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Id(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_record() {
        let json = br#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "sprites": {
                "back_default": "https://example.com/back/25.png",
                "front_default": "https://example.com/25.png"
            }
        }"#;

        let pokemon = Pokemon::from_json(json).expect("valid record");

        assert_eq!(pokemon.id, Id(25));
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.sprite, "https://example.com/25.png");
    }

    #[test]
    fn missing_sprite_is_empty() {
        let json = br#"{ "id": 10143, "name": "mimikyu-totem-busted", "sprites": { "front_default": null } }"#;

        let pokemon = Pokemon::from_json(json).expect("valid record");

        assert_eq!(pokemon.sprite, "");
    }

    #[test]
    fn rejects_record_without_sprites() {
        assert!(matches!(
            Pokemon::from_json(br#"{ "id": 1, "name": "bulbasaur" }"#),
            Err(Cause::Malformed(_))
        ));
    }
}
