use crate::pokebase::client;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tokio::fs;

/// Optional settings read from `config.ron` in the user's config directory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api: client::Config,
}

impl Config {
    pub async fn load() -> Result<Self, anywho::Error> {
        let path = path();

        if !fs::try_exists(&path).await? {
            return Ok(Self::default());
        }

        let config = Self::parse(&fs::read_to_string(&path).await?)?;
        log::info!("Loaded configuration from {}", path.display());

        Ok(config)
    }

    pub fn parse(config: &str) -> Result<Self, anywho::Error> {
        Ok(ron::from_str(config)?)
    }
}

fn path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_default()
        .join(env!("CARGO_PKG_NAME"))
        .join("config.ron")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = Config::parse("(api: (limit: 151))").expect("valid config");

        assert_eq!(config.api.limit, 151);
        assert_eq!(config.api.offset, 0);
        assert_eq!(config.api.api_url, "https://pokeapi.co/api/v2");
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(Config::parse("(api: 42)").is_err());
        assert!(Config::parse("(api: (limit: \"all\"))").is_err());
    }

    #[test]
    fn serialization_preserves_settings() {
        let config = Config {
            api: client::Config {
                api_url: "http://localhost:8000/api/v2".to_owned(),
                offset: 10,
                limit: 20,
            },
        };

        let serialized = ron::to_string(&config).expect("serialize config");

        assert_eq!(Config::parse(&serialized).expect("parse config"), config);
    }
}
