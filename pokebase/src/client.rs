use crate::catalog::Entry;
use crate::error::Cause;
use crate::navigator::Source;
use crate::{Catalog, Error, Pokemon};

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Where the catalog comes from and how much of it to fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_url: String,
    pub offset: usize,
    pub limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: "https://pokeapi.co/api/v2".to_owned(),
            offset: 0,
            limit: 1292,
        }
    }
}

impl Config {
    pub fn catalog_url(&self) -> String {
        format!(
            "{api_url}/pokemon/?offset={offset}&limit={limit}",
            api_url = self.api_url.trim_end_matches('/'),
            offset = self.offset,
            limit = self.limit,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Client {
    client: reqwest::Client,
    config: Config,
}

impl Client {
    pub fn new(config: Config) -> Self {
        log::info!("PokeAPI session started ({})", config.api_url);

        Self {
            client: CLIENT.clone(),
            config,
        }
    }

    pub async fn fetch_catalog(&self) -> Result<Catalog, Error> {
        let url = self.config.catalog_url();

        log::info!("Fetching catalog: {url}");
        let json = self.get(&url).await.map_err(Error::CatalogLoad)?;

        Catalog::from_json(&json).map_err(Error::CatalogLoad)
    }

    pub async fn fetch_pokemon(&self, entry: &Entry) -> Result<Pokemon, Error> {
        log::info!("Fetching Pokémon: {url}", url = entry.url);
        let json = self.get(&entry.url).await.map_err(Error::RecordLoad)?;

        Pokemon::from_json(&json).map_err(Error::RecordLoad)
    }

    pub async fn download_sprite(&self, url: &str) -> Result<Bytes, Error> {
        log::info!("Downloading sprite: {url}");

        self.get(url).await.map_err(Error::SpriteLoad)
    }

    async fn get(&self, url: &str) -> Result<Bytes, Cause> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Cause::Status(status));
        }

        Ok(response.bytes().await?)
    }
}

impl Source for Client {
    async fn fetch_catalog(&self) -> Result<Catalog, Error> {
        Client::fetch_catalog(self).await
    }

    async fn fetch_pokemon(&self, entry: &Entry) -> Result<Pokemon, Error> {
        Client::fetch_pokemon(self, entry).await
    }
}

static CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::ClientBuilder::new()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .expect("Build reqwest client")
});
