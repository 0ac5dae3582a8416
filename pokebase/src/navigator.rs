use crate::catalog::Entry;
use crate::error::Cause;
use crate::{Catalog, Error, Pokemon};

use std::sync::atomic::{self, AtomicBool};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

pub const CATALOG_ERROR: &str = "Failed to load Pokémon data";
pub const RECORD_ERROR: &str = "Failed to load Pokémon";

/// Where the catalog and the detail records come from.
pub trait Source: Send + Sync + 'static {
    fn fetch_catalog(&self) -> impl Future<Output = Result<Catalog, Error>> + Send;

    fn fetch_pokemon(&self, entry: &Entry) -> impl Future<Output = Result<Pokemon, Error>> + Send;
}

/// The surface a [`Navigator`] draws on.
pub trait Binding: Send + Sync + 'static {
    fn render(&self, panel: Panel);

    fn set_loading(&self, is_loading: bool);
}

/// What the display regions show.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Panel {
    pub number: String,
    pub name: String,
    pub sprite: String,
}

impl Panel {
    pub fn render(pokemon: &Pokemon) -> Self {
        Self {
            number: format!("#{:03}", pokemon.id.0),
            name: pokemon.name.clone(),
            sprite: pokemon.sprite.clone(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            number: "#000".to_owned(),
            name: message.into(),
            sprite: String::new(),
        }
    }
}

/// How a call to [`Navigator::initialize`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Initialization {
    Loaded { total: usize },
    /// Another load was running; nothing changed.
    Dropped,
}

/// Steps through a [`Catalog`] one Pokémon at a time.
///
/// At most one load is in flight at any time. Navigation requested while a
/// load is running is dropped, not queued.
///
/// A `Navigator` is a handle; clones drive the same state.
pub struct Navigator<S, B>(Arc<Inner<S, B>>);

struct Inner<S, B> {
    source: S,
    binding: B,
    state: Mutex<State>,
    is_loading: AtomicBool,
}

#[derive(Default)]
struct State {
    catalog: Catalog,
    index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

impl<S: Source, B: Binding> Navigator<S, B> {
    pub fn new(source: S, binding: B) -> Self {
        Self(Arc::new(Inner {
            source,
            binding,
            state: Mutex::new(State::default()),
            is_loading: AtomicBool::new(false),
        }))
    }

    /// Fetches the catalog and shows its first Pokémon.
    ///
    /// Replaces any previously loaded catalog. On failure the error is shown
    /// and the navigator keeps whatever catalog it had before.
    pub async fn initialize(&self) -> Result<Initialization, Error> {
        let total = {
            let Some(_loading) = self.acquire() else {
                log::warn!("Initialization dropped: a load is already running");
                return Ok(Initialization::Dropped);
            };

            let catalog = match self.0.source.fetch_catalog().await {
                Ok(catalog) if catalog.is_empty() => Err(Error::CatalogLoad(Cause::Empty)),
                result => result,
            };

            let catalog = match catalog {
                Ok(catalog) => catalog,
                Err(error) => {
                    log::error!("{error}");
                    self.show_error(CATALOG_ERROR);

                    return Err(error);
                }
            };

            let total = catalog.len();
            log::info!("Loaded {total} Pokémon");

            *self.state() = State { catalog, index: 0 };

            total
        };

        self.load_at(0).await;

        Ok(Initialization::Loaded { total })
    }

    /// Loads and shows the Pokémon at `index` without moving the cursor.
    ///
    /// Does nothing if `index` is out of bounds or a load is already running.
    pub async fn load_at(&self, index: usize) {
        let Some(entry) = self.state().catalog.get(index).cloned() else {
            return;
        };

        let Some(loading) = self.acquire() else {
            log::debug!("Load of #{index} dropped: a load is already running");
            return;
        };

        self.load(entry, loading).await;
    }

    pub async fn next(&self) {
        self.step(Direction::Forward).await;
    }

    pub async fn previous(&self) {
        self.step(Direction::Backward).await;
    }

    pub fn index(&self) -> usize {
        self.state().index
    }

    pub fn is_loading(&self) -> bool {
        self.0.is_loading.load(atomic::Ordering::Acquire)
    }

    pub fn catalog(&self) -> Catalog {
        self.state().catalog.clone()
    }

    pub fn source(&self) -> &S {
        &self.0.source
    }

    pub fn binding(&self) -> &B {
        &self.0.binding
    }

    async fn step(&self, direction: Direction) {
        // The catalog only changes while loading, and never back to empty
        if self.state().catalog.is_empty() {
            return;
        }

        let Some(loading) = self.acquire() else {
            log::debug!("{direction:?} dropped: a load is already running");
            return;
        };

        let entry = {
            let mut state = self.state();
            let total = state.catalog.len();

            state.index = match direction {
                Direction::Forward => (state.index + 1) % total,
                Direction::Backward => (state.index + total - 1) % total,
            };

            state.catalog.get(state.index).cloned()
        };

        let Some(entry) = entry else {
            return;
        };

        self.load(entry, loading).await;
    }

    async fn load(&self, entry: Entry, _loading: Loading<'_>) {
        match self.0.source.fetch_pokemon(&entry).await {
            Ok(pokemon) => {
                log::info!(
                    "Current Pokémon: {name} (#{id})",
                    name = pokemon.name,
                    id = pokemon.id.0
                );

                self.0.binding.render(Panel::render(&pokemon));
            }
            Err(error) => {
                log::error!("{error} ({name})", name = entry.name);

                self.show_error(RECORD_ERROR);
            }
        }
    }

    fn show_error(&self, message: &str) {
        self.0.binding.render(Panel::error(message));
    }

    fn acquire(&self) -> Option<Loading<'_>> {
        self.0
            .is_loading
            .compare_exchange(
                false,
                true,
                atomic::Ordering::AcqRel,
                atomic::Ordering::Acquire,
            )
            .ok()?;

        self.0.binding.set_loading(true);

        Some(Loading {
            flag: &self.0.is_loading,
            binding: &self.0.binding,
        })
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.0.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S, B> Clone for Navigator<S, B> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

/// Clears the loading flag when dropped.
struct Loading<'a> {
    flag: &'a AtomicBool,
    binding: &'a dyn Binding,
}

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.flag.store(false, atomic::Ordering::Release);
        self.binding.set_loading(false);
    }
}
