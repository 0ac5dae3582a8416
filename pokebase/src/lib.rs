pub mod catalog;
pub mod client;
pub mod navigator;
pub mod pokemon;

mod error;

pub use catalog::Catalog;
pub use client::Client;
pub use error::{Cause, Error};
pub use navigator::{Binding, Initialization, Navigator, Panel, Source};
pub use pokemon::Pokemon;
