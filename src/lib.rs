//! Look up an artist on Genius and list every song attributed to them.

pub mod artist;
pub mod client;
pub mod config;
pub mod document;
pub mod error;
pub mod output_record;
pub mod paginator;
pub mod song;
pub mod transport;

pub use artist::{Artist, ArtistId};
pub use client::Genius;
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use paginator::{FetchOutcome, Paginator};
pub use transport::{HttpTransport, Transport};
