use log::info;

use crate::artist::{self, Artist, ArtistId};
use crate::config::Config;
use crate::error::Result;
use crate::paginator::{FetchOutcome, Paginator, DEFAULT_PAGE_LIMIT};
use crate::transport::{HttpTransport, Transport};

/// Entry point for looking up an artist and their songs.
pub struct Genius<T: Transport = HttpTransport> {
    transport: T,
    page_limit: i64,
    per_page: Option<u32>,
}

impl Genius<HttpTransport> {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            page_limit: config.page_limit,
            per_page: config.per_page,
        })
    }
}

impl<T: Transport> Genius<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            page_limit: DEFAULT_PAGE_LIMIT,
            per_page: None,
        }
    }

    pub fn page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = page_limit;
        self
    }

    /// Raw body of a search for `query`.
    pub async fn search(&self, query: &str) -> Result<String> {
        self.transport.get("search", &[("q", query.to_string())]).await
    }

    /// Search for `name` and pick the matching artist, if Genius knows them.
    ///
    /// Unlike song listing, failures here are returned to the caller.
    pub async fn find_artist(&self, name: &str) -> Result<Option<Artist>> {
        let body = self.search(name).await?;
        let artist = artist::resolve_artist(&body, name)?;
        if let Some(artist) = &artist {
            info!("Resolved {name:?} to artist {} ({})", artist.id, artist.name);
        }
        Ok(artist)
    }

    pub async fn songs(&self, artist: &ArtistId) -> FetchOutcome {
        Paginator::new(&self.transport)
            .page_limit(self.page_limit)
            .per_page(self.per_page)
            .fetch(artist)
            .await
    }
}
