use log::{debug, info, warn};

use crate::artist::ArtistId;
use crate::error::Error;
use crate::song::SongPage;
use crate::transport::Transport;

pub const DEFAULT_PAGE_LIMIT: i64 = 100;

/// Result of walking an artist's song listing.
///
/// `songs` always holds every title gathered before the walk stopped, even
/// when `error` is set.
#[derive(Debug)]
pub struct FetchOutcome {
    pub songs: Vec<String>,
    pub error: Option<Error>,
}

impl FetchOutcome {
    fn complete(songs: Vec<String>) -> Self {
        Self { songs, error: None }
    }

    fn stopped(songs: Vec<String>, error: Error) -> Self {
        Self {
            songs,
            error: Some(error),
        }
    }

    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Walks `artists/{id}/songs` one page at a time.
///
/// Any transport or decoding failure ends the walk on the spot; nothing is
/// retried.
pub struct Paginator<'a, T: Transport + ?Sized> {
    transport: &'a T,
    page_limit: i64,
    per_page: Option<u32>,
}

impl<'a, T: Transport + ?Sized> Paginator<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            page_limit: DEFAULT_PAGE_LIMIT,
            per_page: None,
        }
    }

    /// Stop once the listing points at this page or beyond.
    pub fn page_limit(mut self, page_limit: i64) -> Self {
        self.page_limit = page_limit;
        self
    }

    pub fn per_page(mut self, per_page: Option<u32>) -> Self {
        self.per_page = per_page;
        self
    }

    pub async fn fetch(&self, artist: &ArtistId) -> FetchOutcome {
        let path = format!("artists/{artist}/songs");
        let mut songs = Vec::new();
        let mut current_page = Some(1);

        while let Some(page) = current_page {
            debug!("Fetching page {page} of songs for artist {artist}");

            let body = match self.transport.get(&path, &self.query(page)).await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Stopped at page {page}: {e}");
                    return FetchOutcome::stopped(songs, e);
                }
            };

            let SongPage {
                songs: mut page_songs,
                next_page,
            } = match SongPage::parse(&body, artist) {
                Ok(parsed) => parsed,
                Err(e) => {
                    warn!("Stopped at page {page}: {e}");
                    return FetchOutcome::stopped(songs, e);
                }
            };
            debug!("Page {page} had {} songs, next page {next_page:?}", page_songs.len());
            songs.append(&mut page_songs);

            current_page = match next_page {
                Some(next) if next > page && next < self.page_limit => Some(next),
                Some(next) if next >= self.page_limit => {
                    warn!("Page limit {} reached after page {page}", self.page_limit);
                    return FetchOutcome::stopped(songs, Error::PageLimitReached { next_page: next });
                }
                // A cursor that does not move forward would loop forever
                _ => None,
            };
        }

        info!("Fetched {} songs for artist {artist}", songs.len());
        FetchOutcome::complete(songs)
    }

    fn query(&self, page: i64) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", page.to_string())];
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        query
    }
}
