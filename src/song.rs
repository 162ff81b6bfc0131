use serde_json::Value;

use crate::artist::ArtistId;
use crate::document::{self, Document};
use crate::error::Result;

/// The useful part of one page of an artist's song listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongPage {
    pub songs: Vec<String>,
    pub next_page: Option<i64>,
}

impl SongPage {
    /// Decode a raw page body and extract it.
    pub fn parse(body: &str, artist: &ArtistId) -> Result<Self> {
        Ok(Self::extract(&document::parse(body)?, artist))
    }

    /// Pull the titles credited to `artist` and the next-page cursor out of a
    /// decoded page.
    ///
    /// Listings can include songs where the artist is only featured, so songs
    /// whose primary artist is someone else are dropped.
    pub fn extract(doc: &Document, artist: &ArtistId) -> Self {
        let songs = document::get(doc, &["response", "songs"])
            .and_then(Value::as_array)
            .map(|songs| {
                songs
                    .iter()
                    .filter(|song| {
                        document::get(song, &["primary_artist", "id"])
                            .is_some_and(|id| artist.matches(id))
                    })
                    .filter_map(|song| document::get(song, &["title"]).map(document::to_text))
                    .collect()
            })
            .unwrap_or_default();

        let next_page = document::get(doc, &["response", "next_page"]).and_then(page_number);

        SongPage { songs, next_page }
    }
}

/// Coerce a `next_page` value into a page number.
fn page_number(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse().ok(),
        Value::Bool(true) => Some(1),
        _ => None,
    }
}
