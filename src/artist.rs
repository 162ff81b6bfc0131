use std::fmt;

use log::debug;
use serde_json::Value;

use crate::document;
use crate::error::Result;

/// Genius' identifier for an artist, kept exactly as the search returned it.
///
/// Numeric in practice, but nothing here relies on that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistId(pub Value);

impl ArtistId {
    /// Whether a payload value refers to this artist.
    ///
    /// Numbers compare by value, so `10` and `10.0` are the same artist.
    pub fn matches(&self, value: &Value) -> bool {
        match (&self.0, value) {
            (Value::Number(a), Value::Number(b)) if a.is_f64() || b.is_f64() => {
                a.as_f64() == b.as_f64()
            }
            (id, other) => id == other,
        }
    }
}

impl From<u64> for ArtistId {
    fn from(id: u64) -> Self {
        ArtistId(Value::from(id))
    }
}

impl From<&str> for ArtistId {
    fn from(id: &str) -> Self {
        ArtistId(Value::from(id))
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&document::to_text(&self.0))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub name: String,
    pub id: ArtistId,
}

/// Pick the artist called `name` out of a raw search response.
///
/// Hits are scanned in order and the first primary artist with both a name
/// and an id, whose name matches case-insensitively, wins. A response without
/// a `response.hits` list resolves to `None`. Only a body that is not JSON at
/// all is an error.
pub fn resolve_artist(body: &str, name: &str) -> Result<Option<Artist>> {
    let response = document::parse(body)?;

    let Some(hits) = document::get(&response, &["response", "hits"]).and_then(Value::as_array)
    else {
        debug!("Search response has no hit list");
        return Ok(None);
    };

    let wanted = name.to_lowercase();
    let artist = hits
        .iter()
        .filter_map(|hit| document::get(hit, &["result", "primary_artist"]))
        .find_map(|primary_artist| {
            let found = document::get(primary_artist, &["name"]).map(document::to_text)?;
            let id = document::get(primary_artist, &["id"])?;
            (found.to_lowercase() == wanted).then(|| Artist {
                name: found,
                id: ArtistId(id.clone()),
            })
        });

    Ok(artist)
}
