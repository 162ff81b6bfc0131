use thiserror::Error;

/// Everything that can stop a lookup or cut a song listing short.
#[derive(Error, Debug)]
pub enum Error {
    #[error("connection to Genius timed out")]
    Timeout,

    #[error("could not connect to Genius: {0}")]
    Connection(String),

    #[error("HTTP error {0}")]
    HttpStatus(u16),

    #[error("malformed response from Genius: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// Not fatal: the songs collected up to this point are complete pages.
    #[error("page limit reached (next page would be {next_page})")]
    PageLimitReached { next_page: i64 },

    #[error("configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Whether the songs gathered before this error are still trustworthy.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::PageLimitReached { .. })
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_builder() {
            Error::Configuration(err.to_string())
        } else if let Some(status) = err.status() {
            Error::HttpStatus(status.as_u16())
        } else {
            Error::Connection(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
