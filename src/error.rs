// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Invalid player count: {0}")]
    InvalidPlayerCount(String),
    #[error("Playback Error: {0}")]
    Playback(#[from] PlaybackError),
}

/// Failures a player session can run into.
///
/// None of these are fatal: the player logs them and keeps the last one
/// available through `Player::last_error` so a host can surface a status.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaybackError {
    /// Neither the streaming engine nor the media primitive can play the source.
    #[error("Unsupported media format")]
    UnsupportedFormat,

    /// Runtime error reported by the streaming engine.
    #[error("Streaming engine error {code}: {detail}")]
    Engine {
        code: String,
        detail: String,
        fatal: bool,
    },

    /// The media primitive refused to start playback (e.g. blocked autoplay).
    #[error("Play request rejected: {0}")]
    PlayRejected(String),

    /// Error reported by the media primitive itself.
    #[error("Media error: {0}")]
    Media(String),

    /// Fetching or saving the source for download failed.
    #[error("Download failed: {0}")]
    Download(String),

    /// The operation needs a loaded source.
    #[error("No source loaded")]
    NoSource,
}

impl PlaybackError {
    /// Returns true if the engine declared this error unrecoverable.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PlaybackError::Engine { fatal: true, .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for PlaybackError {
    fn from(err: reqwest::Error) -> Self {
        PlaybackError::Download(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
