// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Player Error: {0}")]
    Player(#[from] PlayerError),
    #[error("Surface Error: embedded video surface is not running")]
    SurfaceClosed,
}

/// Errors surfaced by the embedded player.
///
/// Each variant corresponds to a numeric code reported by the video provider.
/// Hosts use [`PlayerError::i18n_key`] to pick a localized message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerError {
    /// The requested id could not be resolved (code 1).
    #[error("Invalid Video ID = {0}")]
    InvalidVideoId(String),

    /// The request contains an invalid parameter value (code 2).
    #[error("The request contains an invalid parameter value.")]
    InvalidParameter,

    /// The content cannot be played by the HTML5 player (code 5).
    #[error("The requested content cannot be played by the player.")]
    Html5Error,

    /// The video was removed or marked private (code 100).
    #[error("The video requested was not found.")]
    VideoNotFound,

    /// The owner does not allow embedded playback (codes 101 and 150).
    #[error("The owner of the requested video does not allow it to be played in embedded players.")]
    EmbeddingNotAllowed(i32),

    /// Any code the provider does not document.
    #[error("Unknown Error")]
    Unknown(i32),
}

impl PlayerError {
    /// Categorizes a provider error code.
    ///
    /// `video_id` is only used for the invalid-id message.
    pub fn from_code(code: i32, video_id: &str) -> Self {
        match code {
            1 => PlayerError::InvalidVideoId(video_id.to_string()),
            2 => PlayerError::InvalidParameter,
            5 => PlayerError::Html5Error,
            100 => PlayerError::VideoNotFound,
            101 | 150 => PlayerError::EmbeddingNotAllowed(code),
            other => PlayerError::Unknown(other),
        }
    }

    /// Returns the numeric provider code.
    pub fn code(&self) -> i32 {
        match self {
            PlayerError::InvalidVideoId(_) => 1,
            PlayerError::InvalidParameter => 2,
            PlayerError::Html5Error => 5,
            PlayerError::VideoNotFound => 100,
            PlayerError::EmbeddingNotAllowed(code) => *code,
            PlayerError::Unknown(code) => *code,
        }
    }

    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlayerError::InvalidVideoId(_) => "error-player-invalid-video-id",
            PlayerError::InvalidParameter => "error-player-invalid-parameter",
            PlayerError::Html5Error => "error-player-html5",
            PlayerError::VideoNotFound => "error-player-video-not-found",
            PlayerError::EmbeddingNotAllowed(_) => "error-player-embedding-not-allowed",
            PlayerError::Unknown(_) => "error-player-unknown",
        }
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

pub type Result<T> = std::result::Result<T, Error>;
