//! Error types for the catalog and reading pipeline

use std::fmt;

use thiserror::Error;

/// Failure talking to the remote content API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        message: Option<String>,
    },

    #[error("unreadable response: {0}")]
    Decode(String),

    #[error("response contained no data")]
    Empty,
}

impl NetworkError {
    /// Text to show the reader: the server's own message when it sent one.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::Status {
                message: Some(message),
                ..
            } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(e: reqwest::Error) -> Self {
        NetworkError::Transport(e.to_string())
    }
}

/// The required input that was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    SearchQuery,
    ComicLink,
    ChapterLink,
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::SearchQuery => write!(f, "search query"),
            InputKind::ComicLink => write!(f, "comic link"),
            InputKind::ChapterLink => write!(f, "chapter link"),
        }
    }
}

/// Top-level error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required identifier or handoff was missing. No request was issued.
    #[error("missing required input: {0}")]
    InvalidInput(InputKind),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error("no chapters available")]
    NoChapters,
}

pub type Result<T> = std::result::Result<T, CatalogError>;
