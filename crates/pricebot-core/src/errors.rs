/// Core error type.
///
/// Adapter crates map their transport-specific failures into [`HttpError`] so the
/// webhook dispatcher and the price page can report every failure the same way.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Http(#[from] HttpError),

    #[error("external error: {0}")]
    External(String),
}

/// Failure taxonomy shared by every outbound HTTP call (price API, send API).
///
/// Timeouts are not special: they surface as [`HttpError::Transport`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HttpError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("API returned HTTP status {0}")]
    Status(u16),

    #[error("invalid JSON response: {0}")]
    Decode(String),
}

impl Error {
    /// The HTTP failure kind, if this error came from an outbound call.
    pub fn http(&self) -> Option<&HttpError> {
        match self {
            Error::Http(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
