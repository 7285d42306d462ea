use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A judge page did not have the structure its extractor relies on.
    #[error("unexpected markup from {judge}: {message}")]
    Markup { judge: &'static str, message: String },

    #[error("invalid contest batch: {0}")]
    InvalidBatch(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to move {path} to trash: {message}")]
    Trash { path: String, message: String },
}

impl Error {
    pub(crate) fn markup(judge: &'static str, message: impl Into<String>) -> Self {
        Self::Markup {
            judge,
            message: message.into(),
        }
    }
}
