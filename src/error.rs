use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlayfairError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid text: {0}")]
    InvalidText(String),

    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Unknown alphabet preset: {0}. Expected romanian, english or russian")]
    UnknownPreset(String),
}

impl PlayfairError {
    /// True for validation failures the caller can recover from by asking again
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidKey(_) | Self::InvalidText(_) | Self::InvalidAlphabet(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, PlayfairError>;
