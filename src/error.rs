use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("invalid key map entry {key:?}: {reason}")]
    InvalidKeyMap { key: String, reason: String },
    #[error("dictionary {0} has no words")]
    EmptyDictionary(String),
}

pub type Result<T> = std::result::Result<T, Error>;
