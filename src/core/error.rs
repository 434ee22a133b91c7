use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("Unknown mercenary: {0}")]
    UnknownMercenary(String),

    #[error("Unknown ability '{ability}' for mercenary {merc}")]
    UnknownAbility { merc: String, ability: String },

    #[error("Unknown item '{item}' for mercenary {merc}")]
    UnknownItem { merc: String, item: String },

    #[error("Invalid operation: {0}")]
    InvalidOp(String),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CollectionError>;
