use thiserror::Error;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Token document not found: {0}")]
    DocumentNotFound(String),
    #[error("Failed to parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("{file} has no `{key}` root group")]
    MissingRoot { file: String, key: String },
    #[error("Unknown token category: {0}")]
    UnknownCategory(String),
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

pub type Result<T, E = TokenError> = std::result::Result<T, E>;
