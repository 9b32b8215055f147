use thiserror::Error;

#[derive(Error, Debug)]
pub enum BiblioError {
    #[error("Book not found: {0}")]
    BookNotFound(String),

    #[error("No copies available for ISBN {0}")]
    OutOfStock(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Malformed data file: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BiblioError>;
