use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScopeError {
    #[error("Symbol {0:?} is not in the configured symbol catalog")]
    UnknownSymbol(String),

    #[error("No matching symbol found within the search bound")]
    NoMatchFound,

    #[error("Selection does not touch a configured symbol")]
    MalformedSelection,

    #[error("Invalid symbol configuration: {0}")]
    InvalidCatalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
