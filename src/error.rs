use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while loading a catalog document or the browser config.
/// A document that fails any of these checks is rejected whole; there is no partial catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("gzip decompress: {0}")]
    Gzip(#[source] std::io::Error),

    #[error("catalog is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("parsing catalog: {0}")]
    Parse(String),

    #[error("item #{index} ({key:?}): {reason}")]
    InvalidItem {
        index: usize,
        key: String,
        reason: &'static str,
    },

    #[error("duplicate item key {0:?}")]
    DuplicateKey(String),

    #[error("items_count says {declared} but the document has {actual} items")]
    ItemCountMismatch { declared: usize, actual: usize },

    #[error("catalog loader stopped before returning a result")]
    LoaderGone,

    #[error("config: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
