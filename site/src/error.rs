//! Error type for the fallible edges of the site: tab parsing, config
//! loading and snapshot export. Rendering itself cannot fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    /// Input did not name one of the four tabs
    #[error("unknown tab '{0}' (expected one of: home, features, pricing, about)")]
    UnknownTab(String),

    /// Config JSON could not be parsed
    #[error("invalid site config: {0}")]
    Config(#[from] serde_json::Error),

    /// Reading or writing a file failed
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type SiteResult<T> = std::result::Result<T, SiteError>;
