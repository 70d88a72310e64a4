use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content parse error: {0}")]
    ContentParse(#[from] toml::de::Error),

    #[error("Preference write error: {0}")]
    PreferenceSerialize(#[from] toml::ser::Error),

    #[error("Tab sequence must contain at least one tab")]
    EmptyTabSequence,

    #[error("Duplicate tab in sequence: {0}")]
    DuplicateTab(String),

    #[error("Unknown page index in content: {0}")]
    UnknownPage(usize),

    #[error("Missing content for page {page} tab '{tab}'")]
    MissingContent { page: usize, tab: String },

    #[error("Content file not found: {0}")]
    ContentNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
