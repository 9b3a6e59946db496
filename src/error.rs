use std::{io, path::PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{field} not found in {path}")]
    MissingField { field: &'static str, path: PathBuf },

    #[error("parent process id unavailable")]
    NoParentProcess,

    #[error("no user name for uid {0}")]
    UnknownUser(u32),
}

pub type Result<T> = std::result::Result<T, FetchError>;
