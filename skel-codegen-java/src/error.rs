use std::path::PathBuf;

/// Errors raised while emitting stubs.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to write stub {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
