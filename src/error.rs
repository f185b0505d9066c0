use std::io;

use thiserror::Error;

use crate::item::SpawnError;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("item placement failed: {0}")]
    Spawn(#[from] SpawnError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("could not open log file {path}: {source}")]
    LogFile {
        path: String,
        #[source]
        source: io::Error,
    },
}
