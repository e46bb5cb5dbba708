use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = HarnessError> = core::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("unknown platform: {0}")]
    UnknownPlatform(String),
    #[error("reading test data {path}: {source}")]
    FixtureIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid test data: {0}")]
    Fixture(#[from] serde_json::Error),
    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
