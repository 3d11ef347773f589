use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PylintMdError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("failed to run analyzer `{program}`: {source}")]
    AnalyzerSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed analyzer output for {}: {source}", .path.display())]
    MalformedOutput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PylintMdError>;
