use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunMapError {
    #[error("API request failed: {0}")]
    Api(String),

    #[error("Malformed workflow definition {}: {}", .path.display(), .source)]
    MalformedDefinition {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RunMapError>;
