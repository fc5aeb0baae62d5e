use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BackdropError {
    #[error("failed to read config at {path:?}: {source}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseConfig(#[from] serde_json::Error),

    #[error("unknown theme mode {0:?} (expected \"dark\" or \"light\")")]
    UnknownMode(String),
}
