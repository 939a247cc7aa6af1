use thiserror::Error;

/// Failures that end a flow early. Per-item download failures inside a
/// playlist batch are counted instead of raised, so they never show up here.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("required tool not found: {0}")]
    ToolNotFound(&'static str),

    #[error("playlist has no downloadable entries")]
    EmptyPlaylist,

    #[error("download failed: {0}")]
    DownloadFailed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
