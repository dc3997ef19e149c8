#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Could not connect to server. Please check if backend is running.")]
    NoResponse,

    #[error("Request error: {0}")]
    RequestError(String),

    #[error("Data error: {0}")]
    DataError(String),

    #[error("Download error: {0}")]
    DownloadError(String),
}
