mod download_error;

pub use download_error::DownloadError;
