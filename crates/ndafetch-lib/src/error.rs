use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NdaFetchError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Authentication failed with status {status}: {body}")]
    Authentication { status: u16, body: String },

    #[error("Failed to list files of package {package_id}: {reason}")]
    Listing { package_id: String, reason: String },

    #[error("Failed to resolve download URLs for package {package_id}: {reason}")]
    Resolution { package_id: String, reason: String },

    #[error("No download URL was resolved for file {file_id} ({path}) in package {package_id}")]
    MissingDownloadUrl {
        package_id: String,
        file_id: String,
        path: String,
    },

    #[error("Failed to download file {file_id} to {output}: {reason}")]
    Transfer {
        file_id: String,
        output: PathBuf,
        reason: String,
    },

    #[error("Refusing to write outside the package directory for {path}: {reason}")]
    UnsafePath { path: String, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("{failed_packages} packages and {failed_files} files failed to download")]
    PartialFailure {
        failed_packages: usize,
        failed_files: usize,
    },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
