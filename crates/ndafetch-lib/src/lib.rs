pub mod api;
pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod package;

pub use config::Config;
pub use error::NdaFetchError;
