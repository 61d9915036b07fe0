#[allow(clippy::module_inception)]
mod download;
mod pipeline;
mod types;

pub use download::materialize_file;
pub use pipeline::fetch_package;
pub use types::{FetchOptions, PackageReport};
