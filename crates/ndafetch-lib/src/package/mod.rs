mod layout;
mod types;

pub use layout::{file_output_path, package_dir, sanitize_relative_path};
pub use types::{FileId, FileRecord, PackageFiles};
