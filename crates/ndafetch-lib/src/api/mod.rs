mod auth;
mod client;
mod files;
mod presign;
mod types;

pub use auth::authenticate;
pub use client::{ApiClient, HttpOptions, basic_authorization};
pub use files::list_package_files;
pub use presign::resolve_download_urls;
pub use types::{PackageFileEntry, PackageFilesResponse, PresignedUrl, PresignedUrlsResponse};
