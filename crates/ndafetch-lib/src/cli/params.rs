use crate::api::HttpOptions;
use crate::config::{ApiConfig, Credentials, PackageRef};
use crate::download::FetchOptions;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct DownloadParams {
    pub api: ApiConfig,
    pub credentials: Credentials,
    pub packages: Vec<PackageRef>,
    pub output_dir: PathBuf,
    pub http: HttpOptions,
    pub options: FetchOptions,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub api: ApiConfig,
    pub credentials: Credentials,
    pub packages: Vec<PackageRef>,
    pub http: HttpOptions,
}
