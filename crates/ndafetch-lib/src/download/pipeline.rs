use super::materialize_file;
use super::types::{FetchOptions, PackageReport};
use crate::api::{ApiClient, list_package_files, resolve_download_urls};
use crate::config::PackageRef;
use crate::error::NdaFetchError;
use crate::package::package_dir;
use std::path::Path;

/// List, resolve and download every file of one package, in that order.
pub async fn fetch_package(
    client: &ApiClient,
    package: &PackageRef,
    output_root: &Path,
    options: &FetchOptions,
) -> Result<PackageReport, NdaFetchError> {
    let package_dir = package_dir(output_root, &package.name)?;
    let package_id = package.package_id.as_str();

    let mut files = list_package_files(client, package_id).await?;
    resolve_download_urls(client, package_id, &mut files).await?;

    let mut report = PackageReport::default();
    for record in files {
        match materialize_file(client.http(), package_id, &package_dir, &record).await {
            Ok(path) => report.written.push(path),
            Err(err) if options.keep_going => {
                tracing::warn!(
                    package = %package.name,
                    file_id = %record.file_id,
                    "Download failed: {}",
                    err
                );
                report.failed += 1;
            }
            Err(err) => return Err(err),
        }
    }

    tracing::info!(
        package = %package.name,
        package_id,
        written = report.written.len(),
        failed = report.failed,
        "Finished package"
    );
    Ok(report)
}
