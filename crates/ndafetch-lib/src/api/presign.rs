use super::{ApiClient, PresignedUrlsResponse};
use crate::error::NdaFetchError;
use crate::package::PackageFiles;

/// Requests presigned URLs for every file of the package in one batch and
/// attaches them to the matching records. Files the server did not return a
/// URL for stay unresolved and fail when they are downloaded.
pub async fn resolve_download_urls(
    client: &ApiClient,
    package_id: &str,
    files: &mut PackageFiles,
) -> Result<(), NdaFetchError> {
    let resolution_error = |reason: String| NdaFetchError::Resolution {
        package_id: package_id.to_string(),
        reason,
    };

    let url = client.endpoint(&["package", package_id, "files", "batchGeneratePresignedUrls"]);
    let file_ids = files.file_ids();
    tracing::debug!(package_id, url = %url, files = file_ids.len(), "Resolving download URLs");

    let response: PresignedUrlsResponse = client
        .fetch_json(client.post(url).json(&file_ids))
        .await
        .map_err(resolution_error)?;

    files
        .attach_download_urls(response.presigned_urls)
        .map_err(|file_id| {
            resolution_error(format!(
                "Server returned a URL for file {} which was not requested",
                file_id
            ))
        })?;

    let unresolved = files
        .records()
        .filter(|record| record.download_url.is_none())
        .count();
    if unresolved > 0 {
        tracing::warn!(package_id, unresolved, "Some files did not receive a download URL");
    }
    Ok(())
}
