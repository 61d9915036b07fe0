use super::{ApiClient, PackageFilesResponse};
use crate::error::NdaFetchError;
use crate::package::PackageFiles;

pub async fn list_package_files(
    client: &ApiClient,
    package_id: &str,
) -> Result<PackageFiles, NdaFetchError> {
    let url = client.endpoint(&["package", package_id, "files"]);
    tracing::debug!(package_id, url = %url, "Listing package files");

    let response: PackageFilesResponse = client
        .fetch_json(client.get(url))
        .await
        .map_err(|reason| NdaFetchError::Listing {
            package_id: package_id.to_string(),
            reason,
        })?;

    let files = PackageFiles::from_entries(response.results);
    tracing::info!(package_id, files = files.len(), "Listed package files");
    Ok(files)
}
