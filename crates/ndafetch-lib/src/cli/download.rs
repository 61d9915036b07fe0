use crate::api::{ApiClient, authenticate};
use crate::cli::DownloadParams;
use crate::download::fetch_package;
use crate::error::NdaFetchError;

pub async fn run_download(params: DownloadParams) -> Result<(), NdaFetchError> {
    let DownloadParams {
        api,
        credentials,
        packages,
        output_dir,
        http,
        options,
    } = params;

    let client = ApiClient::new(&api, credentials, &http)?;
    tracing::info!("Authenticating against {}", client.base_url());
    authenticate(&client).await?;

    let mut failed_packages = 0;
    let mut failed_files = 0;

    // Packages are processed strictly one after another.
    for package in &packages {
        tracing::info!(
            package_id = %package.package_id,
            "Processing package {}",
            package.name
        );

        match fetch_package(&client, package, &output_dir, &options).await {
            Ok(report) => failed_files += report.failed,
            Err(err) if options.keep_going => {
                tracing::warn!(package = %package.name, "Package failed: {}", err);
                failed_packages += 1;
            }
            Err(err) => return Err(err),
        }
    }

    if failed_packages > 0 || failed_files > 0 {
        return Err(NdaFetchError::PartialFailure {
            failed_packages,
            failed_files,
        });
    }

    tracing::info!(
        "Downloaded {} packages into {}",
        packages.len(),
        output_dir.display()
    );
    Ok(())
}
