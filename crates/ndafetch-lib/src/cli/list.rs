use crate::api::{ApiClient, authenticate, list_package_files};
use crate::cli::ListParams;
use crate::error::NdaFetchError;

pub async fn run_list(params: ListParams) -> Result<(), NdaFetchError> {
    let ListParams {
        api,
        credentials,
        packages,
        http,
    } = params;

    let client = ApiClient::new(&api, credentials, &http)?;
    authenticate(&client).await?;

    for package in &packages {
        let files = list_package_files(&client, &package.package_id).await?;
        if files.is_empty() {
            tracing::warn!(package = %package.name, "Package has no files");
        }
        for record in files.records() {
            println!("{}\t{}\t{}", package.name, record.file_id, record.relative_path);
        }
    }

    Ok(())
}
