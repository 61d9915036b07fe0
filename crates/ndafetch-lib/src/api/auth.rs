use super::ApiClient;
use crate::error::NdaFetchError;
use reqwest::StatusCode;

/// Checks the credentials against `GET /package/auth`. Anything but 200 fails the run.
pub async fn authenticate(client: &ApiClient) -> Result<(), NdaFetchError> {
    let url = client.endpoint(&["package", "auth"]);
    tracing::debug!(url = %url, "Authenticating");

    let response = client.get(url).send().await?;
    let status = response.status();
    if status != StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        tracing::error!(status = status.as_u16(), "Failed to authenticate");
        return Err(NdaFetchError::Authentication {
            status: status.as_u16(),
            body,
        });
    }

    tracing::info!("Passed authentication");
    Ok(())
}
