use crate::error::NdaFetchError;
use crate::package::{FileRecord, file_output_path};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWriteExt, BufWriter};

/// Streams one resolved file to `<package_dir>/<download alias>`, creating
/// missing parent directories. An existing file is overwritten; a failed
/// transfer leaves whatever was written so far in place.
pub async fn materialize_file(
    http: &reqwest::Client,
    package_id: &str,
    package_dir: &Path,
    record: &FileRecord,
) -> Result<PathBuf, NdaFetchError> {
    let download_url = record.download_url.as_deref().ok_or_else(|| {
        NdaFetchError::MissingDownloadUrl {
            package_id: package_id.to_string(),
            file_id: record.file_id.to_string(),
            path: record.relative_path.clone(),
        }
    })?;

    let output_path = file_output_path(package_dir, &record.relative_path)?;
    let transfer_error = |reason: String| NdaFetchError::Transfer {
        file_id: record.file_id.to_string(),
        output: output_path.clone(),
        reason,
    };

    if let Some(parent) = output_path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            transfer_error(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let response = http
        .get(download_url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|e| transfer_error(format!("Request failed: {}", e)))?;

    let file = tokio::fs::File::create(&output_path)
        .await
        .map_err(|e| transfer_error(format!("Failed to create output file: {}", e)))?;
    let mut writer = BufWriter::new(file);

    tracing::info!(file_id = %record.file_id, "Writing to: {}", output_path.display());

    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| transfer_error(format!("Failed to read body: {}", e)))?;
        writer
            .write_all(&chunk)
            .await
            .map_err(|e| transfer_error(format!("Failed to write: {}", e)))?;
    }

    writer
        .flush()
        .await
        .map_err(|e| transfer_error(format!("Failed to flush: {}", e)))?;

    tracing::info!(file_id = %record.file_id, "Finished writing to {}", output_path.display());
    Ok(output_path)
}
