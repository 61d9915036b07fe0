use crate::package::FileId;
use serde::{Deserialize, Serialize};

/// Body of `GET /package/{id}/files`. Entries carry more fields than these;
/// the rest are ignored.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PackageFilesResponse {
    pub results: Vec<PackageFileEntry>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PackageFileEntry {
    pub package_file_id: FileId,
    pub download_alias: String,
}

/// Body of `POST /package/{id}/files/batchGeneratePresignedUrls`.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PresignedUrlsResponse {
    pub presigned_urls: Vec<PresignedUrl>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PresignedUrl {
    pub package_file_id: FileId,
    #[serde(rename = "downloadURL", default)]
    pub download_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_files_response_ignores_extra_fields() {
        let body = r#"{
            "results": [
                {"package_file_id": 1, "download_alias": "sub/x.txt", "file_size": 10},
                {"package_file_id": 2, "download_alias": "y.txt", "s3_url": "s3://b/y"}
            ],
            "page": 1
        }"#;

        let response: PackageFilesResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[0].package_file_id, FileId::Numeric(1));
        assert_eq!(response.results[0].download_alias, "sub/x.txt");
    }

    #[test]
    fn test_parse_presigned_urls_with_null_url() {
        let body = r#"{"presignedUrls": [
            {"package_file_id": 1, "downloadURL": "https://bucket/x?sig=1"},
            {"package_file_id": 2, "downloadURL": null},
            {"package_file_id": 3}
        ]}"#;

        let response: PresignedUrlsResponse = serde_json::from_str(body).unwrap();

        let urls: Vec<Option<&str>> = response
            .presigned_urls
            .iter()
            .map(|url| url.download_url.as_deref())
            .collect();
        assert_eq!(urls, vec![Some("https://bucket/x?sig=1"), None, None]);
    }

    #[test]
    fn test_missing_results_is_an_error() {
        assert!(serde_json::from_str::<PackageFilesResponse>(r#"{"error": "nope"}"#).is_err());
    }
}
