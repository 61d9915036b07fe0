use crate::config::{ApiConfig, Credentials};
use crate::error::NdaFetchError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

#[derive(Clone, Copy, Debug)]
pub struct HttpOptions {
    pub connect_timeout: Duration,
    /// Applies to every request, including whole file transfers. Unset means no limit.
    pub request_timeout: Option<Duration>,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: None,
        }
    }
}

pub fn basic_authorization(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", STANDARD.encode(raw))
}

/// Client for the package API. Holds the prepared header set; the
/// credentials themselves are dropped once the header is built.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
    headers: HeaderMap,
}

impl ApiClient {
    pub fn new(
        api: &ApiConfig,
        credentials: Credentials,
        options: &HttpOptions,
    ) -> Result<Self, NdaFetchError> {
        let base_url = parse_base_url(&api.base_url)?;

        let mut authorization = HeaderValue::from_str(&basic_authorization(&credentials))
            .map_err(|e| eyre::eyre!("Credentials do not form a valid header: {}", e))?;
        authorization.set_sensitive(true);
        drop(credentials);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, authorization);
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&api.user_agent).map_err(|e| {
                NdaFetchError::CliArgumentValidation {
                    details: format!("Invalid user agent {:?}: {}", api.user_agent, e),
                }
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().connect_timeout(options.connect_timeout);
        if let Some(timeout) = options.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            headers,
        })
    }

    /// Plain client for presigned downloads, which must not carry the API headers.
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejects URLs that cannot carry a path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.http.get(url).headers(self.headers.clone())
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.http.post(url).headers(self.headers.clone())
    }

    /// Sends an API request and decodes a successful JSON body. Failures are
    /// returned as a human-readable reason for the caller to wrap.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, String> {
        let response = request
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;
        let status = response.status();
        let url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| format!("Failed to read response from {}: {}", url, e))?;

        if !status.is_success() {
            return Err(format!("{} returned HTTP {}: {}", url, status, body));
        }

        serde_json::from_str(&body)
            .map_err(|e| format!("Malformed response from {}: {}", url, e))
    }
}

fn parse_base_url(base_url: &str) -> Result<Url, NdaFetchError> {
    let url = Url::parse(base_url).map_err(|e| NdaFetchError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(NdaFetchError::InvalidUrl {
            url: base_url.to_string(),
            reason: "URL cannot carry a path".to_string(),
        });
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        let api = ApiConfig {
            base_url: base_url.to_string(),
            ..ApiConfig::default()
        };
        let credentials = Credentials {
            username: "user".to_string(),
            password: "pass".to_string(),
        };
        ApiClient::new(&api, credentials, &HttpOptions::default()).unwrap()
    }

    #[test]
    fn test_basic_authorization_encodes_user_and_password() {
        let credentials = Credentials {
            username: "user".to_string(),
            password: "pass".to_string(),
        };

        assert_eq!(basic_authorization(&credentials), "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn test_endpoint_appends_segments() {
        let client = client("https://nda.nih.gov/api");

        assert_eq!(
            client.endpoint(&["package", "1234", "files"]).as_str(),
            "https://nda.nih.gov/api/package/1234/files"
        );
    }

    #[test]
    fn test_endpoint_ignores_trailing_slash_and_escapes_ids() {
        let client = client("http://localhost:8080/api/");

        assert_eq!(
            client.endpoint(&["package", "a b/c", "files"]).as_str(),
            "http://localhost:8080/api/package/a%20b%2Fc/files"
        );
    }

    #[test]
    fn test_api_headers_are_attached() {
        let client = client("https://nda.nih.gov/api");
        let request = client
            .get(client.endpoint(&["package", "auth"]))
            .build()
            .unwrap();

        let headers = request.headers();
        assert_eq!(headers[AUTHORIZATION], "Basic dXNlcjpwYXNz");
        assert!(headers[AUTHORIZATION].is_sensitive());
        assert_eq!(headers[ACCEPT], "application/json");
        assert!(headers.contains_key(USER_AGENT));
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        for base_url in ["not a url", "mailto:someone@example.com"] {
            let api = ApiConfig {
                base_url: base_url.to_string(),
                ..ApiConfig::default()
            };
            let credentials = Credentials {
                username: "u".to_string(),
                password: "p".to_string(),
            };

            assert!(matches!(
                ApiClient::new(&api, credentials, &HttpOptions::default()),
                Err(NdaFetchError::InvalidUrl { .. })
            ));
        }
    }
}
