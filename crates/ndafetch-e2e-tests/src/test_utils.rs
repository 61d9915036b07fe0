use httpmock::MockServer;
use ndafetch_lib::api::HttpOptions;
use ndafetch_lib::cli::DownloadParams;
use ndafetch_lib::config::{ApiConfig, Config, Credentials, OutputConfig, PackageRef};
use ndafetch_lib::download::FetchOptions;
use std::path::{Path, PathBuf};

/// `Basic base64("user:pass")`
pub const BASIC_AUTH: &str = "Basic dXNlcjpwYXNz";

pub fn test_credentials() -> Credentials {
    Credentials {
        username: "user".to_string(),
        password: "pass".to_string(),
    }
}

pub fn package_refs(packages: &[(&str, &str)]) -> Vec<PackageRef> {
    packages
        .iter()
        .map(|(name, package_id)| PackageRef {
            name: name.to_string(),
            package_id: package_id.to_string(),
        })
        .collect()
}

pub fn api_config(server: &MockServer) -> ApiConfig {
    ApiConfig {
        base_url: server.url("/api"),
        user_agent: "ndafetch-e2e-tests".to_string(),
    }
}

pub fn create_download_params(
    server: &MockServer,
    output_dir: &Path,
    packages: &[(&str, &str)],
) -> DownloadParams {
    DownloadParams {
        api: api_config(server),
        credentials: test_credentials(),
        packages: package_refs(packages),
        output_dir: output_dir.to_path_buf(),
        http: HttpOptions::default(),
        options: FetchOptions::default(),
    }
}

/// Writes a JSON configuration file pointing at the mock server.
pub fn write_test_config(
    dir: &Path,
    server: &MockServer,
    output_dir: &Path,
    packages: &[(&str, &str)],
) -> eyre::Result<PathBuf> {
    let config = Config {
        credentials: test_credentials(),
        packages: package_refs(packages),
        output: Some(OutputConfig {
            path: output_dir.to_path_buf(),
        }),
        api: api_config(server),
    };

    let config_path = dir.join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    Ok(config_path)
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("ndafetch_lib=debug,ndafetch_e2e_tests=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
