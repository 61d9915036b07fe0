use crate::api::HttpOptions;
use crate::cli::args::Command;
use crate::cli::params::{DownloadParams, ListParams};
use crate::config::{ApiConfig, PackageRef, load_config};
use crate::download::FetchOptions;
use crate::error::NdaFetchError;
use crate::package::package_dir;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Download(DownloadParams),
    List(ListParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, NdaFetchError> {
    match command {
        Command::Download {
            config_path,
            output_dir,
            api_url,
            packages,
            keep_going,
            timeout_secs,
            connect_timeout_secs,
        } => {
            for (name, value) in [
                ("timeout", timeout_secs),
                ("connect-timeout", Some(connect_timeout_secs)),
            ] {
                if value == Some(0) {
                    return Err(NdaFetchError::CliArgumentValidation {
                        details: format!("{name} must be greater than 0."),
                    });
                }
            }

            let app_config = load_config(&config_path)?;
            let packages = select_packages(app_config.packages, &packages)?;

            let output_dir = output_dir
                .map(PathBuf::from)
                .or_else(|| app_config.output.map(|output| output.path))
                .ok_or_else(|| NdaFetchError::CliArgumentValidation {
                    details: "No output directory provided. Configure OUT-DIR.path or pass --output-dir."
                        .to_string(),
                })?;

            for package in &packages {
                package_dir(&output_dir, &package.name)?;
            }

            Ok(ResolvedCommand::Download(DownloadParams {
                api: override_api_url(app_config.api, api_url),
                credentials: app_config.credentials,
                packages,
                output_dir,
                http: HttpOptions {
                    connect_timeout: Duration::from_secs(connect_timeout_secs),
                    request_timeout: timeout_secs.map(Duration::from_secs),
                },
                options: FetchOptions { keep_going },
            }))
        }
        Command::List {
            config_path,
            api_url,
            packages,
        } => {
            let app_config = load_config(&config_path)?;
            let packages = select_packages(app_config.packages, &packages)?;

            Ok(ResolvedCommand::List(ListParams {
                api: override_api_url(app_config.api, api_url),
                credentials: app_config.credentials,
                packages,
                http: HttpOptions::default(),
            }))
        }
    }
}

fn override_api_url(api: ApiConfig, api_url: Option<String>) -> ApiConfig {
    match api_url {
        Some(base_url) => ApiConfig { base_url, ..api },
        None => api,
    }
}

/// Keeps the configured order. An empty filter selects every package.
fn select_packages(
    configured: Vec<PackageRef>,
    requested: &[String],
) -> Result<Vec<PackageRef>, NdaFetchError> {
    if configured.is_empty() {
        return Err(NdaFetchError::CliArgumentValidation {
            details: "No packages defined in PACKAGE-INFO".to_string(),
        });
    }
    if let Some(package) = configured
        .iter()
        .find(|package| package.package_id.trim().is_empty())
    {
        return Err(NdaFetchError::CliArgumentValidation {
            details: format!("Package {} has an empty package id", package.name),
        });
    }

    if let Some(unknown) = requested
        .iter()
        .find(|name| !configured.iter().any(|package| &package.name == *name))
    {
        return Err(NdaFetchError::CliArgumentValidation {
            details: format!("Package {} is not defined in PACKAGE-INFO", unknown),
        });
    }

    if requested.is_empty() {
        return Ok(configured);
    }
    Ok(configured
        .into_iter()
        .filter(|package| requested.contains(&package.name))
        .collect())
}
