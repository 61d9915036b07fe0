use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://nda.nih.gov/api";

#[derive(Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// A configured package: the logical name names the output subdirectory,
/// the id is used verbatim in API paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageRef {
    pub name: String,
    pub package_id: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("ndafetch/{}", env!("CARGO_PKG_VERSION"))
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(rename = "NIH-CREDENTIALS", alias = "nih-credentials")]
    pub credentials: Credentials,
    #[serde(rename = "PACKAGE-INFO", alias = "package-info", with = "package_refs")]
    pub packages: Vec<PackageRef>,
    #[serde(
        rename = "OUT-DIR",
        alias = "out-dir",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub output: Option<OutputConfig>,
    #[serde(rename = "API", alias = "api", default)]
    pub api: ApiConfig,
}

/// `PACKAGE-INFO` is a plain name -> id table; entries keep the order they
/// appear in the configuration file.
mod package_refs {
    use super::*;

    pub fn serialize<S: Serializer>(
        packages: &[PackageRef],
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(
            packages
                .iter()
                .map(|package| (&package.name, &package.package_id)),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<PackageRef>, D::Error> {
        struct PackageRefsVisitor;

        impl<'de> Visitor<'de> for PackageRefsVisitor {
            type Value = Vec<PackageRef>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of package names to package ids")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut packages = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, package_id)) = map.next_entry::<String, String>()? {
                    packages.push(PackageRef { name, package_id });
                }
                Ok(packages)
            }
        }

        deserializer.deserialize_map(PackageRefsVisitor)
    }
}
