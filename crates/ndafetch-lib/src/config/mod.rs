mod loader;
mod model;
mod verbatim_ini;

pub use loader::load_config;
pub use model::{ApiConfig, Config, Credentials, DEFAULT_API_BASE_URL, OutputConfig, PackageRef};
