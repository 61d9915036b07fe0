use super::Config;
use super::verbatim_ini::VerbatimIni;
use crate::error::NdaFetchError;
use config::Config as ConfigBuilder;
use std::path::Path;

pub fn load_config(config_path: &str) -> Result<Config, NdaFetchError> {
    let builder = ConfigBuilder::builder();
    let builder = if is_ini(config_path) {
        builder.add_source(config::File::new(config_path, VerbatimIni))
    } else {
        builder.add_source(config::File::with_name(config_path))
    };

    builder.build()?.try_deserialize().map_err(Into::into)
}

fn is_ini(config_path: &str) -> bool {
    Path::new(config_path)
        .extension()
        .is_some_and(|extension| extension.eq_ignore_ascii_case("ini"))
}
