use config::{FileStoredFormat, Format, Map, Value, ValueKind};
use ini::{Ini, ParseOption};
use std::error::Error;

/// INI reader matching Python's `configparser` defaults: values are taken
/// verbatim (no quote or backslash-escape handling) and option names are
/// lower-cased. Section names keep their case.
#[derive(Clone, Copy, Debug)]
pub struct VerbatimIni;

impl Format for VerbatimIni {
    fn parse(
        &self,
        uri: Option<&String>,
        text: &str,
    ) -> Result<Map<String, Value>, Box<dyn Error + Send + Sync>> {
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            ..ParseOption::default()
        };
        let ini = Ini::load_from_str_opt(text, options)?;

        let option = |key: &str, value: &str| {
            (
                key.to_lowercase(),
                Value::new(uri, ValueKind::String(value.to_owned())),
            )
        };

        let mut map: Map<String, Value> = Map::new();
        for (section, properties) in ini.iter() {
            match section {
                Some(section) => {
                    let table: Map<String, Value> = properties
                        .iter()
                        .map(|(key, value)| option(key, value))
                        .collect();
                    map.insert(section.to_owned(), Value::new(uri, ValueKind::Table(table)));
                }
                None => map.extend(properties.iter().map(|(key, value)| option(key, value))),
            }
        }
        Ok(map)
    }
}

impl FileStoredFormat for VerbatimIni {
    fn file_extensions(&self) -> &'static [&'static str] {
        &["ini"]
    }
}
