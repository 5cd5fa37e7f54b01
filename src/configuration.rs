use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use url::Url;

pub const DEFAULT_API_BASE_URL: &str = "https://www.sankavollerei.com/";

#[derive(Deserialize, Debug)]
pub struct Settings {
    pub api_base_url: Url,
    #[serde(default)]
    pub locale: Locale,
}

/// Language of user-facing messages.
#[derive(Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Id,
}

impl Settings {
    pub fn new(config_file: &str) -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .add_source(config::File::with_name(config_file).required(false))
            .add_source(Environment::with_prefix("COMIC_READER"))
            .build()?;
        builder.try_deserialize()
    }
}
