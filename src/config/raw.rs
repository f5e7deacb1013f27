use std::time::Duration;

use duration_str::deserialize_duration;
use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = include_str!("rotaplan.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub webserver: Option<WebServer>,
    pub geocoding: Option<Geocoding>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WebServer {
    pub cors: bool,
}

impl Default for WebServer {
    fn default() -> Self {
        Config::default()
            .webserver
            .expect("Webserver configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Geocoding {
    pub endpoint: String,
    pub user_agent: String,
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_delay: Duration,
    #[serde(deserialize_with = "deserialize_duration")]
    pub request_timeout: Duration,
}

impl Default for Geocoding {
    fn default() -> Self {
        Config::default()
            .geocoding
            .expect("Geocoding configuration")
    }
}
