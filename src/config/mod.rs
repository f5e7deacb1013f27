use std::{env, fs, io::ErrorKind, path::Path, time::Duration};

use anyhow::Result;

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "rotaplan.toml";

const ENV_NAME_GEOCODING_ENDPOINT: &str = "GEOCODING_ENDPOINT";

pub struct Config {
    pub webserver: WebServer,
    pub geocoding: Geocoding,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{DEFAULT_CONFIG_FILE_NAME} not found => load default configuration."
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::from(raw_config);
        if let Ok(endpoint) = env::var(ENV_NAME_GEOCODING_ENDPOINT) {
            cfg.geocoding.endpoint = endpoint;
        }
        Ok(cfg)
    }
}

pub struct WebServer {
    pub cors: bool,
}

pub struct Geocoding {
    pub endpoint: String,
    pub user_agent: String,
    /// Mandatory pause before every provider lookup.
    pub request_delay: Duration,
    pub request_timeout: Duration,
}

impl From<raw::Config> for Config {
    fn from(from: raw::Config) -> Self {
        let raw::Config {
            webserver,
            geocoding,
        } = from;
        let raw::WebServer { cors } = webserver.unwrap_or_default();
        let raw::Geocoding {
            endpoint,
            user_agent,
            request_delay,
            request_timeout,
        } = geocoding.unwrap_or_default();
        Self {
            webserver: WebServer { cors },
            geocoding: Geocoding {
                endpoint,
                user_agent,
                request_delay,
                request_timeout,
            },
        }
    }
}
