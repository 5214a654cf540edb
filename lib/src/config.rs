use serde::Deserialize;

use crate::api;
use crate::Error;

pub const DEFAULT_PATH: &str = "/etc/sendinblue/sendinblue.toml";
const ENV_PREFIX: &str = "SENDINBLUE";

/// Settings used to build a `Client`.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ClientConfig {
    pub api_key: Option<String>,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request timeout, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    api::SENDINBLUE_SMTP_EMAIL.to_string()
}

fn default_timeout() -> u64 {
    api::SENDINBLUE_REQUEST_TIMEOUT
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Loads client config from the filesystem and merges it with any
/// environment variables prefixed with SENDINBLUE_ (`SENDINBLUE_API_KEY`,
/// `SENDINBLUE_ENDPOINT`, `SENDINBLUE_TIMEOUT_SECS`).
///
/// A missing file is not an error; a malformed one is.
pub fn load_config(path: Option<&str>) -> Result<ClientConfig, Error> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path.unwrap_or(DEFAULT_PATH)).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
        .build()?;

    let config: ClientConfig = settings.try_deserialize()?;

    if config.api_key.is_none() {
        log::warn!("No Sendinblue API key configured");
    }

    Ok(config)
}
