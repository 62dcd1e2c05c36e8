//! Client configuration.

use std::{path::Path, time::Duration};

use anyhow::Error;

use figment::{
    Figment,
    providers::{Env, Format as _, Serialized, Toml},
    value::Uncased,
};
use serde::{Deserialize, Serialize};

use roster_model::request::user::DEFAULT_BATCH_SIZE;

/// The public random user API.
pub const DEFAULT_ENDPOINT: &str = "https://random-data-api.com/api/v2";

/// The main configuration struct.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// API access configuration.
    pub api: ApiConfig,
    /// How the list is drawn.
    pub display: DisplayConfig,
}

impl Config {
    /// Loads a config from the environment and a given config path.
    ///
    /// Missing files are not an error; the defaults apply instead.
    pub fn load(config_path: impl AsRef<Path>) -> Result<Config, Error> {
        Config::figment(config_path).extract().map_err(Error::from)
    }

    fn figment(config_path: impl AsRef<Path>) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("ROSTER_").split("__"))
            .merge(
                Env::raw()
                    .only(&["API_ENDPOINT"])
                    .map(|_| Uncased::from("API.ENDPOINT")),
            )
    }
}

/// API connectivity config.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ApiConfig {
    /// The API endpoint, without a trailing slash.
    pub endpoint: String,
    /// How many users a load or refresh asks for.
    #[serde(default = "page_size_default")]
    pub page_size: u32,
    /// Request timeout, in seconds.
    #[serde(default = "timeout_default")]
    pub timeout: u64,
    /// The `User-Agent` sent with every request.
    #[serde(default = "user_agent_default")]
    pub user_agent: String,
}

impl ApiConfig {
    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            page_size: page_size_default(),
            timeout: timeout_default(),
            user_agent: user_agent_default(),
        }
    }
}

fn page_size_default() -> u32 {
    DEFAULT_BATCH_SIZE
}

fn timeout_default() -> u64 {
    10
}

fn user_agent_default() -> String {
    concat!("roster/", env!("CARGO_PKG_VERSION")).to_owned()
}

/// Display settings.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct DisplayConfig {
    /// Where the avatar sits in a row.
    #[serde(default)]
    pub avatar: AvatarPlacement,
    /// Print avatar urls under each row.
    #[serde(default)]
    pub show_avatars: bool,
}

/// The placement of the avatar relative to the name in a row.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarPlacement {
    /// The avatar comes before the name.
    #[default]
    Leading,
    /// The avatar comes after the name.
    Trailing,
}
