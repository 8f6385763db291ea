use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::header::HeaderLayout;

pub const ENV_PREFIX: &str = "LEDGAMMA_";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub header: HeaderLayout,
}

impl Config {
    /// Defaults, then the user config file if present, then `LEDGAMMA_*`
    /// variables (`__` separates nested keys).
    pub fn load() -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));

        match Self::default_path() {
            Some(path) => {
                tracing::debug!("Reading config from {}", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None => tracing::debug!("No config directory available, using defaults"),
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract()
    }

    pub fn load_from_path(path: &Path) -> Result<Self, figment::Error> {
        tracing::debug!("Reading config from {}", path.display());

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file_exact(path));

        figment.extract()
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "ledgamma", "ledgamma")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).into_owned())
    }

    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
