//! Layered configuration for `capstat`.
//!
//! Values are merged in order of increasing precedence:
//!
//! 1. Built-in defaults ([`Config::default`]),
//! 2. A configuration file (TOML, YAML or JSON, chosen by extension),
//! 3. Environment variables prefixed with `CAPSTAT_`, using `__` to reach
//!    nested keys (`CAPSTAT_VOCABULARY__PENDING=U-`).

pub mod error;

use std::path::{Path, PathBuf};

use capstat_extract::Vocabulary;
use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{ErrorKind, Result};

pub const ENV_PREFIX: &str = "CAPSTAT_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    pub log_level: String,
    /// Site-language markers for the page heuristics.
    pub vocabulary: Vocabulary,
}
impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            vocabulary: Vocabulary::default(),
        }
    }
}
impl Config {
    /// Location of the per-user configuration file, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "capstat").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Loads the configuration.
    ///
    /// An explicit `path` must exist; without one, the per-user file is used
    /// when present and silently skipped otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let figment = match path {
            Some(path) if !path.is_file() => exn::bail!(ErrorKind::NotFound(path.to_path_buf())),
            Some(path) => Self::with_file(Self::defaults(), path)?,
            None => match Self::default_path().filter(|path| path.is_file()) {
                Some(path) => Self::with_file(Self::defaults(), &path)?,
                None => Self::defaults(),
            },
        };
        match figment.merge(Env::prefixed(ENV_PREFIX).split("__")).extract::<Self>() {
            Ok(config) => {
                tracing::debug!(?config, "configuration loaded");
                Ok(config)
            },
            Err(err) => exn::bail!(ErrorKind::Invalid(err.to_string())),
        }
    }

    fn defaults() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
    }

    fn with_file(figment: Figment, path: &Path) -> Result<Figment> {
        let extension = path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase);
        Ok(match extension.as_deref() {
            Some("toml") => figment.merge(Toml::file(path)),
            Some("yaml" | "yml") => figment.merge(Yaml::file(path)),
            Some("json") => figment.merge(Json::file(path)),
            _ => exn::bail!(ErrorKind::UnsupportedFormat(path.to_path_buf())),
        })
    }
}
