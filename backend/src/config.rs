// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::{
    net::SocketAddr,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use snafu::prelude::*;

/// Environment variable holding the JSON config.
pub const CONFIG_ENV: &str = "RWAI_BACKEND_CONFIG";

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ConfigError {
    #[snafu(context(false), display("Failed to read config file: {source}"))]
    Io { source: std::io::Error },

    #[snafu(context(false), display("Failed to read config environment variable: {source}"))]
    Env { source: std::env::VarError },

    #[snafu(context(false), display("Failed to parse config: {source}"))]
    Serde { source: serde_json::Error },
}

fn default_address() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_content_path() -> PathBuf {
    PathBuf::from("Content")
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    /// Address the server listens on.
    #[serde(rename = "address", default = "default_address")]
    pub address: SocketAddr,

    /// Directory with the synced content files.
    #[serde(rename = "content_path", default = "default_content_path")]
    pub content_path: PathBuf,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self { address: default_address(), content_path: default_content_path() }
    }
}

impl BackendConfig {
    pub fn parse(data: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::parse(&data)
    }

    pub fn load_from_env() -> Result<Self, ConfigError> {
        let data = std::env::var(CONFIG_ENV)?;
        Self::parse(&data)
    }

    /// Loads the config from the file if given, then from the environment, then falls back to
    /// the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        if let Some(path) = path {
            match Self::load_from_file(path) {
                Ok(ok) => return ok,
                Err(err) => tracing::warn!("{}: {err}", path.display()),
            }
        }

        match Self::load_from_env() {
            Ok(ok) => return ok,
            Err(ConfigError::Env { source: std::env::VarError::NotPresent }) => {}
            Err(err) => tracing::warn!("{CONFIG_ENV}: {err}"),
        }

        tracing::info!("Using default config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let config =
            BackendConfig::parse(r#"{"address": "127.0.0.1:3000", "content_path": "/srv/content"}"#)
                .unwrap();
        assert_eq!(config.address, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert_eq!(config.content_path, PathBuf::from("/srv/content"));

        let config = BackendConfig::parse(r#"{"content_path": "site"}"#).unwrap();
        assert_eq!(config.address, default_address());

        assert!(matches!(BackendConfig::parse("{"), Err(ConfigError::Serde { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backend.json");
        std::fs::write(&path, r#"{"address": "127.0.0.1:9000"}"#).unwrap();

        let config = BackendConfig::load_or_default(Some(&path));
        assert_eq!(config.address, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(config.content_path, default_content_path());

        assert!(matches!(
            BackendConfig::load_from_file(&dir.path().join("missing.json")),
            Err(ConfigError::Io { .. })
        ));
    }
}
