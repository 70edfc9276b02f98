//! Preview server settings.
//!
//! `folio.toml` is optional and flat: the server keys (`root`, `profile`,
//! `bind`, `log`) sit next to the page keys of [`SiteConfig`].
//!
//! ```toml
//! root = "public"
//! bind = "0.0.0.0:9090"
//! popover_project = "TechMemory"
//! ```
//!
//! `FOLIO_SITE_ROOT`, `FOLIO_PROFILE`, `FOLIO_BIND` and `FOLIO_LOG` (or
//! `RUST_LOG`) win over the file.

use std::net::{AddrParseError, SocketAddr};
use std::path::{Path, PathBuf};

use folio_app::config::SiteConfig;
use serde::Deserialize;

const CONFIG_FILE: &str = "folio.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory served as the site root.
    pub root: PathBuf,
    /// Profile document on disk; falls back to the page's `profile_url`.
    pub profile: Option<PathBuf>,
    pub bind: SocketAddr,
    /// `EnvFilter` directive.
    pub log: String,
    #[serde(flatten)]
    pub page: SiteConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            profile: None,
            bind: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log: "foliod=info,folio=info,tower_http=debug".to_string(),
            page: SiteConfig::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read {path}")]
    Read {
        path: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid bind address {value:?}")]
    Bind {
        value: String,
        #[source]
        source: AddrParseError,
    },
    #[error("profile path must not be empty")]
    EmptyProfile,
}

impl Config {
    /// Read `folio.toml` from the working directory, then the environment.
    ///
    /// # Errors
    ///
    /// Fails when the file is unreadable or malformed, when `FOLIO_BIND` is
    /// not a socket address, or when the profile path is empty.
    pub fn load() -> Result<Self, ConfigError> {
        let text = match std::fs::read_to_string(CONFIG_FILE) {
            Ok(text) => Some(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => {
                return Err(ConfigError::Read {
                    path: CONFIG_FILE,
                    source,
                });
            }
        };
        Self::resolve(text.as_deref(), |key| std::env::var(key).ok())
    }

    fn resolve(
        text: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match text {
            Some(text) => toml::from_str(text)?,
            None => Self::default(),
        };
        if let Some(root) = env("FOLIO_SITE_ROOT") {
            config.root = root.into();
        }
        if let Some(profile) = env("FOLIO_PROFILE") {
            config.profile = Some(profile.into());
        }
        if let Some(value) = env("FOLIO_BIND") {
            config.bind = value
                .parse()
                .map_err(|source| ConfigError::Bind { value, source })?;
        }
        if let Some(filter) = env("RUST_LOG").or_else(|| env("FOLIO_LOG")) {
            config.log = filter;
        }
        if config.profile_file().as_os_str().is_empty() {
            return Err(ConfigError::EmptyProfile);
        }
        Ok(config)
    }

    fn profile_file(&self) -> &Path {
        self.profile
            .as_deref()
            .unwrap_or_else(|| Path::new(&self.page.profile_url))
    }

    /// Profile document path, resolved against the site root.
    #[must_use]
    pub fn profile_path(&self) -> PathBuf {
        self.root.join(self.profile_file())
    }
}
