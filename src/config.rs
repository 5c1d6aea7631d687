use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::AppError;

/// Where the service listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/";

/// Environment variable prefix, e.g. `CLAIMDESK_BASE_URL`.
pub const ENV_PREFIX: &str = "CLAIMDESK";

/// Client settings shared by the CLI and the browser UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the claim document service. Always ends with `/` so that
    /// endpoint paths join below it.
    pub base_url: Url,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        Ok(Self {
            base_url: normalize_base_url(base_url)?,
        })
    }

    /// Load settings, later sources overriding earlier ones:
    ///
    /// 1. built-in defaults
    /// 2. the TOML file at `path` (optional; a missing file is fine)
    /// 3. `CLAIMDESK_*` environment variables
    pub fn load(path: Option<&Path>) -> Result<Self, AppError> {
        let mut builder = config::Config::builder().set_default("base_url", DEFAULT_BASE_URL)?;

        let file = path.unwrap_or_else(|| Path::new("claimdesk.toml"));
        builder = builder.add_source(config::File::from(file).required(path.is_some()));

        let raw: RawConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Self::new(&raw.base_url)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

/// Parse `raw` and make sure its path ends with `/`.
pub fn normalize_base_url(raw: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| AppError::Config(format!("Invalid base URL '{raw}': {e}")))?;
    if url.cannot_be_a_base() {
        return Err(AppError::Config(format!("Base URL '{raw}' cannot hold paths")));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
