use anyhow::{Context, Result};
use std::path::PathBuf;

pub const HOST_VAR: &str = "TOMATASK_HOST";
pub const PORT_VAR: &str = "TOMATASK_PORT";
pub const DIST_VAR: &str = "TOMATASK_DIST";
pub const ASSETS_VAR: &str = "TOMATASK_ASSETS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub host: String,
    pub port: u16,
    /// Trunk output, holds `index.html` and the wasm bundle.
    pub dist_dir: PathBuf,
    pub assets_dir: PathBuf,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")); // = site/

        let port = match get(PORT_VAR) {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("{PORT_VAR}={raw:?} is not a valid port"))?,
            None => 3000,
        };

        Ok(Self {
            host: get(HOST_VAR).unwrap_or_else(|| "127.0.0.1".to_owned()),
            port,
            dist_dir: get(DIST_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../dist")),
            assets_dir: get(ASSETS_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| root.join("../assets")),
        })
    }
}
