use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::fetch::FetchOptions;

/// Global configuration loaded from `~/.config/pagegrab/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagegrabConfig {
    /// Seconds allowed for TCP/TLS connection establishment.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for one whole request; expiry surfaces as a timeout
    /// failure.
    pub request_timeout_secs: u64,
    /// Redirect-chain bound before a transfer fails.
    pub max_redirects: u32,
    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for PagegrabConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            max_redirects: 10,
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("pagegrab/{}", env!("CARGO_PKG_VERSION"))
}

impl PagegrabConfig {
    /// Network-client options derived from this config.
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            timeout: Duration::from_secs(self.request_timeout_secs),
            max_redirects: self.max_redirects,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagegrab")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PagegrabConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PagegrabConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PagegrabConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PagegrabConfig::default();
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.request_timeout_secs, 300);
        assert_eq!(cfg.max_redirects, 10);
        assert!(cfg.user_agent.starts_with("pagegrab/"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PagegrabConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PagegrabConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
        assert_eq!(parsed.max_redirects, cfg.max_redirects);
        assert_eq!(parsed.user_agent, cfg.user_agent);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            connect_timeout_secs = 5
            request_timeout_secs = 60
            max_redirects = 3
        "#;
        let cfg: PagegrabConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.request_timeout_secs, 60);
        assert_eq!(cfg.max_redirects, 3);
        // user_agent falls back to the built-in default.
        assert!(cfg.user_agent.starts_with("pagegrab/"));
    }

    #[test]
    fn fetch_options_carry_the_configured_bounds() {
        let mut cfg = PagegrabConfig::default();
        cfg.connect_timeout_secs = 2;
        cfg.request_timeout_secs = 20;
        let options = cfg.fetch_options();
        assert_eq!(options.connect_timeout, Duration::from_secs(2));
        assert_eq!(options.timeout, Duration::from_secs(20));
        assert_eq!(options.max_redirects, cfg.max_redirects);
    }
}
