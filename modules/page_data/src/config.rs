//! Configuration for the page data module

use figment::providers::{Format, Serialized, Yaml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Page data configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base URL that relative request URLs are resolved against
    #[serde(default)]
    pub base_url: Option<String>,

    /// User-Agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers sent with every request
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: default_user_agent(),
            default_headers: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Load from a YAML file layered over the defaults
    pub fn from_yaml_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()?;
        Ok(cfg)
    }

    /// Load from a YAML document layered over the defaults
    pub fn from_yaml_str(yaml: &str) -> anyhow::Result<Self> {
        let cfg = Figment::from(Serialized::defaults(Config::default()))
            .merge(Yaml::string(yaml))
            .extract()?;
        Ok(cfg)
    }
}

fn default_user_agent() -> String {
    format!("page_data/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_apply_to_empty_document() {
        let cfg = Config::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, Config::default());
        assert!(cfg.user_agent.starts_with("page_data/"));
    }

    #[test]
    fn yaml_overrides_defaults() {
        let cfg = Config::from_yaml_str(
            "base_url: https://cms.example.com\n\
             default_headers:\n  Accept-Language: en\n",
        )
        .unwrap();
        assert_eq!(cfg.base_url.as_deref(), Some("https://cms.example.com"));
        assert_eq!(cfg.default_headers.get("Accept-Language").map(String::as_str), Some("en"));
        assert_eq!(cfg.user_agent, default_user_agent());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "base_url: http://localhost:8080").unwrap();

        let cfg = Config::from_yaml_file(file.path()).unwrap();

        assert_eq!(cfg.base_url.as_deref(), Some("http://localhost:8080"));
        assert!(cfg.default_headers.is_empty());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Config::from_yaml_str("retries: 3\n").is_err());
    }
}
