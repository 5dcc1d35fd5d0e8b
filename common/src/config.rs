use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::{activity::DEFAULT_RECENT_CAP, feed::DEFAULT_PAGE_SIZE, tips::default_tips};

// home screen configuration
//
// every field has a default, so an empty document is a valid config
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HomeConfig {
    // prepended to every browser storage key
    pub storage_prefix: String,

    // documents requested per feed page
    pub page_size: u32,

    // activity counts above this show as "<cap>+"
    pub recent_cap: usize,

    // tip catalog; an empty list means the built-in tips
    pub tips: Vec<String>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        HomeConfig {
            storage_prefix: String::from("docs_"),
            page_size: DEFAULT_PAGE_SIZE,
            recent_cap: DEFAULT_RECENT_CAP,
            tips: default_tips(),
        }
    }
}

// the settings live under a [config] table so the file can carry other tables
#[derive(Debug, Default, Deserialize, Serialize)]
struct TomlConfigFile {
    #[serde(default)]
    config: HomeConfig,
}

pub fn parse_config(doc: &str) -> anyhow::Result<HomeConfig> {
    let data: TomlConfigFile = toml::from_str(doc)?;
    let mut config = data.config;

    if config.page_size == 0 {
        return Err(anyhow::Error::msg("page_size must be at least 1"));
    }

    if config.recent_cap == 0 {
        return Err(anyhow::Error::msg("recent_cap must be at least 1"));
    }

    if config.tips.is_empty() {
        config.tips = default_tips();
    }

    Ok(config)
}

// like parse_config, but a broken file falls back to the defaults
pub fn load_config(doc: &str) -> HomeConfig {
    match parse_config(doc) {
        Ok(config) => {
            debug!("successfully parsed config");
            config
        }
        Err(err) => {
            error!("failed to parse config, using defaults: {err}");
            HomeConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tips::DEFAULT_TIPS;

    #[test]
    fn empty_is_default() {
        assert_eq!(parse_config("").unwrap(), HomeConfig::default());
        assert_eq!(parse_config("[config]\n").unwrap(), HomeConfig::default());
    }

    #[test]
    fn defaults_match_literal_ui() {
        let config = HomeConfig::default();
        assert_eq!(config.recent_cap, 10);
        assert_eq!(config.page_size, 25);
        assert_eq!(config.tips.len(), DEFAULT_TIPS.len());
    }

    #[test]
    fn overrides() {
        let config = parse_config(
            r#"
            [config]
            storage_prefix = "wiki_"
            page_size = 10
            recent_cap = 99
            tips = ["one", "two"]
            "#,
        )
        .unwrap();

        assert_eq!(config.storage_prefix, "wiki_");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.recent_cap, 99);
        assert_eq!(config.tips, vec!["one", "two"]);
    }

    #[test]
    fn empty_tips_fall_back() {
        let config = parse_config("[config]\ntips = []\n").unwrap();
        assert_eq!(config.tips.len(), DEFAULT_TIPS.len());
    }

    #[test]
    fn rejects_zero_page_size() {
        assert!(parse_config("[config]\npage_size = 0\n").is_err());
    }

    #[test]
    fn load_falls_back_on_garbage() {
        assert_eq!(load_config("[config\n"), HomeConfig::default());
        assert_eq!(load_config("[config]\npage_size = \"many\"\n"), HomeConfig::default());
    }
}
