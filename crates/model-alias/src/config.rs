use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

use crate::table::AliasEntry;

#[derive(Debug, Default, Deserialize)]
pub struct GatewayConfig {
    pub logging: Option<LoggingCfg>,
    /// Channel -> ordered alias entries. Channel keys are normalized when the
    /// table is compiled.
    #[serde(default, rename = "oauth-model-alias", alias = "oauth_model_alias")]
    pub oauth_model_alias: HashMap<String, Vec<AliasEntry>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingCfg {
    pub to_file: Option<bool>,
    pub dir: Option<String>,
    pub json: Option<bool>,
    pub compact: Option<bool>,
    pub pretty: Option<bool>,
    pub level: Option<String>,
}

/// Parse a config file; `.yaml`/`.yml` as YAML, anything else as TOML.
pub fn load_config(path: &Path) -> anyhow::Result<GatewayConfig> {
    let s = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let is_yaml = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));
    let cfg: GatewayConfig = if is_yaml {
        serde_yaml::from_str(&s).with_context(|| format!("parsing YAML {}", path.display()))?
    } else {
        toml::from_str(&s).with_context(|| format!("parsing TOML {}", path.display()))?
    };
    Ok(cfg)
}

/// `<home>/config.toml`, or `None` when it does not exist.
pub fn load_user_config(home: &Path) -> anyhow::Result<Option<GatewayConfig>> {
    let path = home.join("config.toml");
    if !path.exists() {
        return Ok(None);
    }
    load_config(&path).map(Some)
}

pub fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Ok(home) = std::env::var("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}
