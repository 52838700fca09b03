use anyhow::Context;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use crate::colors::Palette;


#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    pub irc: IrcSettings,
    pub command_prefix: String,
    pub database_path: PathBuf,
    pub web_api: WebApiSettings,
    pub steamdb_url: String,
    pub colors: Palette,
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IrcSettings {
    pub server: String,
    pub port: u16,
    pub use_tls: bool,
    pub nickname: String,
    pub password: Option<String>,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WebApiSettings {
    pub base_url: String,
    pub key: Option<String>,
    pub timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        BotConfig {
            irc: IrcSettings::default(),
            command_prefix: "!".to_owned(),
            database_path: PathBuf::from("resources/steamdb.db"),
            web_api: WebApiSettings::default(),
            steamdb_url: "https://steamdb.info/".to_owned(),
            colors: Palette::default(),
            log_level: "info".to_owned(),
        }
    }
}

impl Default for IrcSettings {
    fn default() -> Self {
        IrcSettings {
            server: "irc.libera.chat".to_owned(),
            port: 6697,
            use_tls: true,
            nickname: "SteamDB".to_owned(),
            password: None,
            channels: Vec::new(),
        }
    }
}

impl Default for WebApiSettings {
    fn default() -> Self {
        WebApiSettings {
            base_url: "https://api.steampowered.com/".to_owned(),
            key: None,
            timeout_secs: 5,
        }
    }
}

impl BotConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read config file {}", path.as_ref().display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: BotConfig = toml::from_str(content).context("cannot parse config")?;
        if config.command_prefix.is_empty() {
            anyhow::bail!("command_prefix must not be empty");
        }
        Ok(config)
    }

    pub fn log_level(&self) -> anyhow::Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| anyhow::anyhow!("unknown log level '{}'", self.log_level))
    }
}

impl WebApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
