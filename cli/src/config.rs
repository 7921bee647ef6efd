use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtlConfig {
    /// Server URL; `api/` is appended to form the API base path
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log directory for file-based logging; stderr when unset
    pub log_dir: Option<String>,

    /// Log file name for file-based logging
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_server_url() -> String {
    "http://127.0.0.1:9000".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_file() -> String {
    "cluster-ctl.log".to_string()
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            server_url: default_server_url(),
            log_level: default_log_level(),
            log_dir: None,
            log_file: default_log_file(),
        }
    }
}

impl CtlConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: CtlConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Missing file means defaults; an unreadable or invalid one is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
