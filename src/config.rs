use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AppConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Base directory holding one subdirectory per mini app
    #[serde(default = "default_miniapps_dir")]
    pub miniapps_dir: PathBuf,
    #[serde(default)]
    pub verbose_logging: bool,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_miniapps_dir() -> PathBuf {
    PathBuf::from("public").join("miniapps")
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            miniapps_dir: default_miniapps_dir(),
            verbose_logging: false,
        }
    }
}

fn get_config_path() -> PathBuf {
    PathBuf::from("config.json")
}

/// Load configuration from config.json in the working directory, falling
/// back to defaults. Environment variables take precedence over the file.
///
/// Call this after `logging::init` so the malformed-file warning is not
/// dropped by an uninitialized log facade.
pub fn load_config() -> AppConfig {
    let mut config = load_config_from(&get_config_path());
    apply_env_overrides(&mut config);
    config
}

/// Load configuration from a specific file path.
///
/// A missing file is normal (first run). A malformed file is logged and
/// replaced by defaults so startup never fails on bad configuration.
fn load_config_from(config_path: &Path) -> AppConfig {
    if !config_path.exists() {
        return AppConfig::default();
    }

    match fs::read_to_string(config_path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to parse {:?}, using defaults: {}", config_path, e);
                AppConfig::default()
            }
        },
        Err(e) => {
            log::warn!("Failed to read {:?}, using defaults: {}", config_path, e);
            AppConfig::default()
        }
    }
}

fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides(
        config,
        std::env::var("SUPERAPP_HOST").ok(),
        std::env::var("SUPERAPP_PORT").ok(),
        std::env::var("SUPERAPP_MINIAPPS_DIR").ok(),
    );
}

fn apply_overrides(
    config: &mut AppConfig,
    host: Option<String>,
    port: Option<String>,
    miniapps_dir: Option<String>,
) {
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        match port.parse::<u16>() {
            Ok(port) => config.port = port,
            Err(_) => log::warn!("Ignoring invalid SUPERAPP_PORT value: {}", port),
        }
    }
    if let Some(dir) = miniapps_dir {
        config.miniapps_dir = PathBuf::from(dir);
    }
}
