use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::fixture::{MESSAGES_MODULE, PASSWORD_HASH};

const APP_NAME: &str = "yellow-seed";
const CONFIG_FILE: &str = "seed.yaml";
const CONFIG_ENV: &str = "YELLOW_SEED_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminConfig {
    pub username: String,
    /// Falls back to the shared `password_hash` when absent.
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModuleConfig {
    pub name: String,
    pub connection_string: String,
}

/// Fixture constants. Every field has a default, so an empty or partial
/// `seed.yaml` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub core_database: String,
    pub module_password: String,
    pub password_hash: String,
    pub extra_domain: String,
    pub admins: Vec<AdminConfig>,
    pub modules: Vec<ModuleConfig>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            core_database: "yellow".to_string(),
            module_password: "password".to_string(),
            password_hash: PASSWORD_HASH.to_string(),
            extra_domain: "example.com".to_string(),
            admins: vec![AdminConfig {
                username: "admin".to_string(),
                password: None,
            }],
            modules: vec![ModuleConfig {
                name: MESSAGES_MODULE.to_string(),
                connection_string: "ws://localhost:25001/".to_string(),
            }],
        }
    }
}

impl SeedConfig {
    /// Load from `$YELLOW_SEED_CONFIG` or the app config directory. No
    /// config directory means no config file, so the defaults apply.
    pub fn load() -> Result<Self> {
        match config_path(std::env::var_os(CONFIG_ENV), app_config_dir()) {
            Some(path) => Self::load_from(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns defaults if the file (or its directory) does not exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Ok(Self::default());
        }
        let data = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let config: SeedConfig = serde_yaml::from_slice(&data)
            .with_context(|| format!("failed to parse YAML at {}", path.display()))?;
        Ok(config)
    }
}

/// The application config directory, whether or not it exists.
pub fn app_config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs_next::home_dir().map(|h| h.join(".config"))
    } else {
        dirs_next::config_dir()
    };
    base.map(|p| p.join(APP_NAME))
}

fn config_path(env: Option<OsString>, dir: Option<PathBuf>) -> Option<PathBuf> {
    match env {
        Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
        _ => dir.map(|d| d.join(CONFIG_FILE)),
    }
}
