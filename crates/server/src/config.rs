use std::{fs, path::PathBuf};

use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_bind: String,
    pub static_dir: Option<PathBuf>,
    pub provider_base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "127.0.0.1:5000".into(),
            static_dir: None,
            provider_base_url: "https://api.groq.com/openai/v1".into(),
            model: "moonshotai/kimi-k2-instruct-0905".into(),
            api_key: None,
            body_limit_bytes: 64 * 1024,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    bind_addr: Option<String>,
    static_dir: Option<PathBuf>,
    provider_base_url: Option<String>,
    model: Option<String>,
    body_limit_bytes: Option<usize>,
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_config(&mut settings, &raw);
    }
    apply_env(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub(crate) fn apply_file_config(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<FileConfig>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(error) => {
            warn!(file = SETTINGS_FILE, %error, "ignoring unreadable settings file");
            return;
        }
    };

    if let Some(v) = file_cfg.bind_addr {
        settings.server_bind = v;
    }
    if let Some(v) = file_cfg.static_dir {
        settings.static_dir = Some(v);
    }
    if let Some(v) = file_cfg.provider_base_url {
        settings.provider_base_url = v;
    }
    if let Some(v) = file_cfg.model {
        settings.model = v;
    }
    if let Some(v) = file_cfg.body_limit_bytes {
        settings.body_limit_bytes = v;
    }
}

/// Environment overrides; `APP__*` names win over the plain aliases.
pub(crate) fn apply_env(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let first = |keys: &[&str]| {
        keys.iter()
            .rev()
            .find_map(|key| lookup(key).filter(|v| !v.trim().is_empty()))
    };

    if let Some(v) = first(&["SERVER_BIND", "APP__BIND_ADDR"]) {
        settings.server_bind = v;
    }
    if let Some(v) = first(&["APP__STATIC_DIR"]) {
        settings.static_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = first(&["APP__PROVIDER_BASE_URL"]) {
        settings.provider_base_url = v;
    }
    if let Some(v) = first(&["APP__MODEL"]) {
        settings.model = v;
    }
    if let Some(v) = first(&["GROQ_API_KEY", "APP__API_KEY"]) {
        settings.api_key = Some(v);
    }
    if let Some(v) = first(&["APP__BODY_LIMIT_BYTES"]) {
        match v.parse::<usize>() {
            Ok(parsed) => settings.body_limit_bytes = parsed,
            Err(error) => warn!(value = %v, %error, "ignoring invalid APP__BODY_LIMIT_BYTES"),
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
