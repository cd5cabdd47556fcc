use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::RuntimeConfig;

use super::validation::{validate_log_format, validate_remote_url};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Remote store when it answers a ping, local file otherwise.
    Auto,
    Remote,
    Local,
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StoreBackend::Auto => "auto",
            StoreBackend::Remote => "remote",
            StoreBackend::Local => "local",
        };
        f.write_str(name)
    }
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(StoreBackend::Auto),
            "remote" => Ok(StoreBackend::Remote),
            "local" => Ok(StoreBackend::Local),
            other => Err(anyhow!("unknown store_backend '{}'", other)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub admin_password: Option<String>,
    pub store_backend: StoreBackend,
    pub remote_url: Option<String>,
    pub remote_api_key: Option<String>,
    pub local_store_path: String,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub default_event_limit: Option<usize>,
    pub log_format: String,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3234".to_string(),
            admin_password: None,
            store_backend: StoreBackend::Auto,
            remote_url: None,
            remote_api_key: None,
            local_store_path: "./siglon_db.json".to_string(),
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
            default_event_limit: None,
            log_format: "text".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> String {
        env::var("SIGLON_CONFIG").unwrap_or_else(|_| "./config.toml".to_string())
    }

    pub async fn load() -> Result<Self> {
        let path = Self::config_path();
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if fs::try_exists(file_path).await? {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!(path = %path, "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn normalize(&mut self) {
        self.admin_password = normalize_optional(self.admin_password.take());
        self.remote_url = normalize_optional(self.remote_url.take())
            .map(|url| url.trim_end_matches('/').to_string());
        self.remote_api_key = normalize_optional(self.remote_api_key.take());
        self.log_dir = normalize_optional(self.log_dir.take());
        self.log_format = self.log_format.trim().to_lowercase();
        if let Some(limit) = self.default_event_limit {
            if limit == 0 {
                self.default_event_limit = None;
            }
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.local_store_path = resolve_path(base, &self.local_store_path);
        if let Some(dir) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, dir));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.local_store_path.trim().is_empty() {
            return Err(anyhow!("local_store_path must not be empty"));
        }
        validate_log_format(&self.log_format)?;
        match (&self.store_backend, &self.remote_url) {
            (StoreBackend::Remote, None) => {
                return Err(anyhow!("store_backend = \"remote\" requires remote_url"));
            }
            (_, Some(url)) => validate_remote_url(url)?,
            _ => {}
        }
        if self.admin_password.is_none() {
            warn!("admin_password not set, admin endpoints will reject every request");
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            admin_password: self.admin_password.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            default_event_limit: self.default_event_limit,
        }
    }

    pub fn to_remote_config(&self) -> RemoteStoreConfig {
        RemoteStoreConfig {
            url: self.remote_url.clone(),
            api_key: self.remote_api_key.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("SIGLON_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("SIGLON_ADMIN_PASSWORD") {
            self.admin_password = Some(value);
        }
        if let Some(value) = lookup("SIGLON_STORE_BACKEND") {
            match value.parse() {
                Ok(backend) => self.store_backend = backend,
                Err(err) => warn!("ignoring SIGLON_STORE_BACKEND: {}", err),
            }
        }
        if let Some(value) = lookup("SIGLON_REMOTE_URL") {
            self.remote_url = Some(value);
        }
        if let Some(value) = lookup("SIGLON_REMOTE_API_KEY") {
            self.remote_api_key = Some(value);
        }
        if let Some(value) = lookup("SIGLON_LOCAL_STORE_PATH") {
            self.local_store_path = value;
        }
        if let Some(value) = lookup("SIGLON_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("SIGLON_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("SIGLON_DEFAULT_EVENT_LIMIT") {
            self.default_event_limit = value.parse().ok();
        }
        if let Some(value) = lookup("SIGLON_LOG_FORMAT") {
            self.log_format = value;
        }
        if let Some(value) = lookup("SIGLON_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn toml_fills_missing_keys_with_defaults() {
        let config = AppConfig::from_toml(
            r#"
bind_addr = "0.0.0.0:8080"
store_backend = "local"
admin_password = "rahasia"
"#,
        )
        .expect("parse");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.store_backend, StoreBackend::Local);
        assert_eq!(config.admin_password.as_deref(), Some("rahasia"));
        assert_eq!(config.request_timeout_seconds, 15);
        assert_eq!(config.local_store_path, "./siglon_db.json");
    }

    #[test]
    fn overrides_take_precedence() {
        let vars = HashMap::from([
            ("SIGLON_STORE_BACKEND", "remote"),
            ("SIGLON_REMOTE_URL", "https://project.example.co/ "),
            ("SIGLON_DEFAULT_EVENT_LIMIT", "100"),
            ("SIGLON_REQUEST_TIMEOUT_SECONDS", "not-a-number"),
        ]);
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));
        config.normalize();

        assert_eq!(config.store_backend, StoreBackend::Remote);
        assert_eq!(config.remote_url.as_deref(), Some("https://project.example.co"));
        assert_eq!(config.default_event_limit, Some(100));
        assert_eq!(config.request_timeout_seconds, 15);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn remote_backend_requires_url() {
        let config = AppConfig {
            store_backend: StoreBackend::Remote,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_values_normalize_to_none() {
        let mut config = AppConfig {
            admin_password: Some("  ".to_string()),
            remote_api_key: Some(String::new()),
            default_event_limit: Some(0),
            log_format: " JSON ".to_string(),
            ..AppConfig::default()
        };
        config.normalize();
        assert_eq!(config.admin_password, None);
        assert_eq!(config.remote_api_key, None);
        assert_eq!(config.default_event_limit, None);
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn relative_paths_resolve_against_config_dir() {
        let mut config = AppConfig {
            log_dir: Some("logs".to_string()),
            ..AppConfig::default()
        };
        config.resolve_paths(Some(Path::new("/etc/siglon")));
        assert_eq!(config.local_store_path, "/etc/siglon/./siglon_db.json");
        assert_eq!(config.log_dir.as_deref(), Some("/etc/siglon/logs"));
    }
}
