use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing or malformed.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub db: DbConfig,
    pub port: u16,
    pub rust_log: String,
    /// Directory uploaded CVs are staged in while they are being processed.
    pub upload_dir: PathBuf,
    pub llm_timeout: Duration,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .with_context(|| format!("Required environment variable '{key}' is not set"))
        };
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let upload_dir = lookup("UPLOAD_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| std::env::temp_dir().join("cas-uploads"));

        let llm_timeout_secs = or_default("LLM_TIMEOUT_SECS", "60")
            .parse::<u64>()
            .context("LLM_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            openai_api_key: require("OPENAI_API_KEY")?,
            db: DbConfig {
                user: or_default("DB_USER", "root"),
                password: require("DB_PASSWORD")?,
                host: or_default("DB_HOST", "localhost"),
                port: or_default("DB_PORT", "3306")
                    .parse::<u16>()
                    .context("DB_PORT must be a valid port number")?,
                name: or_default("DB_NAME", "cas_db"),
            },
            port: or_default("PORT", "5000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: or_default("RUST_LOG", "info"),
            upload_dir,
            llm_timeout: Duration::from_secs(llm_timeout_secs),
            max_upload_bytes: or_default("MAX_UPLOAD_BYTES", "10485760")
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a byte count")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_applied_when_optional_vars_missing() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DB_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.db.user, "root");
        assert_eq!(config.db.host, "localhost");
        assert_eq!(config.db.port, 3306);
        assert_eq!(config.db.name, "cas_db");
        assert_eq!(config.port, 5000);
        assert_eq!(config.llm_timeout, Duration::from_secs(60));
        assert_eq!(config.max_upload_bytes, 10 * 1024 * 1024);
        assert!(config.upload_dir.ends_with("cas-uploads"));
    }

    #[test]
    fn test_missing_db_password_fails_startup() {
        let err = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")])).unwrap_err();
        assert!(err.to_string().contains("DB_PASSWORD"));
    }

    #[test]
    fn test_empty_db_password_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DB_PASSWORD", ""),
        ]));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_api_key_fails_startup() {
        let err = Config::from_lookup(lookup_from(&[("DB_PASSWORD", "hunter2")])).unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }

    #[test]
    fn test_overrides_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DB_PASSWORD", "hunter2"),
            ("DB_USER", "cas"),
            ("DB_HOST", "db.internal"),
            ("DB_NAME", "careers"),
            ("PORT", "8081"),
            ("UPLOAD_DIR", "/var/tmp/cv"),
            ("LLM_TIMEOUT_SECS", "15"),
        ]))
        .unwrap();

        assert_eq!(config.db.user, "cas");
        assert_eq!(config.db.host, "db.internal");
        assert_eq!(config.db.name, "careers");
        assert_eq!(config.port, 8081);
        assert_eq!(config.upload_dir, PathBuf::from("/var/tmp/cv"));
        assert_eq!(config.llm_timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let result = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("DB_PASSWORD", "hunter2"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
