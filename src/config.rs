//! Configuration loading and validation

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix, e.g. `WALLET__DISPLAY_NAME__MAX_LEN=40`.
pub const ENV_PREFIX: &str = "WALLET";

/// Largest `display_name.max_len` a configuration may set. Stored names are
/// checked against this bound when read back.
pub const DISPLAY_NAME_MAX_LEN_LIMIT: usize = 255;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub display_name: DisplayNameRules,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rules applied when a raw string becomes a [`DisplayName`](crate::DisplayName).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayNameRules {
    #[serde(default = "default_max_len")]
    pub max_len: usize,
}

impl DisplayNameRules {
    /// Rules a name written under any valid configuration satisfies.
    pub fn widest() -> Self {
        Self {
            max_len: DISPLAY_NAME_MAX_LEN_LIMIT,
        }
    }
}

impl Default for DisplayNameRules {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

fn default_max_len() -> usize {
    30
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl WalletConfig {
    /// Load configuration from file and environment variables
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let settings = config::Config::builder()
            .set_default("display_name.max_len", default_max_len() as i64)?
            .set_default("logging.filter", default_log_filter())?
            .set_default("logging.json", false)?
            // Load from file if exists
            .add_source(config::File::from(path).required(false))
            // Override with environment variables (prefix WALLET__)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let config: WalletConfig = settings
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let max_len = self.display_name.max_len;
        if max_len == 0 || max_len > DISPLAY_NAME_MAX_LEN_LIMIT {
            anyhow::bail!(
                "display_name.max_len must be between 1 and {}, got {}",
                DISPLAY_NAME_MAX_LEN_LIMIT,
                max_len
            );
        }
        if self.logging.filter.trim().is_empty() {
            anyhow::bail!("logging.filter must not be empty");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // `load` reads the process environment, which one test modifies.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn env_lock() -> MutexGuard<'static, ()> {
        ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[test]
    fn test_defaults() {
        let config = WalletConfig::default();
        assert_eq!(config.display_name.max_len, 30);
        assert_eq!(config.logging.filter, "info");
        assert!(!config.logging.json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let config = WalletConfig::load(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.display_name.max_len, 30);
    }

    #[test]
    fn test_load_from_file() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[display_name]\nmax_len = 12\n\n[logging]\nfilter = \"debug\"\njson = true"
        )
        .unwrap();

        let config = WalletConfig::load(&path).unwrap();
        assert_eq!(config.display_name.max_len, 12);
        assert_eq!(config.logging.filter, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_rejects_zero_max_len() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.toml");
        std::fs::write(&path, "[display_name]\nmax_len = 0\n").unwrap();
        assert!(WalletConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_rejects_max_len_above_limit() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.toml");
        std::fs::write(&path, "[display_name]\nmax_len = 256\n").unwrap();
        assert!(WalletConfig::load(&path).is_err());
    }

    #[test]
    fn test_env_overrides_file() {
        let _env = env_lock();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallet.toml");
        std::fs::write(&path, "[display_name]\nmax_len = 20\n").unwrap();

        std::env::set_var("WALLET__DISPLAY_NAME__MAX_LEN", "12");
        let loaded = WalletConfig::load(&path);
        std::env::remove_var("WALLET__DISPLAY_NAME__MAX_LEN");

        assert_eq!(loaded.unwrap().display_name.max_len, 12);
        assert_eq!(WalletConfig::load(&path).unwrap().display_name.max_len, 20);
    }
}
