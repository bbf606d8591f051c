//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Journal configuration.
    #[serde(default)]
    pub journal: JournalConfig,
    /// Report configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

/// Journal configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct JournalConfig {
    /// Maximum number of entries returned by recent-entry listings.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            recent_limit: default_recent_limit(),
        }
    }
}

fn default_recent_limit() -> usize {
    100
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// ISO 4217 currency code stamped on generated reports.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "ARS".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PARTIDA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            journal: JournalConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.journal.recent_limit, 100);
        assert_eq!(cfg.report.currency, "ARS");
    }

    #[test]
    fn test_load_with_defaults() {
        temp_env::with_vars_unset(["PARTIDA__JOURNAL__RECENT_LIMIT"], || {
            let cfg = AppConfig::load().expect("config should load without any sources");
            assert_eq!(cfg.journal.recent_limit, 100);
        });
    }

    #[test]
    fn test_env_override() {
        temp_env::with_vars(
            [
                ("PARTIDA__JOURNAL__RECENT_LIMIT", Some("25")),
                ("PARTIDA__REPORT__CURRENCY", Some("USD")),
            ],
            || {
                let cfg = AppConfig::load().expect("config should load from env");
                assert_eq!(cfg.journal.recent_limit, 25);
                assert_eq!(cfg.report.currency, "USD");
            },
        );
    }
}
