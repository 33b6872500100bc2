use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use thiserror::Error;

use crate::domain::models::config::Config;

/// Prefix of environment overrides, e.g. `JIRA2SLACK_AUTH_PASSWORD`.
pub const ENV_PREFIX: &str = "JIRA2SLACK_";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("jira_key cannot be empty")]
    EmptyJiraKey,

    #[error("jira_url cannot be empty")]
    EmptyJiraUrl,

    #[error("slack_webhook_url cannot be empty")]
    EmptyWebhookUrl,

    #[error("Invalid jira_max_results: 0. Must be at least 1")]
    InvalidMaxResults,

    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `base` file, usually `etc/default.yml` (optional)
    /// 3. `run` file naming the project (required)
    /// 4. Environment variables (`JIRA2SLACK_*` prefix, highest priority)
    pub fn load(base: &Path, run: &Path) -> Result<Config> {
        if !run.is_file() {
            return Err(ConfigError::MissingFile(run.to_path_buf()).into());
        }

        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Yaml::file(base))
            .merge(Yaml::file(run))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .with_context(|| format!("Failed to load config from {}", run.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        if config.project_keys().is_empty() {
            return Err(ConfigError::EmptyJiraKey);
        }

        if config.jira_url.trim().is_empty() {
            return Err(ConfigError::EmptyJiraUrl);
        }

        if config.slack_webhook_url.trim().is_empty() {
            return Err(ConfigError::EmptyWebhookUrl);
        }

        if config.jira_max_results == 0 {
            return Err(ConfigError::InvalidMaxResults);
        }

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidRotation(config.logging.rotation.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn valid_config() -> Config {
        Config {
            jira_key: "PROJ".to_string(),
            jira_url: "https://jira.example.com".to_string(),
            slack_webhook_url: "https://hooks.slack.com/services/T000/B000/XXXX".to_string(),
            ..Default::default()
        }
    }

    fn yaml_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.jira_max_results, 40);
        assert_eq!(config.notify_interval_ms, 1000);
        assert_eq!(config.var_dir, PathBuf::from("./var"));
        assert_eq!(config.logging.level, "info");
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyJiraKey)
        ));
    }

    #[test]
    fn test_yaml_parsing() {
        let yaml = r"
jira_key: PROJ
jira_url: https://jira.example.com
jira_max_results: 20
auth_user: alice
auth_password: secret
jira_labels: backend,infra
slack_webhook_url: https://hooks.slack.com/services/T000/B000/XXXX
slack_channel: '#dev'
logging:
  level: debug
  format: json
";

        let config: Config = serde_yaml::from_str(yaml).expect("YAML should parse");

        assert_eq!(config.jira_key, "PROJ");
        assert_eq!(config.jira_max_results, 20);
        assert_eq!(config.auth_user, "alice");
        assert_eq!(config.slack_channel, "#dev");
        assert_eq!(config.slack_username, "JIRA");
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
        assert_eq!(config.logging.rotation, "daily");

        ConfigLoader::validate(&config).expect("Parsed config should be valid");
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(ConfigLoader::validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_validate_blank_key_list() {
        let config = Config {
            jira_key: " , ".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyJiraKey)
        ));
    }

    #[test]
    fn test_validate_empty_url() {
        let config = Config {
            jira_url: String::new(),
            ..valid_config()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyJiraUrl)
        ));
    }

    #[test]
    fn test_validate_empty_webhook() {
        let config = Config {
            slack_webhook_url: "  ".to_string(),
            ..valid_config()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::EmptyWebhookUrl)
        ));
    }

    #[test]
    fn test_validate_zero_max_results() {
        let config = Config {
            jira_max_results: 0,
            ..valid_config()
        };
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidMaxResults)
        ));
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = valid_config();
        config.logging.level = "invalid".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogLevel(level)) => assert_eq!(level, "invalid"),
            other => panic!("Expected InvalidLogLevel error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_log_format() {
        let mut config = valid_config();
        config.logging.format = "xml".to_string();

        match ConfigLoader::validate(&config) {
            Err(ConfigError::InvalidLogFormat(format)) => assert_eq!(format, "xml"),
            other => panic!("Expected InvalidLogFormat error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_invalid_rotation() {
        let mut config = valid_config();
        config.logging.rotation = "weekly".to_string();

        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigError::InvalidRotation(_))
        ));
    }

    #[test]
    fn test_missing_run_file() {
        let base = yaml_file("jira_url: https://jira.example.com\n");
        let err = ConfigLoader::load(base.path(), Path::new("/nonexistent/run.yml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingFile(_))
        ));
    }

    #[test]
    fn test_hierarchical_merging() {
        let base = yaml_file(
            "jira_url: https://jira.example.com\n\
             slack_webhook_url: https://hooks.slack.com/services/T000/B000/XXXX\n\
             jira_max_results: 30\n\
             logging:\n  level: info\n  format: json\n",
        );
        let run = yaml_file("jira_key: PROJ\njira_max_results: 50\nlogging:\n  level: debug\n");

        temp_env::with_vars_unset(
            ["JIRA2SLACK_JIRA_MAX_RESULTS", "JIRA2SLACK_LOGGING__LEVEL"],
            || {
                let config = ConfigLoader::load(base.path(), run.path()).unwrap();

                assert_eq!(config.jira_key, "PROJ");
                assert_eq!(config.jira_max_results, 50, "Run file should win");
                assert_eq!(
                    config.logging.level, "debug",
                    "Run file should win for nested fields"
                );
                assert_eq!(
                    config.logging.format, "json",
                    "Base value should persist when not overridden"
                );
                assert_eq!(config.jira_url, "https://jira.example.com");
            },
        );
    }

    #[test]
    fn test_missing_base_file_is_optional() {
        let run = yaml_file(
            "jira_key: PROJ\n\
             jira_url: https://jira.example.com\n\
             slack_webhook_url: https://hooks.slack.com/services/T000/B000/XXXX\n",
        );
        let config = ConfigLoader::load(Path::new("/nonexistent/default.yml"), run.path()).unwrap();
        assert_eq!(config.project_keys(), vec!["PROJ"]);
    }

    #[test]
    fn test_env_override() {
        let run = yaml_file(
            "jira_key: PROJ\n\
             jira_url: https://jira.example.com\n\
             auth_password: from-file\n\
             slack_webhook_url: https://hooks.slack.com/services/T000/B000/XXXX\n",
        );

        temp_env::with_vars(
            [
                ("JIRA2SLACK_AUTH_PASSWORD", Some("from-env")),
                ("JIRA2SLACK_LOGGING__LEVEL", Some("warn")),
            ],
            || {
                let config =
                    ConfigLoader::load(Path::new("/nonexistent/default.yml"), run.path()).unwrap();
                assert_eq!(config.auth_password, "from-env");
                assert_eq!(config.logging.level, "warn");
            },
        );
    }
}
