use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::label_filter::LabelFilter;

/// Main configuration structure for a relay run.
///
/// Field names follow the flat keys of the YAML files this tool has
/// always read, so existing `etc/*.yml` files keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Project key(s) to watch, comma separated (`PROJ` or `PROJ,OPS`)
    #[serde(default)]
    pub jira_key: String,

    /// Tracker base URL, e.g. `https://jira.example.com`
    #[serde(default)]
    pub jira_url: String,

    /// Page-size hint for the activity feed
    #[serde(default = "default_max_results")]
    pub jira_max_results: u32,

    /// Basic-auth user
    #[serde(default)]
    pub auth_user: String,

    /// Basic-auth password or API token
    #[serde(default)]
    pub auth_password: String,

    /// Label allow-list, comma separated; empty disables label filtering
    #[serde(default)]
    pub jira_labels: String,

    /// Incoming webhook URL
    #[serde(default)]
    pub slack_webhook_url: String,

    /// Channel override sent with each message
    #[serde(default)]
    pub slack_channel: String,

    /// Bot display name
    #[serde(default = "default_slack_username")]
    pub slack_username: String,

    /// Bot icon, e.g. `:jira:`
    #[serde(default = "default_slack_icon_emoji")]
    pub slack_icon_emoji: String,

    /// Attachment sidebar colour
    #[serde(default = "default_slack_color")]
    pub slack_color: String,

    /// Directory holding the checkpoint files
    #[serde(default = "default_var_dir")]
    pub var_dir: PathBuf,

    /// Pause after each delivered notification, in milliseconds
    #[serde(default = "default_notify_interval_ms")]
    pub notify_interval_ms: u64,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

const fn default_max_results() -> u32 {
    40
}

fn default_slack_username() -> String {
    "JIRA".to_string()
}

fn default_slack_icon_emoji() -> String {
    ":jira:".to_string()
}

fn default_slack_color() -> String {
    "#205081".to_string()
}

fn default_var_dir() -> PathBuf {
    PathBuf::from("./var")
}

const fn default_notify_interval_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jira_key: String::new(),
            jira_url: String::new(),
            jira_max_results: default_max_results(),
            auth_user: String::new(),
            auth_password: String::new(),
            jira_labels: String::new(),
            slack_webhook_url: String::new(),
            slack_channel: String::new(),
            slack_username: default_slack_username(),
            slack_icon_emoji: default_slack_icon_emoji(),
            slack_color: default_slack_color(),
            var_dir: default_var_dir(),
            notify_interval_ms: default_notify_interval_ms(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    /// The configured project keys, trimmed, empty entries dropped.
    pub fn project_keys(&self) -> Vec<String> {
        self.jira_key
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Settings for the tracker client.
    pub fn jira_settings(&self) -> JiraSettings {
        JiraSettings {
            base_url: self.jira_url.trim_end_matches('/').to_string(),
            project_keys: self.project_keys(),
            max_results: self.jira_max_results,
            credentials: Credentials {
                user: self.auth_user.clone(),
                password: self.auth_password.clone(),
            },
        }
    }

    /// Settings for the webhook client.
    pub fn webhook_settings(&self) -> WebhookSettings {
        WebhookSettings {
            url: self.slack_webhook_url.clone(),
            channel: self.slack_channel.clone(),
            username: self.slack_username.clone(),
            icon_emoji: self.slack_icon_emoji.clone(),
        }
    }

    /// The label allow-list, or `None` when filtering is disabled.
    pub fn label_filter(&self) -> Option<LabelFilter> {
        LabelFilter::parse(&self.jira_labels)
    }

    /// Checkpoint file for this project: `<var_dir>/last_publish.<jira_key>.json`.
    pub fn checkpoint_path(&self) -> PathBuf {
        self.var_dir
            .join(format!("last_publish.{}.json", self.jira_key.trim()))
    }

    /// Courtesy pause between notifications.
    pub const fn notify_interval(&self) -> Duration {
        Duration::from_millis(self.notify_interval_ms)
    }
}

/// Basic-auth credentials for the tracker.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// What the tracker client needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JiraSettings {
    /// Base URL without trailing slash
    pub base_url: String,
    pub project_keys: Vec<String>,
    /// Initial page-size hint
    pub max_results: u32,
    pub credentials: Credentials,
}

/// What the webhook client needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookSettings {
    pub url: String,
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for log files; stdout only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}
