use crate::error::{RelayError, Result};
use crate::trigger::{default_keywords, Trigger};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SLACK_API_BASE: &str = "https://slack.com/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// SlackConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlackConfig {
    /// Bot token sent as `Authorization: Bearer <token>`.
    #[serde(default)]
    pub token: Option<String>,
    /// Channel id the status is posted to.
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_base() -> String {
    DEFAULT_SLACK_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            channel: None,
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SlackConfig {
    /// Token and channel, when both are configured and non-empty.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let token = self.token.as_deref().filter(|t| !t.is_empty())?;
        let channel = self.channel.as_deref().filter(|c| !c.is_empty())?;
        Some((token, channel))
    }
}

// ---------------------------------------------------------------------------
// TriggerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
        }
    }
}

// ---------------------------------------------------------------------------
// RelayConfig
// ---------------------------------------------------------------------------

/// Settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub slack: SlackConfig,
    #[serde(default)]
    pub trigger: TriggerConfig,
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            slack: SlackConfig::default(),
            trigger: TriggerConfig::default(),
        }
    }
}

impl RelayConfig {
    /// Parse a YAML config file. An empty file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config = if data.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(&data)?
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slack.timeout_secs == 0 {
            return Err(RelayError::InvalidConfig(
                "slack.timeout_secs must be greater than zero".into(),
            ));
        }
        if self.slack.api_base.trim().is_empty() {
            return Err(RelayError::InvalidConfig(
                "slack.api_base must not be empty".into(),
            ));
        }
        self.trigger()?;
        Ok(())
    }

    pub fn trigger(&self) -> Result<Trigger> {
        Trigger::new(self.trigger.keywords.clone()).ok_or_else(|| {
            RelayError::InvalidConfig("trigger.keywords must be non-empty strings".into())
        })
    }

    /// YAML rendering with the bot token masked.
    pub fn to_redacted_yaml(&self) -> Result<String> {
        let mut shown = self.clone();
        if shown.slack.token.is_some() {
            shown.slack.token = Some("********".into());
        }
        Ok(serde_yaml::to_string(&shown)?)
    }
}
