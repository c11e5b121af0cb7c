use anyhow::{Context, Result};
use rasp_core::config::RelayConfig;
use std::path::Path;

/// Values from flags or environment variables. `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub port: Option<u16>,
    pub slack_token: Option<String>,
    pub slack_channel: Option<String>,
    pub slack_api_base: Option<String>,
}

/// Resolve the effective config.
///
/// Priority:
/// 1. flags / environment variables
/// 2. the YAML file at `path`, when given
/// 3. built-in defaults
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<RelayConfig> {
    let mut config = match path {
        Some(p) => RelayConfig::load(p)
            .with_context(|| format!("failed to load config from {}", p.display()))?,
        None => RelayConfig::default(),
    };

    if let Some(port) = overrides.port {
        config.port = port;
    }
    if let Some(token) = overrides.slack_token {
        config.slack.token = Some(token);
    }
    if let Some(channel) = overrides.slack_channel {
        config.slack.channel = Some(channel);
    }
    if let Some(base) = overrides.slack_api_base {
        config.slack.api_base = base;
    }

    config.validate()?;
    Ok(config)
}
