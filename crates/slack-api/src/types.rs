use serde::{Deserialize, Serialize};

/// Body of `chat.postMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMessage {
    pub channel: String,
    pub text: String,
}

impl PostMessage {
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
        }
    }
}

/// Response envelope shared by Web API methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostMessageResponse {
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
    /// Message timestamp, Slack's id for the posted message.
    #[serde(default)]
    pub ts: Option<String>,
    #[serde(default)]
    pub warning: Option<String>,
}
