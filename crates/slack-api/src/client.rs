use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::error::{Result, SlackError};
use crate::types::{PostMessage, PostMessageResponse};

const JSON_UTF8: &str = "application/json; charset=utf-8";

/// Authenticated Slack Web API client. Cheap to clone.
#[derive(Debug, Clone)]
pub struct SlackClient {
    http: reqwest::Client,
    api_base: String,
    token: String,
}

impl SlackClient {
    /// `api_base` is the Web API root, e.g. `https://slack.com/api`.
    /// `timeout` bounds each request end to end.
    pub fn new(token: impl Into<String>, api_base: &str, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            api_base: api_base.trim_end_matches('/').to_string(),
            token: token.into(),
        })
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/{method}", self.api_base)
    }

    /// POST `chat.postMessage`.
    pub async fn post_message(&self, msg: &PostMessage) -> Result<PostMessageResponse> {
        let body = serde_json::to_vec(msg)?;
        let resp = self
            .http
            .post(self.method_url("chat.postMessage"))
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        tracing::debug!(status = status.as_u16(), body = %text, "slack api response");

        if !status.is_success() {
            return Err(SlackError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let parsed: PostMessageResponse = match serde_json::from_str(&text) {
            Ok(p) => p,
            Err(source) => return Err(SlackError::Decode { body: text, source }),
        };
        if !parsed.ok {
            return Err(SlackError::Api(
                parsed.error.unwrap_or_else(|| "unknown_error".to_string()),
            ));
        }
        if let Some(w) = &parsed.warning {
            tracing::warn!(warning = %w, "slack api warning");
        }
        Ok(parsed)
    }
}
