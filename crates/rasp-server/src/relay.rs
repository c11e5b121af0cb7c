//! Status relay: posts the stored device status to Slack.
//!
//! The webhook handler never awaits the relay. [`spawn_status_relay`] hands
//! it to a background task and failures end up in the log only.

use std::sync::Arc;
use std::time::Duration;

use futures::future::BoxFuture;
use rasp_core::config::SlackConfig;
use rasp_core::{DeviceStatus, StatusStore};
use slack_api::{PostMessage, SlackClient};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Destination for relayed status messages.
pub trait StatusRelay: Send + Sync {
    fn relay(&self, status: DeviceStatus) -> BoxFuture<'_, anyhow::Result<()>>;
}

// ---------------------------------------------------------------------------
// SlackRelay
// ---------------------------------------------------------------------------

/// Posts the status to one channel via `chat.postMessage`.
pub struct SlackRelay {
    client: SlackClient,
    channel: String,
}

impl SlackRelay {
    pub fn new(client: SlackClient, channel: impl Into<String>) -> Self {
        Self {
            client,
            channel: channel.into(),
        }
    }
}

impl StatusRelay for SlackRelay {
    fn relay(&self, status: DeviceStatus) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async move {
            let text = rasp_core::relay::format_status(&status)?;
            let msg = PostMessage::new(self.channel.clone(), text);
            let resp = self.client.post_message(&msg).await?;
            info!(
                channel = %self.channel,
                ts = resp.ts.as_deref().unwrap_or(""),
                "status posted to slack"
            );
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// DisabledRelay
// ---------------------------------------------------------------------------

/// Used when no token or channel is configured; logs and drops.
pub struct DisabledRelay;

impl StatusRelay for DisabledRelay {
    fn relay(&self, _status: DeviceStatus) -> BoxFuture<'_, anyhow::Result<()>> {
        Box::pin(async {
            warn!("slack token or channel not configured, status not relayed");
            Ok(())
        })
    }
}

/// Pick the relay implementation for `cfg`.
pub fn from_config(cfg: &SlackConfig) -> anyhow::Result<Arc<dyn StatusRelay>> {
    match cfg.credentials() {
        Some((token, channel)) => {
            let client = SlackClient::new(
                token,
                &cfg.api_base,
                Duration::from_secs(cfg.timeout_secs),
            )?;
            Ok(Arc::new(SlackRelay::new(client, channel)))
        }
        None => Ok(Arc::new(DisabledRelay)),
    }
}

/// Relay the current contents of `store` on a background task.
pub fn spawn_status_relay(store: StatusStore, relay: Arc<dyn StatusRelay>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let status = store.get();
        if let Err(e) = relay.relay(status).await {
            error!(error = %format!("{e:#}"), "status relay failed");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use rasp_core::StatusReport;

    fn report() -> StatusReport {
        StatusReport {
            cpu: "10%".into(),
            disk: "5%".into(),
            memory: "60%".into(),
            boot_time: "2024-01-01".into(),
        }
    }

    fn slack_config(base: &str) -> SlackConfig {
        SlackConfig {
            token: Some("xoxb-test".into()),
            channel: Some("C123".into()),
            api_base: base.into(),
            timeout_secs: 5,
        }
    }

    #[tokio::test]
    async fn slack_relay_posts_fenced_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_header("authorization", "Bearer xoxb-test")
            .match_body(Matcher::AllOf(vec![
                Matcher::PartialJson(serde_json::json!({ "channel": "C123" })),
                Matcher::Regex("```".into()),
                Matcher::Regex("10%".into()),
                Matcher::Regex("2024-01-01".into()),
            ]))
            .with_body(r#"{"ok":true,"ts":"1.2"}"#)
            .create_async()
            .await;

        let store = StatusStore::new();
        store.set(report());
        let relay = from_config(&slack_config(&server.url())).unwrap();
        relay.relay(store.get()).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn slack_relay_surfaces_api_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat.postMessage")
            .with_body(r#"{"ok":false,"error":"invalid_auth"}"#)
            .create_async()
            .await;

        let relay = from_config(&slack_config(&server.url())).unwrap();
        let err = relay.relay(DeviceStatus::default()).await.unwrap_err();
        assert!(err.to_string().contains("invalid_auth"));
    }

    #[tokio::test]
    async fn spawned_relay_swallows_errors() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat.postMessage")
            .with_status(500)
            .create_async()
            .await;

        let relay = from_config(&slack_config(&server.url())).unwrap();
        spawn_status_relay(StatusStore::new(), relay)
            .await
            .expect("relay task must not panic");
    }

    #[tokio::test]
    async fn missing_credentials_disable_the_relay() {
        let cfg = SlackConfig::default();
        let relay = from_config(&cfg).unwrap();
        relay.relay(DeviceStatus::default()).await.unwrap();
    }
}
