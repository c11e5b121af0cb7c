//! `slack-api` — the slice of the Slack Web API used by the relay.
//!
//! Only `chat.postMessage` is implemented. Requests carry the bot token as a
//! bearer header and a JSON body; Slack answers application-level failures
//! with HTTP 200 and `"ok": false`, which [`SlackClient`] surfaces as
//! [`SlackError::Api`].
//!
//! ```rust,ignore
//! use slack_api::{PostMessage, SlackClient};
//! use std::time::Duration;
//!
//! let client = SlackClient::new("xoxb-…", "https://slack.com/api", Duration::from_secs(10))?;
//! client.post_message(&PostMessage::new("C0123", "hello")).await?;
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::SlackClient;
pub use error::{Result, SlackError};
pub use types::{PostMessage, PostMessageResponse};
