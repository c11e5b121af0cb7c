//! Classification of inbound Slack Events API payloads.
//!
//! Slack delivers either a one-time `url_verification` handshake or an
//! `event_callback` for every subscribed event. Both arrive on the same
//! endpoint and are told apart by the top-level `type` field.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RelayError, Result};
use crate::trigger::Trigger;

pub const EVENT_TYPE_MESSAGE: &str = "message";

// ---------------------------------------------------------------------------
// Payload types
// ---------------------------------------------------------------------------

/// Inbound payload, discriminated by the JSON `"type"` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SlackPayload {
    UrlVerification(ChallengeRequest),
    EventCallback(EventCallback),
}

/// `type = "url_verification"` handshake.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChallengeRequest {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub token: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub challenge: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeResponse {
    pub challenge: String,
}

/// `type = "event_callback"` envelope. Absent fields decode as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventCallback {
    #[serde(default)]
    pub event: CallbackEvent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CallbackEvent {
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

/// Slack sometimes sends `null` for string fields; treat it like absence.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl SlackPayload {
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|e| RelayError::UnrecognizedPayload(e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// What the webhook endpoint should do with a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Echo the challenge back with 200.
    Challenge(ChallengeResponse),
    /// A chat message arrived; `triggered` says whether to relay the status.
    Message { text: String, triggered: bool },
}

/// Classify a raw webhook body.
///
/// Errors are terminal for the request: an unrecognized payload or an event
/// callback whose event is not a `message`.
pub fn dispatch(body: &[u8], trigger: &Trigger) -> Result<Dispatch> {
    match SlackPayload::from_slice(body)? {
        SlackPayload::UrlVerification(req) => Ok(Dispatch::Challenge(ChallengeResponse {
            challenge: req.challenge,
        })),
        SlackPayload::EventCallback(cb) => {
            if cb.event.kind != EVENT_TYPE_MESSAGE {
                return Err(RelayError::UnexpectedEventType(cb.event.kind));
            }
            let triggered = trigger.matches(&cb.event.text);
            Ok(Dispatch::Message {
                text: cb.event.text,
                triggered,
            })
        }
    }
}
