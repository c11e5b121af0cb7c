use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rasp_core::slack::{dispatch, Dispatch};
use tracing::{debug, info};

use crate::error::AppError;
use crate::relay::spawn_status_relay;
use crate::state::AppState;

/// POST /slack — Slack Events API endpoint
///
/// Answers the `url_verification` handshake and relays the device status
/// when a message contains every trigger keyword. The relay runs in the
/// background; the 200 does not wait for it.
pub async fn slack_events(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    debug!(body = %String::from_utf8_lossy(&body), "slack request body");

    match dispatch(&body, &app.trigger)? {
        Dispatch::Challenge(resp) => {
            info!("answering url_verification challenge");
            Ok(Json(resp).into_response())
        }
        Dispatch::Message { text, triggered } => {
            if triggered {
                info!(text = %text, "trigger matched, relaying status");
                spawn_status_relay(app.store.clone(), app.relay.clone());
            } else {
                debug!(text = %text, "trigger not matched");
            }
            Ok(StatusCode::OK.into_response())
        }
    }
}
