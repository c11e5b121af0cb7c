use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use rasp_core::StatusReport;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

/// POST /rasp/status — record the latest device status report
pub async fn post_status(
    State(app): State<AppState>,
    body: Bytes,
) -> Result<StatusCode, AppError> {
    let report = StatusReport::from_slice(&body)?;
    let status = app.store.set(report);
    info!(
        cpu = %status.cpu,
        disk = %status.disk,
        memory = %status.memory,
        boot_time = %status.boot_time,
        "device status updated"
    );
    Ok(StatusCode::NO_CONTENT)
}
