//! HTTP route handlers for the demo API

use crate::AppState;
use axum::extract::{Json, Path, State};
use axum::Extension;
use jsend::ErrorDetails;
use jsend_axum::{JSendFailure, JSendReply};
use serde_json::{json, Value};
use tracing::{debug, info};

type ReplyResult = Result<(), JSendFailure>;

/// GET /users/:id - Look up a user by numeric id
///
/// Non-numeric ids are rejected with a 422 fail envelope.
pub async fn get_user(
    Extension(reply): Extension<JSendReply>,
    Path(id): Path<String>,
) -> ReplyResult {
    debug!("Handling GET /users/{}", id);

    match id.parse::<u64>() {
        Ok(id) => reply.send_success(json!({"id": id}), None)?,
        Err(_) => reply.send_fail(json!({"id": "must be numeric"}), Some(422))?,
    }
    Ok(())
}

/// POST /envelopes/validate - Check a candidate envelope
///
/// Uses the service's configured validation mode.
pub async fn validate_envelope(
    State(state): State<AppState>,
    Extension(reply): Extension<JSendReply>,
    Json(candidate): Json<Value>,
) -> ReplyResult {
    match state.jsend.parse(&candidate) {
        Ok(envelope) => {
            info!("Validated {} envelope", envelope.status());
            reply.send_success(json!({"valid": true, "status": envelope.status()}), None)?;
        }
        Err(e) => {
            reply.send_fail(json!({"valid": false, "reason": e.to_string()}), None)?;
        }
    }
    Ok(())
}

/// POST /envelopes/forward - Send the request body back as the response
pub async fn forward_envelope(
    Extension(reply): Extension<JSendReply>,
    Json(candidate): Json<Value>,
) -> ReplyResult {
    reply.send(candidate, None)?;
    Ok(())
}

/// GET /boom - Always answers with an error envelope
pub async fn boom(Extension(reply): Extension<JSendReply>) -> ReplyResult {
    reply.send_error(ErrorDetails::new("boom").code(42), None)?;
    Ok(())
}
