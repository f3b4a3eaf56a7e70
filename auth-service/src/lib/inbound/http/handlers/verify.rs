use axum::Json;
use serde::Serialize;

/// Confirm authenticated status.
///
/// The auth middleware has already validated the session cookie by the
/// time this runs; reaching the handler is the proof.
pub async fn verify() -> Json<VerifyResponse> {
    Json(VerifyResponse {
        authenticated: true,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyResponse {
    pub authenticated: bool,
}
