use axum::extract::State;
use axum::Json;

use super::ApiError;
use super::MessageResponse;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

/// Bulk delete of every non-admin account. Admin only (enforced by
/// middleware). Irreversible; the affected-row count is logged, not
/// returned.
pub async fn delete_non_admins<R: UserRepository>(
    State(state): State<AppState<R>>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.user_service.delete_non_admins().await?;

    Ok(Json(MessageResponse::new(
        "all non-admin users have been deleted",
    )))
}
