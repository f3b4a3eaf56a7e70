use auth::SessionClaims;
use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;

use super::ApiError;
use super::MessageResponse;
use crate::domain::user::errors::UserError;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::cookies;
use crate::inbound::http::router::AppState;

/// Credential message returned for both an unknown email and a wrong
/// password, so a caller cannot probe which emails are registered.
const INVALID_CREDENTIALS: &str = "invalid email or password";

/// Verify credentials and start a session.
///
/// On success the signed token lands in the session cookie; no server-side
/// session record is created.
pub async fn login<R: UserRepository>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
    Json(body): Json<LoginRequest>,
) -> Result<(CookieJar, Json<MessageResponse>), ApiError> {
    let user = state
        .user_service
        .get_user_by_email(&body.email)
        .await
        .map_err(|e| match e {
            UserError::NotFound(_) => ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()),
            _ => ApiError::from(e),
        })?;

    let claims = SessionClaims::new(
        user.name.as_str(),
        user.role.as_str(),
        state.jwt_expiration_hours,
    );

    let token = state
        .authenticator
        .authenticate(&body.password, &user.password_hash, &claims)
        .map_err(|e| match e {
            auth::AuthenticationError::InvalidCredentials => {
                ApiError::Unauthorized(INVALID_CREDENTIALS.to_string())
            }
            auth::AuthenticationError::Password(err) => {
                tracing::error!(error = %err, "Password verification failed");
                ApiError::InternalServerError("internal server error".to_string())
            }
            auth::AuthenticationError::Token(err) => {
                tracing::error!(error = %err, "Token generation failed");
                ApiError::InternalServerError("could not generate token".to_string())
            }
        })?;

    let cookie = cookies::session_cookie(token, state.jwt_expiration_hours, state.secure_cookies);

    Ok((
        jar.add(cookie),
        Json(MessageResponse::new("login successful")),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}
