use axum::extract::Request;
use axum::extract::State;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde_json::json;

use crate::domain::user::models::Role;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::cookies::SESSION_COOKIE;
use crate::inbound::http::router::AppState;

/// Extension type holding the validated session identity
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub name: String,
    pub role: Role,
}

/// Middleware validating the session cookie on protected routes.
///
/// Decodes the token, checks signature and expiry, and stores the session
/// identity in request extensions for downstream handlers.
pub async fn authenticate<R: UserRepository>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| unauthorized("Missing session cookie"))?;

    let claims = state.authenticator.validate_token(&token).map_err(|e| {
        tracing::warn!(error = %e, "Session token validation failed");
        unauthorized("Invalid or expired token")
    })?;

    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::warn!(error = %e, "Unknown role in session token");
        unauthorized("Invalid token format")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        name: claims.sub,
        role,
    });

    Ok(next.run(req).await)
}

/// Middleware gating admin-only routes.
///
/// Runs after `authenticate`; rejects any session whose role is not admin.
pub async fn require_admin(req: Request, next: Next) -> Result<Response, Response> {
    let user = req
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| unauthorized("Missing session"))?;

    if !user.role.is_admin() {
        return Err((
            StatusCode::FORBIDDEN,
            Json(json!({
                "error": "admin privileges required"
            })),
        )
            .into_response());
    }

    Ok(next.run(req).await)
}

fn unauthorized(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": message
        })),
    )
        .into_response()
}
