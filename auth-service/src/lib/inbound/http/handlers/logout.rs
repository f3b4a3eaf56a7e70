use axum::extract::State;
use axum::Json;
use axum_extra::extract::CookieJar;

use super::MessageResponse;
use crate::domain::user::ports::UserRepository;
use crate::inbound::http::cookies;
use crate::inbound::http::router::AppState;

/// End the session by expiring the cookie on the client.
///
/// Idempotent: there is no server-side session to tear down, so calling
/// this without a prior login yields the same response.
pub async fn logout<R: UserRepository>(
    State(state): State<AppState<R>>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.add(cookies::removal_cookie(state.secure_cookies));

    (jar, Json(MessageResponse::new("logout successful")))
}
