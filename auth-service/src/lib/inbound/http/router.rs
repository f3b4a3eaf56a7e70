use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::delete_users::delete_non_admins;
use super::handlers::list_users::list_users;
use super::handlers::login::login;
use super::handlers::logout::logout;
use super::handlers::register::register;
use super::handlers::verify::verify;
use super::middleware::authenticate as auth_middleware;
use super::middleware::require_admin;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::service::UserService;

pub struct AppState<R: UserRepository> {
    pub user_service: Arc<UserService<R>>,
    pub authenticator: Arc<Authenticator>,
    pub jwt_expiration_hours: i64,
    pub secure_cookies: bool,
}

// Manual impl so R itself does not need Clone
impl<R: UserRepository> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            user_service: Arc::clone(&self.user_service),
            authenticator: Arc::clone(&self.authenticator),
            jwt_expiration_hours: self.jwt_expiration_hours,
            secure_cookies: self.secure_cookies,
        }
    }
}

pub fn create_router<R: UserRepository>(
    user_service: Arc<UserService<R>>,
    authenticator: Arc<Authenticator>,
    jwt_expiration_hours: i64,
    secure_cookies: bool,
) -> Router {
    let state = AppState {
        user_service,
        authenticator,
        jwt_expiration_hours,
        secure_cookies,
    };

    let public_routes = Router::new()
        .route("/api/auth/register", post(register::<R>))
        .route("/api/auth/login", post(login::<R>))
        .route("/api/auth/logout", post(logout::<R>));

    let protected_routes = Router::new()
        .route("/api/auth/verify", get(verify))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

    let admin_routes = Router::new()
        .route(
            "/api/users",
            get(list_users::<R>).delete(delete_non_admins::<R>),
        )
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware::<R>,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
