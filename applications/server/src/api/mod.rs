/// API route modules
pub mod auth;
pub mod extract;
pub mod health;
pub mod payments;

use crate::{config::CorsSettings, error::Result, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

/// Build the application router
///
/// Credentialed CORS cannot use wildcards, so any method and header is
/// allowed by mirroring the preflight request. The origin is only echoed
/// back when it matches the configured one; other origins get neither the
/// origin nor the credentials header.
pub fn create_router(app_state: AppState, cors: &CorsSettings) -> Result<Router> {
    let allowed_origin = cors.allowed_origin()?;
    let credentialed_origin = allowed_origin.clone();

    let cors_layer = CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(AllowCredentials::predicate(move |origin, _| {
            *origin == credentialed_origin
        }));

    let router = Router::new()
        .route("/health", get(health::health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/payments/confirm", post(payments::confirm))
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(cors_layer)
        .with_state(app_state);

    Ok(router)
}
