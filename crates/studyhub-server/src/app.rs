//! Router assembly with the middleware stack.

use axum::{Router, body::Body, middleware};
use http::{HeaderValue, Request};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::middleware::request_id::{
    drop_unusable_request_id, propagate_request_id_layer, request_id_of, set_request_id_layer,
};
use crate::routes;
use crate::state::AppState;

/// Build the full application: routes plus tracing, request-id and CORS layers.
///
/// Request flow: CORS → unusable client id removal → request id assignment →
/// request id propagation → tracing span → handler.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&state.config().cors_origins)?;

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id_of(request),
        )
    });

    Ok(routes::build_router(state)
        .layer(trace)
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(middleware::from_fn(drop_unusable_request_id))
        .layer(cors))
}

/// Build CORS layer from configuration.
///
/// `"*"` allows any origin; otherwise a comma-separated list of origins,
/// which are also allowed to send credentials. All methods and headers are
/// allowed. With credentials the allowed methods and headers mirror the
/// preflight request, since wildcards are not valid there.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .map_err(|_| ConfigError::InvalidValue {
                    name: "CORS_ORIGINS".to_string(),
                    reason: format!("'{}' is not a valid origin", s),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
