//! # LUCT Portal API
//!
//! HTTP surface of the faculty reporting portal: registration and login,
//! lecturer and program reports, courses, ratings, the timetable, dashboard
//! statistics and search.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint paths, grouped per resource
//! - **Handlers**: request processing against a [`PortalStore`]
//! - **Middleware**: password hashing, error mapping, extractors
//! - **Config**: environment configuration
//!
//! Handlers only see the [`PortalStore`] trait, so the router can be driven
//! by `PgStore` in production and by a mock in tests.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Password hashing, error mapping and extractors
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{error_handling::HandleErrorLayer, http::HeaderValue, Router};
use eyre::Result;
use luct_db::PortalStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use middleware::error_handling::{handle_panic, handle_timeout_error, route_not_found};

/// Shared application state that is accessible to all request handlers
///
/// # Example
///
/// ```ignore
/// let state = Arc::new(ApiState::new(PgStore::new(pool)));
/// let app = build_router(state);
/// ```
pub struct ApiState {
    pub store: Arc<dyn PortalStore>,
}

impl ApiState {
    pub fn new(store: impl PortalStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Builds the full router: every resource, the 404 fallback, panic recovery
/// and request tracing. Timeout and CORS are applied by [`start_server`].
pub fn build_router(state: Arc<ApiState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::auth::routes())
        .merge(routes::lecturer_report::routes())
        .merge(routes::course::routes())
        .merge(routes::program_report::routes())
        .merge(routes::rating::routes())
        .merge(routes::timetable::routes())
        .merge(routes::dashboard::routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Bounds every request to `timeout`; expiry answers 504.
pub fn with_timeout(router: Router, timeout: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(timeout),
    )
}

fn cors_layer(origins: Option<&[String]>) -> Result<CorsLayer> {
    let layer = match origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()?;
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::ACCEPT,
                ])
                .allow_origin(origins)
                .allow_credentials(true)
        }
        None => CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(Any),
    };
    Ok(layer)
}

/// Starts the API server with the provided configuration and store
///
/// # Errors
///
/// Fails when the global subscriber is already set, a CORS origin is not a
/// valid header value, or the listener cannot bind.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn PortalStore>) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = Arc::new(ApiState { store });

    let app = build_router(state).layer(cors_layer(config.cors_origins.as_deref())?);
    let app = with_timeout(app, config.request_timeout());

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
