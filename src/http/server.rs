//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, body limit, CORS, metrics)
//! - Answer `/people/` like `/people` (trailing slashes trimmed before routing)
//! - Bind server to listener
//! - Stop on Ctrl+C or an in-process shutdown trigger

use axum::{
    body::Body,
    extract::Request,
    middleware,
    routing::{get, post},
    Router, ServiceExt,
};
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::favorites::FavoriteService;
use crate::http::request::{propagate_request_id_layer, set_request_id_layer, RequestIdExt};
use crate::http::response::json_error_bodies;
use crate::http::{favorites, people, planets, sitemap, users};
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics::track_metrics;
use crate::store::Store;

/// Application state injected into handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: Store,
    pub favorites: FavoriteService,
}

impl AppState {
    pub fn new(store: Store) -> Self {
        Self {
            favorites: FavoriteService::new(store.clone()),
            store,
        }
    }
}

/// The router behind path normalization.
pub type ApiService = NormalizePath<Router>;

/// HTTP server for the API.
pub struct ApiServer {
    service: ApiService,
}

impl ApiServer {
    /// Create a new HTTP server with the given configuration and store.
    pub fn new(config: &ApiConfig, store: Store) -> Self {
        let router = Self::build_router(config, AppState::new(store));
        Self {
            service: NormalizePathLayer::trim_trailing_slash().layer(router),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ApiConfig, state: AppState) -> Router {
        let router = Router::new()
            .route("/", get(sitemap::sitemap))
            .route("/user", get(users::hello))
            .route("/people", get(people::list_people).post(people::create_person))
            .route("/people/{people_id}", get(people::get_person))
            .route("/planets", get(planets::list_planets).post(planets::create_planet))
            .route("/planets/{planets_id}", get(planets::get_planet))
            .route("/users", get(users::list_users).post(users::create_user))
            .route("/users/{user_id}", get(users::get_user))
            .route("/users/{user_id}/favorites", get(users::get_favorites))
            .route(
                "/users/{user_id}/favorites/people/{people_id}",
                post(favorites::add_person).delete(favorites::remove_person),
            )
            .route(
                "/users/{user_id}/favorites/planets/{planets_id}",
                post(favorites::add_planet).delete(favorites::remove_planet),
            )
            .route_layer(middleware::from_fn(track_metrics))
            .fallback(not_found)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(middleware::from_fn(json_error_bodies))
            .layer(propagate_request_id_layer())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        path = %request.uri().path(),
                        request_id = %request.request_id(),
                    )
                }),
            )
            .layer(set_request_id_layer());

        if config.security.cors_enabled {
            router.layer(CorsLayer::permissive())
        } else {
            router
        }
    }

    /// Run the server on `listener` until Ctrl+C or `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, ServiceExt::<Request>::into_make_service(self.service))
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// The fully layered service, for driving requests without a socket.
    pub fn service(&self) -> ApiService {
        self.service.clone()
    }
}

async fn not_found() -> ApiError {
    ApiError::not_found("Resource not found")
}
