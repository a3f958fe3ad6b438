//! # API REST
//!
//! REST API for the blood donation service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON bodies, CORS, `OPTIONS`)
//!
//! Uses `api-shared` for wire types and `donation-core` for the store and compatibility rules.

#![warn(rust_2018_idioms)]

pub mod config;
mod error;
mod handlers;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    CompatibilityProfileRes, CompatibilityReq, CompatibilityRes, DonationReq, DonationRes,
    ErrorRes, HealthRes, MessageRes,
};
use donation_core::DonationStore;

pub use config::{rest_addr_from_env_value, ConfigError, RestConfig, DEFAULT_REST_ADDR};
pub use error::{ApiError, ApiJson};

/// Application state shared across REST API handlers
///
/// Holds the one donation store every request operates on.
#[derive(Clone)]
pub struct AppState {
    store: Arc<DonationStore>,
}

impl AppState {
    pub fn new(store: Arc<DonationStore>) -> Self {
        Self { store }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_donations,
        handlers::create_donation,
        handlers::get_donation,
        handlers::update_donation,
        handlers::delete_donation,
        handlers::check_compatibility,
        handlers::compatibility_profile,
    ),
    components(schemas(
        HealthRes,
        DonationReq,
        DonationRes,
        MessageRes,
        ErrorRes,
        CompatibilityReq,
        CompatibilityRes,
        CompatibilityProfileRes,
    ))
)]
struct ApiDoc;

/// Build the REST router.
///
/// CORS is fully permissive and every `OPTIONS` request gets an empty 200.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/donations",
            get(handlers::list_donations).post(handlers::create_donation),
        )
        .route(
            "/api/donations/:id",
            get(handlers::get_donation)
                .put(handlers::update_donation)
                .delete(handlers::delete_donation),
        )
        .route(
            "/api/check_compatibility",
            post(handlers::check_compatibility),
        )
        .route(
            "/api/compatibility/:blood_type",
            get(handlers::compatibility_profile),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(handlers::answer_options))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
