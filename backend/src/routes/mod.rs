//! Route definitions for the Soil Fertility Advisor

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{handlers, middleware::auth_middleware, AppState};

/// Create API routes
pub fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        // Health check (public)
        .route("/health", get(handlers::health_check))
        // Auth routes (public, with a protected profile endpoint)
        .nest("/auth", auth_routes(state.clone()))
        // Protected routes - soil data lookup
        .nest("/soil", soil_routes(state.clone()))
        // Protected routes - fertility assessment
        .nest("/fertility", fertility_routes(state))
}

/// Authentication routes
fn auth_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/refresh", post(handlers::refresh))
        .merge(
            Router::new()
                .route("/me", get(handlers::me))
                .route_layer(middleware::from_fn_with_state(state, auth_middleware)),
        )
}

/// Soil data routes (protected)
fn soil_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/query", get(handlers::query_soil_data))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

/// Fertility assessment routes (protected)
fn fertility_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/classes/:index", get(handlers::get_class_record))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
