pub mod health;

use axum::{routing::get, Router};

use crate::advisory::handlers as advisory;
use crate::catalog::handlers as catalog;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/occupations", get(catalog::handle_list_occupations))
        .route(
            "/api/v1/occupations/:code",
            get(catalog::handle_get_occupation),
        )
        .route(
            "/api/v1/occupations/:code/charts",
            get(catalog::handle_get_charts),
        )
        .route("/api/v1/categories", get(catalog::handle_categories))
        .route("/api/v1/stats", get(catalog::handle_stats))
        // Advisory API
        .route(
            "/api/v1/occupations/:code/insights",
            get(advisory::handle_get_insights),
        )
        .route(
            "/api/v1/selection",
            get(advisory::handle_get_selection).put(advisory::handle_put_selection),
        )
        .with_state(state)
}
