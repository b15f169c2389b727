//! Axum router configuration
//!
//! ## Router Structure
//!
//! ```text
//! /
//! ├── /health
//! └── /api
//!     ├── /fastener-types, /materials, /dimensions, /diameters
//!     ├── /calculate/weight, /calculate/pieces
//!     ├── /diagram/{fastener_type}/{diameter}
//!     ├── /hsn-codes/*, /gst-rates/*
//!     └── /standards/*
//! ```

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::cors::{cors, CorsConfig};
use crate::routes::{self, calculator, hsn, standards};
use crate::state::AppState;

/// Build the complete router with CORS applied to every route
pub fn build_router(state: AppState, cors_config: Arc<CorsConfig>) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .nest("/api", api_router())
        .with_state(state)
        .layer(axum::middleware::from_fn_with_state(cors_config, cors))
}

/// Routes under `/api`
///
/// - `GET  /fastener-types`, `/fastener-types/{id}`
/// - `GET  /materials`, `/materials/{id}`
/// - `GET  /dimensions/{fastener_type}`, `/diameters/{fastener_type}`
/// - `POST /calculate/weight`, `/calculate/pieces`
/// - `GET  /diagram/{fastener_type}/{diameter}`
/// - `GET  /hsn-codes`, `/hsn-codes/search?q=`, `/hsn-codes/{code}`
/// - `GET  /gst-rates`, `/gst-rates/{category}`
/// - `GET  /standards`, `/standards/{fastener_type}`, `/standards/info/{code}`
fn api_router() -> Router<AppState> {
    Router::new()
        .route("/fastener-types", get(calculator::list_fastener_types))
        .route("/fastener-types/{id}", get(calculator::get_fastener_type))
        .route("/materials", get(calculator::list_materials))
        .route("/materials/{id}", get(calculator::get_material))
        .route("/dimensions/{fastener_type}", get(calculator::get_dimensions))
        .route("/diameters/{fastener_type}", get(calculator::get_diameters))
        .route("/calculate/weight", post(calculator::post_calculate_weight))
        .route("/calculate/pieces", post(calculator::post_calculate_pieces))
        .route("/diagram/{fastener_type}/{diameter}", get(calculator::get_diagram))
        .route("/hsn-codes", get(hsn::list_hsn_codes))
        .route("/hsn-codes/search", get(hsn::search_hsn_codes))
        .route("/hsn-codes/{code}", get(hsn::get_hsn_code))
        .route("/gst-rates", get(hsn::get_gst_rates))
        .route("/gst-rates/{category}", get(hsn::get_gst_rate))
        .route("/standards", get(standards::list_all_standards))
        .route("/standards/{fastener_type}", get(standards::get_standards_for_type))
        .route("/standards/info/{code}", get(standards::get_standard_info))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fastener_core::ReferenceStore;

    #[test]
    fn test_routes_do_not_overlap() {
        // Axum panics on conflicting paths when the router is built
        let state = AppState::new(ReferenceStore::embedded());
        let cors_config = Arc::new(CorsConfig::new(vec!["http://localhost:5173".to_string()]));
        let _router = build_router(state, cors_config);
    }
}
