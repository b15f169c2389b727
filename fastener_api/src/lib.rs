//! # fastener_api - HTTP Surface
//!
//! Thin axum layer over `fastener_core`. Handlers translate requests into
//! store lookups and calculations and map [`fastener_core::CalcError`] onto
//! status codes (see [`error`]).

pub mod config;
pub mod cors;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use cors::CorsConfig;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
