//! Route handlers, grouped by API surface.
//!
//! - [`calculator`] - fastener types, materials, dimensions, weight calculator, diagrams
//! - [`hsn`] - HSN codes and GST rates
//! - [`standards`] - DIN / ISO / IS reference

pub mod calculator;
pub mod hsn;
pub mod standards;

use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "fastener-api";

/// `GET /` - service information and entry points
pub async fn root() -> Json<Value> {
    Json(json!({
        "name": "Fastener Reference API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Fastener weight calculations, HSN codes, and standards reference",
        "endpoints": {
            "fastener_types": "/api/fastener-types",
            "materials": "/api/materials",
            "calculate_weight": "/api/calculate/weight",
            "calculate_pieces": "/api/calculate/pieces",
            "hsn_codes": "/api/hsn-codes",
            "gst_rates": "/api/gst-rates",
            "standards": "/api/standards",
        },
    }))
}

/// `GET /health`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE_NAME }))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health() {
        let Json(body) = health().await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "fastener-api");
    }

    #[tokio::test]
    async fn test_root_lists_endpoints() {
        let Json(body) = root().await;
        assert_eq!(body["endpoints"]["hsn_codes"], "/api/hsn-codes");
    }
}
