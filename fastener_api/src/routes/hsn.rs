//! HSN codes and GST rates.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use fastener_core::catalog::HsnCode;
use fastener_core::CalcError;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// Query string for HSN search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/hsn-codes`
pub async fn list_hsn_codes(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let codes = state.store().list::<HsnCode>()?;
    Ok(Json(json!({ "hsn_codes": codes })))
}

/// `GET /api/hsn-codes/search?q=`
pub async fn search_hsn_codes(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Json<Value>> {
    let query = params.q.trim();
    if query.is_empty() {
        return Err(CalcError::invalid_input("q", &params.q, "Search query must not be empty").into());
    }
    let results = state.store().search_hsn(query)?;
    tracing::debug!(query, count = results.len(), "hsn search");
    Ok(Json(json!({
        "query": query,
        "count": results.len(),
        "results": results,
    })))
}

/// `GET /api/hsn-codes/{code}`
pub async fn get_hsn_code(State(state): State<AppState>, Path(code): Path<String>) -> ApiResult<Response> {
    let hsn = state.store().hsn_code(&code)?;
    Ok(Json(hsn).into_response())
}

/// `GET /api/gst-rates`
pub async fn get_gst_rates(State(state): State<AppState>) -> ApiResult<Response> {
    let info = state.store().gst_info()?;
    Ok(Json(info).into_response())
}

/// `GET /api/gst-rates/{category}`
pub async fn get_gst_rate(State(state): State<AppState>, Path(category): Path<String>) -> ApiResult<Response> {
    let rate = state.store().gst_category(&category)?;
    Ok(Json(rate).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_json, test_state};
    use axum::http::StatusCode;

    fn search(q: &str) -> Query<SearchParams> {
        Query(SearchParams { q: q.to_string() })
    }

    #[tokio::test]
    async fn test_search_by_keyword() {
        let Json(body) = search_hsn_codes(State(test_state()), search("bolt")).await.unwrap();
        assert_eq!(body["query"], "bolt");
        assert_eq!(body["count"], 5);
        for hit in body["results"].as_array().unwrap() {
            let code = hit["code"].as_str().unwrap().to_lowercase();
            let description = hit["description"].as_str().unwrap().to_lowercase();
            assert!(code.contains("bolt") || description.contains("bolt"));
        }
    }

    #[tokio::test]
    async fn test_search_by_code() {
        let Json(body) = search_hsn_codes(State(test_state()), search("7318")).await.unwrap();
        assert_eq!(body["count"], 13);
    }

    #[tokio::test]
    async fn test_empty_search_rejected() {
        let err = search_hsn_codes(State(test_state()), search("  ")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_hsn_code() {
        let response = get_hsn_code(State(test_state()), Path("7616".to_string()))
            .await
            .unwrap();
        let body = body_json(response).await;
        assert_eq!(body["material_type"], "aluminium");

        let err = get_hsn_code(State(test_state()), Path("0000".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_gst_rates() {
        let body = body_json(get_gst_rates(State(test_state())).await.unwrap()).await;
        assert_eq!(body["current_rate"], 18.0);
        assert!(body["categories"]["iron_steel"].is_object());

        let body = body_json(
            get_gst_rate(State(test_state()), Path("stainless_steel".to_string()))
                .await
                .unwrap(),
        )
        .await;
        assert_eq!(body["rate"], 18.0);

        let err = get_gst_rate(State(test_state()), Path("plastic".to_string()))
            .await
            .unwrap_err();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("copper_brass"));
    }
}
