//! DIN / ISO / IS standards reference.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use fastener_core::catalog::{family_key, list_standards, standard_info};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/standards`
pub async fn list_all_standards(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let standards = list_standards(state.store())?;
    Ok(Json(json!({ "standards": standards })))
}

/// `GET /api/standards/{fastener_type}`
pub async fn get_standards_for_type(
    State(state): State<AppState>,
    Path(fastener_type): Path<String>,
) -> ApiResult<Json<Value>> {
    let standards = state.store().standards_for(family_key(&fastener_type))?;
    Ok(Json(json!({ "fastener_type": fastener_type, "standards": standards })))
}

/// `GET /api/standards/info/{code}`
pub async fn get_standard_info(Path(code): Path<String>) -> ApiResult<Response> {
    let info = standard_info(&code)?;
    Ok(Json(info).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::{body_json, test_state};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn test_list_all() {
        let Json(body) = list_all_standards(State(test_state())).await.unwrap();
        let standards = body["standards"].as_array().unwrap();
        assert_eq!(standards.len(), 20);
        assert!(standards.iter().all(|s| ["DIN", "ISO", "IS"].contains(&s["type"].as_str().unwrap())));
    }

    #[tokio::test]
    async fn test_standards_for_type() {
        let Json(body) = get_standards_for_type(State(test_state()), Path("hex_bolt_full_thread".to_string()))
            .await
            .unwrap();
        assert_eq!(body["fastener_type"], "hex_bolt_full_thread");
        assert_eq!(body["standards"]["iso"][1], "ISO 4017");

        let err = get_standards_for_type(State(test_state()), Path("rivet".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_standard_info() {
        let body = body_json(get_standard_info(Path("DIN 912".to_string())).await.unwrap()).await;
        assert_eq!(body["name"], "Socket Head Cap Screws");
        assert_eq!(body["equivalent_iso"], "ISO 4762");

        let err = get_standard_info(Path("DIN 0".to_string())).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
