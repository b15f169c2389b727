//! Fastener types, materials, dimensions and the weight calculator.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use fastener_core::calculations::{
    calculate_pieces_from_weight, calculate_weight, diagram_data, PiecesInput, PiecesResult, WeightInput,
    WeightResult,
};
use fastener_core::catalog::{FastenerType, Material};
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /api/fastener-types`
pub async fn list_fastener_types(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let types = state.store().list::<FastenerType>()?;
    Ok(Json(json!({ "fastener_types": types })))
}

/// `GET /api/fastener-types/{id}`
pub async fn get_fastener_type(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    let fastener = state.store().get::<FastenerType>(&id)?;
    Ok(Json(fastener).into_response())
}

/// `GET /api/materials`
pub async fn list_materials(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let materials = state.store().list::<Material>()?;
    Ok(Json(json!({ "materials": materials })))
}

/// `GET /api/materials/{id}`
pub async fn get_material(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Response> {
    let material = state.store().get::<Material>(&id)?;
    Ok(Json(material).into_response())
}

/// `GET /api/dimensions/{fastener_type}`
pub async fn get_dimensions(
    State(state): State<AppState>,
    Path(fastener_type): Path<String>,
) -> ApiResult<Response> {
    let sheet = state.store().dimension_sheet(&fastener_type)?;
    Ok(Json(sheet).into_response())
}

/// `GET /api/diameters/{fastener_type}`
pub async fn get_diameters(
    State(state): State<AppState>,
    Path(fastener_type): Path<String>,
) -> ApiResult<Json<Value>> {
    let diameters = state.store().diameters(&fastener_type)?;
    Ok(Json(json!({ "fastener_type": fastener_type, "diameters": diameters })))
}

/// `POST /api/calculate/weight`
pub async fn post_calculate_weight(
    State(state): State<AppState>,
    Json(input): Json<WeightInput>,
) -> ApiResult<Json<WeightResult>> {
    tracing::debug!(
        fastener_type = %input.fastener_type_id,
        material = %input.material_id,
        diameter = %input.diameter,
        quantity = input.quantity,
        "calculate weight"
    );
    let result = calculate_weight(state.store(), &input).inspect_err(|e| {
        tracing::warn!(
            fastener_type = %input.fastener_type_id,
            material = %input.material_id,
            error = %e,
            "weight calculation rejected"
        );
    })?;
    Ok(Json(result))
}

/// `POST /api/calculate/pieces`
pub async fn post_calculate_pieces(
    State(state): State<AppState>,
    Json(input): Json<PiecesInput>,
) -> ApiResult<Json<PiecesResult>> {
    tracing::debug!(
        fastener_type = %input.fastener_type_id,
        material = %input.material_id,
        diameter = %input.diameter,
        weight_kg = input.weight_kg,
        "calculate pieces"
    );
    let result = calculate_pieces_from_weight(state.store(), &input).inspect_err(|e| {
        tracing::warn!(
            fastener_type = %input.fastener_type_id,
            material = %input.material_id,
            error = %e,
            "pieces calculation rejected"
        );
    })?;
    Ok(Json(result))
}

/// `GET /api/diagram/{fastener_type}/{diameter}`
pub async fn get_diagram(
    State(state): State<AppState>,
    Path((fastener_type, diameter)): Path<(String, String)>,
) -> ApiResult<Response> {
    let data = diagram_data(state.store(), &fastener_type, &diameter)?;
    Ok(Json(data).into_response())
}
