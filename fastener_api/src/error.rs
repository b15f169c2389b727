//! Mapping of calculation and lookup errors onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fastener_core::{CalcError, ErrorKind};
use serde_json::json;

/// Handler error carrying the core error it came from
#[derive(Debug)]
pub struct ApiError(pub CalcError);

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::InvalidInput | ErrorKind::Unconfigured => StatusCode::BAD_REQUEST,
            ErrorKind::Data => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<CalcError> for ApiError {
    fn from(err: CalcError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "reference data failure");
        }
        let body = json!({
            "error": self.0.error_code(),
            "detail": self.0.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(ApiError(CalcError::not_found("Material", "x")).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError(CalcError::length_required("hex_bolt")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(CalcError::no_calculation_method("rivet")).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError(CalcError::data_file("materials.json", "eof")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body() {
        let response = ApiError(CalcError::unknown_reference("material", "unobtainium")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "UNKNOWN_REFERENCE");
        assert_eq!(body["detail"], "Unknown material: unobtainium");
    }
}
