//! API handlers

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::api::{ApiError, AppState};
use crate::types::{ServiceRecord, UpdateResponse};

/// Current service record
pub async fn get_info(State(state): State<AppState>) -> Json<ServiceRecord> {
    Json(state.snapshot().await)
}

/// Replace the service record with the decoded body
///
/// The body is decoded before the write lock is taken, so a rejected request
/// leaves the record untouched.
pub async fn update_info(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<UpdateResponse>, ApiError> {
    let record = decode_record(&body).inspect_err(|e| {
        tracing::warn!(error = %e, "Rejected service update");
    })?;

    tracing::info!(
        platform = %record.platform,
        release = %record.release,
        schema = %record.schema,
        "Service record updated",
    );
    state.replace(record).await;

    Ok(Json(UpdateResponse::success()))
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// Decode a full replacement record; absent fields become empty strings
pub fn decode_record(body: &[u8]) -> Result<ServiceRecord, ApiError> {
    let value: Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(ApiError::NotAnObject);
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_record() {
        let record = decode_record(br#"{"platform":"X","release":"Y","schema":"Z"}"#).unwrap();
        assert_eq!(record, ServiceRecord::new("X", "Y", "Z"));
    }

    #[test]
    fn test_decode_partial_record_is_total_replacement() {
        let record = decode_record(br#"{"schema":"v3"}"#).unwrap();
        assert_eq!(record, ServiceRecord::new("", "", "v3"));
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(matches!(
            decode_record(b"not-json"),
            Err(ApiError::MalformedBody(_))
        ));
        assert!(matches!(decode_record(b""), Err(ApiError::MalformedBody(_))));
        assert!(matches!(
            decode_record(br#"["X","Y","Z"]"#),
            Err(ApiError::NotAnObject)
        ));
        assert!(matches!(decode_record(b"null"), Err(ApiError::NotAnObject)));
        assert!(matches!(
            decode_record(br#"{"platform":1}"#),
            Err(ApiError::MalformedBody(_))
        ));
    }
}
