//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse, Json};
use device_registry_common::error::RegistryError;
use serde_json::json;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub RegistryError);

impl From<RegistryError> for AppError {
    fn from(err: RegistryError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            RegistryError::DeviceNotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            RegistryError::DuplicateDevice(_) => (StatusCode::CONFLICT, self.0.to_string()),
            RegistryError::CapacityExceeded(_) => {
                (StatusCode::INSUFFICIENT_STORAGE, self.0.to_string())
            }
        };

        let payload = json!({
            "error": message
        });

        (status, Json(payload)).into_response()
    }
}
