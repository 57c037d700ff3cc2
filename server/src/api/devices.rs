//! デバイスCRUD APIハンドラー

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use device_registry_common::types::Device;
use tracing::info;

use super::error::AppError;
use crate::AppState;

/// GET /api/devices - デバイス一覧
pub async fn list_devices(State(state): State<AppState>) -> Json<Vec<Device>> {
    Json(state.manager.list_devices().await)
}

/// GET /api/devices/:id - デバイス取得
pub async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Device>, AppError> {
    let device = state.manager.get_device_by_id(&id).await?;
    Ok(Json(device))
}

/// POST /api/devices - デバイス登録
pub async fn create_device(
    State(state): State<AppState>,
    Json(device): Json<Device>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.manager.add_device(device).await?;
    info!(device_id = %created.id, "Device registered");

    let location = format!("/api/devices/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

/// PUT /api/devices/:id - デバイス更新
///
/// ボディにIDが含まれていてもパスのIDで上書きする。
pub async fn update_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut device): Json<Device>,
) -> Result<Json<Device>, AppError> {
    device.id = id;
    let updated = state.manager.edit_device(device).await?;
    info!(device_id = %updated.id, "Device updated");
    Ok(Json(updated))
}

/// DELETE /api/devices/:id - デバイス削除
pub async fn delete_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let removed = state.manager.remove_device_by_id(&id).await?;
    info!(device_id = %removed.id, "Device removed");
    Ok(StatusCode::OK)
}
