//! REST APIハンドラー
//!
//! デバイスCRUD APIとエラーレスポンス変換

pub mod devices;
pub mod error;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/devices",
            get(devices::list_devices).post(devices::create_device),
        )
        .route(
            "/api/devices/:id",
            get(devices::get_device)
                .put(devices::update_device)
                .delete(devices::delete_device),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
