//! Device Registry Server Entry Point

use device_registry_common::config::RegistryConfig;
use device_registry_server::{api, manager::DeviceManager, store::DeviceStore, AppState};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Device Registry v{}", env!("CARGO_PKG_VERSION"));

    let config = RegistryConfig::from_env();

    // シード済みストアとマネージャーを初期化
    let store = DeviceStore::new();
    let manager = DeviceManager::new(store, config.max_devices);
    let state = AppState { manager };

    // ルーター作成
    let app = api::create_router(state);

    // サーバー起動
    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("Failed to bind to address");

    info!(
        max_devices = ?config.max_devices,
        "Device registry server listening on {}",
        bind_addr
    );

    axum::serve(listener, app).await.expect("Server error");
}
