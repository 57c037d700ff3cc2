//! Device Registry Server
//!
//! 管理対象デバイスをメモリ内で管理するレジストリサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// デバイスマネージャー（ストアへのファサード）
pub mod manager;

/// デバイスストア（リポジトリ）
pub mod store;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// デバイスマネージャー
    pub manager: manager::DeviceManager,
}
