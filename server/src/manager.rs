//! デバイスマネージャー
//!
//! ストアへの薄い委譲ファサード。トランスポート層との接続点

use device_registry_common::{error::RegistryResult, types::Device};

use crate::store::DeviceStore;

/// デバイスマネージャー
///
/// 各操作を1:1でストアへ転送する。業務ロジックは持たず、登録上限のみ
/// 設定として保持して追加時にストアへ渡す。
#[derive(Clone)]
pub struct DeviceManager {
    store: DeviceStore,
    max_devices: Option<usize>,
}

impl DeviceManager {
    /// ストアと登録上限からマネージャーを作成
    pub fn new(store: DeviceStore, max_devices: Option<usize>) -> Self {
        Self { store, max_devices }
    }

    /// 全デバイスを取得
    pub async fn list_devices(&self) -> Vec<Device> {
        self.store.list().await
    }

    /// IDでデバイスを取得
    pub async fn get_device_by_id(&self, id: &str) -> RegistryResult<Device> {
        self.store.get(id).await
    }

    /// デバイスを追加
    pub async fn add_device(&self, device: Device) -> RegistryResult<Device> {
        self.store.add(device, self.max_devices).await
    }

    /// デバイスを編集
    pub async fn edit_device(&self, device: Device) -> RegistryResult<Device> {
        self.store.update(device).await
    }

    /// IDでデバイスを削除
    pub async fn remove_device_by_id(&self, id: &str) -> RegistryResult<Device> {
        self.store.remove(id).await
    }
}
