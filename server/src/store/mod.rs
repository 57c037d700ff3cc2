//! デバイスストア
//!
//! デバイスコレクションの唯一の所有者。全操作をメモリ内で解決する

use std::sync::Arc;
use tokio::sync::RwLock;

use device_registry_common::{
    error::{RegistryError, RegistryResult},
    types::Device,
};

/// デバイスストア
///
/// デバイスの参照・追加・更新・削除はすべてこのストアを経由する。
/// 一覧が挿入順を保つよう Vec で保持し、変更系操作は事前チェックを含めて
/// 単一のwriteロック内で実行する。呼び出し側には常に複製を返す。
#[derive(Clone)]
pub struct DeviceStore {
    devices: Arc<RwLock<Vec<Device>>>,
}

impl DeviceStore {
    /// デフォルトのシードデバイス（P-1, P-2）でストアを作成
    pub fn new() -> Self {
        Self::with_devices(vec![
            Device::pc("P-1", "PC 1", true, "Windows 10"),
            Device::pc("P-2", "PC 2", true, "Ubuntu"),
        ])
    }

    /// 指定したデバイス群でストアを作成
    pub fn with_devices(devices: Vec<Device>) -> Self {
        Self {
            devices: Arc::new(RwLock::new(devices)),
        }
    }

    /// 全デバイスを挿入順で取得
    pub async fn list(&self) -> Vec<Device> {
        self.devices.read().await.clone()
    }

    /// IDでデバイスを取得
    pub async fn get(&self, id: &str) -> RegistryResult<Device> {
        let devices = self.devices.read().await;
        devices
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| RegistryError::DeviceNotFound(id.to_string()))
    }

    /// デバイスを追加
    ///
    /// `max_devices` が指定されている場合、容量チェックを重複チェックより
    /// 先に行う。`None` は無制限モード。
    pub async fn add(&self, device: Device, max_devices: Option<usize>) -> RegistryResult<Device> {
        let mut devices = self.devices.write().await;

        if let Some(max) = max_devices {
            if devices.len() >= max {
                return Err(RegistryError::CapacityExceeded(max));
            }
        }

        if devices.iter().any(|d| d.id == device.id) {
            return Err(RegistryError::DuplicateDevice(device.id.clone()));
        }

        devices.push(device.clone());
        Ok(device)
    }

    /// 既存デバイスの可変フィールドを上書き
    ///
    /// IDと種別はこの操作では変更されない。
    pub async fn update(&self, device: Device) -> RegistryResult<Device> {
        let mut devices = self.devices.write().await;
        let existing = devices
            .iter_mut()
            .find(|d| d.id == device.id)
            .ok_or_else(|| RegistryError::DeviceNotFound(device.id.clone()))?;

        existing.name = device.name;
        existing.is_enabled = device.is_enabled;
        existing.operating_system = device.operating_system;

        Ok(existing.clone())
    }

    /// IDでデバイスを削除し、削除したデバイスを返す
    pub async fn remove(&self, id: &str) -> RegistryResult<Device> {
        let mut devices = self.devices.write().await;
        let position = devices
            .iter()
            .position(|d| d.id == id)
            .ok_or_else(|| RegistryError::DeviceNotFound(id.to_string()))?;

        Ok(devices.remove(position))
    }
}

impl Default for DeviceStore {
    fn default() -> Self {
        Self::new()
    }
}
