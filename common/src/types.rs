//! 共通型定義
//!
//! Device等のコアデータ型

use serde::{Deserialize, Serialize};

/// デバイス種別
///
/// 現状はPCのみ。将来の種別追加（モバイル、センサー等）に備えて
/// 型階層ではなくフラットな判別子として保持する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    /// PC（デスクトップ/ラップトップ）
    #[default]
    Pc,
}

impl DeviceKind {
    /// デフォルト種別かどうか（シリアライズ省略判定用）
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// デバイス
///
/// `id` は呼び出し側が割り当てる一意識別子で、作成後は変更されない。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Device {
    /// 一意識別子
    pub id: String,
    /// 表示名
    pub name: String,
    /// 有効フラグ
    #[serde(rename = "isEnabled")]
    pub is_enabled: bool,
    /// OS名
    #[serde(rename = "operatingSystem")]
    pub operating_system: String,
    /// デバイス種別
    #[serde(default, skip_serializing_if = "DeviceKind::is_default")]
    pub kind: DeviceKind,
}

impl Device {
    /// PCデバイスを作成
    pub fn pc(
        id: impl Into<String>,
        name: impl Into<String>,
        is_enabled: bool,
        operating_system: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_enabled,
            operating_system: operating_system.into(),
            kind: DeviceKind::Pc,
        }
    }
}
