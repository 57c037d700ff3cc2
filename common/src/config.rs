//! 設定管理
//!
//! RegistryConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// レジストリサーバー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// 最大登録台数 (デフォルト: 10、Noneで無制限)
    #[serde(default = "default_max_devices")]
    pub max_devices: Option<usize>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_max_devices() -> Option<usize> {
    Some(10)
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_devices: default_max_devices(),
        }
    }
}

impl RegistryConfig {
    /// 環境変数から設定を読み込む
    ///
    /// `REGISTRY_HOST` / `REGISTRY_PORT` / `REGISTRY_MAX_DEVICES` が
    /// 未設定の項目はデフォルト値になる。`REGISTRY_MAX_DEVICES=0` は無制限。
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("REGISTRY_HOST").unwrap_or(defaults.host);
        let port = std::env::var("REGISTRY_PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.port);
        let max_devices = match std::env::var("REGISTRY_MAX_DEVICES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            Some(0) => None,
            Some(max) => Some(max),
            None => defaults.max_devices,
        };

        Self {
            host,
            port,
            max_devices,
        }
    }

    /// バインドアドレスを返す
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
