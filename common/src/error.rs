//! エラー型定義
//!
//! レジストリで発生しうる予期されたエラー条件

use thiserror::Error;

/// レジストリ共通エラー
///
/// いずれも呼び出し側が回復可能な条件であり、プロセス致命にはならない。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// 指定IDのデバイスが存在しない
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    /// 同一IDのデバイスが既に登録されている
    #[error("Device already exists: {0}")]
    DuplicateDevice(String),

    /// 登録上限を超過した
    #[error("Device capacity exceeded: limit is {0}")]
    CapacityExceeded(usize),
}

/// レジストリ共通Result型
pub type RegistryResult<T> = Result<T, RegistryError>;
