//! Device Registry 共通ライブラリ
//!
//! サーバーと外部クライアントで共有する型定義・エラー型・設定構造体

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// 共通型定義
pub mod types;
