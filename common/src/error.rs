//! エラー型定義
//!
//! ムードランプクライアントで使用する共通エラー型を定義します。

use std::io;
use thiserror::Error;

use crate::config::ConfigError;

/// 共通エラー
#[derive(Error, Debug)]
pub enum CommonError {
    /// デバイスアドレスが未入力
    #[error("デバイスのアドレスが入力されていません")]
    MissingAddress,

    /// 入出力エラー
    #[error("I/Oエラー: {0}")]
    Io(#[from] io::Error),

    /// 設定エラー
    #[error("設定エラー: {0}")]
    Config(#[from] ConfigError),
}

/// 結果型のエイリアス
pub type Result<T> = std::result::Result<T, CommonError>;
