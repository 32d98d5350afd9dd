//! ネットワークモジュール
//!
//! ムードランプへのHTTPコマンド送信を担当する機能を提供します。

mod dispatcher;
mod http;

pub use dispatcher::{CommandDispatcher, DispatchEvent};
pub use http::HttpCommandSender;

use mood_lamp_rs_common::protocol::{Command, DeviceTarget};
use thiserror::Error;

/// ネットワークエラー
#[derive(Error, Debug)]
pub enum NetworkError {
    /// URLが不正
    #[error("URLが不正です: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// HTTP通信エラー
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

/// コマンド送信結果
///
/// デバイスの応答をそのまま保持します。本文の解釈は行いません。
#[derive(Debug, Clone)]
pub struct CommandResponse {
    /// HTTPステータスコード
    pub status: u16,
    /// 応答本文
    pub body: String,
}

/// コマンド送信インターフェース
///
/// すべての送信実装が実装する必要があるトレイト
pub trait CommandSender: Send + Sync {
    /// コマンドを送信し、ステータスと応答本文を返す
    fn send(&self, target: &DeviceTarget, command: &Command)
        -> Result<CommandResponse, NetworkError>;
}
