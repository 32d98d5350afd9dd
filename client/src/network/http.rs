//! HTTPコマンド送信
//!
//! デバイスのHTTP APIへのGETリクエスト送信を実装します。

use super::{CommandResponse, CommandSender, NetworkError};
use mood_lamp_rs_common::protocol::{Command, DeviceTarget};
use url::Url;

/// HTTPコマンド送信クライアント
///
/// タイムアウトや再送は設定しません。各リクエストは
/// 呼び出し元のスレッド上で同期的にブロックします。
pub struct HttpCommandSender {
    /// HTTPクライアント
    client: reqwest::blocking::Client,
}

impl HttpCommandSender {
    /// 新しい送信クライアントを作成
    pub fn new() -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Default for HttpCommandSender {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandSender for HttpCommandSender {
    fn send(
        &self,
        target: &DeviceTarget,
        command: &Command,
    ) -> Result<CommandResponse, NetworkError> {
        let url = Url::parse(&target.command_url(command))?;

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(CommandResponse { status, body })
    }
}
