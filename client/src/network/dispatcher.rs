//! コマンドディスパッチャ
//!
//! UIスレッドから受け取ったコマンドをバックグラウンドスレッドで送信し、
//! 結果をイベントキュー経由でUIスレッドへ戻します。

use super::CommandSender;
use mood_lamp_rs_common::protocol::{Command, DeviceTarget};
use mood_lamp_rs_common::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;

/// バックグラウンド送信の結果イベント
#[derive(Debug, Clone)]
pub enum DispatchEvent {
    /// リクエスト送信開始
    Sent {
        /// リクエストURL
        url: String,
    },

    /// 応答受信
    Completed {
        /// リクエストURL
        url: String,
        /// HTTPステータスコード
        status: u16,
        /// 応答本文
        body: String,
    },

    /// 送信失敗
    Failed {
        /// リクエストURL
        url: String,
        /// エラーメッセージ
        message: String,
    },
}

/// コマンドディスパッチャ
///
/// コマンドごとに独立したスレッドを起動します。スレッドはjoinも
/// キャンセルもされず、同時実行数の上限もありません。そのため
/// 連続した操作では応答順序は保証されません。
pub struct CommandDispatcher {
    /// 送信実装
    sender: Arc<dyn CommandSender>,
    /// UIスレッドへ戻すイベントキュー
    events: Arc<Mutex<Vec<DispatchEvent>>>,
    /// イベント発生時に再描画を要求するためのコンテキスト
    repaint_ctx: Option<egui::Context>,
}

impl CommandDispatcher {
    /// 新しいディスパッチャを作成
    pub fn new(sender: Arc<dyn CommandSender>) -> Self {
        Self {
            sender,
            events: Arc::new(Mutex::new(Vec::new())),
            repaint_ctx: None,
        }
    }

    /// 再描画要求用のコンテキストを設定
    pub fn with_repaint(mut self, ctx: egui::Context) -> Self {
        self.repaint_ctx = Some(ctx);
        self
    }

    /// コマンドを送信する
    ///
    /// アドレスが空の場合はエラーを返し、リクエストは一切行いません。
    /// それ以外の場合は送信イベントを記録した上でバックグラウンド
    /// スレッドを起動し、即座に戻ります。
    pub fn dispatch(&self, address: &str, command: Command) -> Result<()> {
        let target = DeviceTarget::parse(address)?;
        let url = target.command_url(&command);

        log::debug!("コマンド送信: {} ({})", url, command.label());
        self.push_event(DispatchEvent::Sent { url: url.clone() });

        let sender = Arc::clone(&self.sender);
        let events = Arc::clone(&self.events);
        let repaint_ctx = self.repaint_ctx.clone();

        // スレッドは起動したまま放置する（joinしない）
        thread::spawn(move || {
            let event = match sender.send(&target, &command) {
                Ok(response) => {
                    log::debug!("応答受信: {} {} {}", url, response.status, response.body);
                    DispatchEvent::Completed {
                        url,
                        status: response.status,
                        body: response.body,
                    }
                }
                Err(e) => {
                    log::error!("コマンド送信に失敗しました: {} ({})", e, url);
                    DispatchEvent::Failed {
                        url,
                        message: e.to_string(),
                    }
                }
            };

            events.lock().push(event);

            if let Some(ctx) = repaint_ctx {
                ctx.request_repaint();
            }
        });

        Ok(())
    }

    /// 蓄積されたイベントを取り出す
    pub fn drain_events(&self) -> Vec<DispatchEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    fn push_event(&self, event: DispatchEvent) {
        self.events.lock().push(event);
    }
}
