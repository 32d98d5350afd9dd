//! 画面内スクロールバックログ
//!
//! コマンドの送受信結果を画面内に表示するログを実装します。

use super::ColorScheme;
use egui::{RichText, ScrollArea, Ui};
use mood_lamp_rs_common::utils::time;
use std::collections::VecDeque;

/// ログ行の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    /// リクエスト送信
    Sent,
    /// 応答受信
    Response,
    /// エラー
    Error,
    /// その他の情報 (プレビューなど)
    Info,
}

/// ログ1行
#[derive(Debug, Clone)]
pub struct LogLine {
    /// 記録時刻 (UNIXミリ秒)
    pub timestamp_millis: u64,
    /// 行の種類
    pub kind: LogKind,
    /// 表示テキスト
    pub text: String,
}

/// スクロールバックログ
///
/// 最大行数を超えた古い行から破棄されます。表示は常に最下部へ
/// 追従します。
pub struct ActivityLog {
    /// ログ行 (古いものが先頭)
    lines: VecDeque<LogLine>,
    /// 最大行数
    limit: usize,
}

impl ActivityLog {
    /// 新しいログを作成
    pub fn new(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// 最大行数を変更
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.trim();
    }

    /// 行を追加
    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.lines.push_back(LogLine {
            timestamp_millis: time::current_time_millis(),
            kind,
            text: text.into(),
        });
        self.trim();
    }

    /// 行数を取得
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// ログが空かどうか
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 保持している行を取得
    pub fn lines(&self) -> impl Iterator<Item = &LogLine> {
        self.lines.iter()
    }

    fn trim(&mut self) {
        while self.lines.len() > self.limit {
            self.lines.pop_front();
        }
    }

    /// UIに表示
    pub fn ui(&self, ui: &mut Ui, colors: &ColorScheme) {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for line in &self.lines {
                    let color = match line.kind {
                        LogKind::Sent => colors.foreground,
                        LogKind::Response => colors.success,
                        LogKind::Error => colors.error,
                        LogKind::Info => colors.weak,
                    };

                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            time::format_log_time(line.timestamp_millis),
                            line.text
                        ))
                        .monospace()
                        .color(color),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_limit() {
        let mut log = ActivityLog::new(3);

        for i in 0..5 {
            log.push(LogKind::Sent, format!("→ http://lamp/{}", i));
        }

        // 古い行から破棄される
        assert_eq!(log.len(), 3);
        let texts: Vec<&str> = log.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["→ http://lamp/2", "→ http://lamp/3", "→ http://lamp/4"]
        );
    }

    #[test]
    fn test_set_limit_trims_existing() {
        let mut log = ActivityLog::new(10);
        for i in 0..6 {
            log.push(LogKind::Info, format!("{}", i));
        }

        log.set_limit(2);
        assert_eq!(log.len(), 2);
        let texts: Vec<&str> = log.lines().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["4", "5"]);
    }

    #[test]
    fn test_limit_is_at_least_one() {
        let mut log = ActivityLog::new(0);
        log.push(LogKind::Error, "✖ failed");
        assert_eq!(log.len(), 1);
    }
}
