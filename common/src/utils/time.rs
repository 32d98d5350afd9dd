//! 時間ユーティリティ
//!
//! 画面内ログのタイムスタンプ処理を提供します。

use chrono::{DateTime, Local, Utc};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// 現在のUNIXタイムスタンプ（ミリ秒）を取得
pub fn current_time_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| Duration::from_secs(0))
        .as_millis() as u64
}

/// タイムスタンプ(ミリ秒)を画面内ログ用の時刻表記 (HH:MM:SS) へ変換
pub fn format_log_time(timestamp_millis: u64) -> String {
    let seconds = (timestamp_millis / 1000) as i64;
    let nanos = ((timestamp_millis % 1000) * 1_000_000) as u32;

    match DateTime::<Utc>::from_timestamp(seconds, nanos) {
        Some(dt) => {
            let local_dt = dt.with_timezone(&Local);
            local_dt.format("%H:%M:%S").to_string()
        }
        None => "--:--:--".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_time_millis_is_monotonic_enough() {
        let first = current_time_millis();
        let second = current_time_millis();
        assert!(second >= first);
        // UNIXエポックから十分離れていること
        assert!(first > 1_000_000_000_000);
    }

    #[test]
    fn test_format_log_time_shape() {
        let formatted = format_log_time(current_time_millis());
        // HH:MM:SS 形式
        assert_eq!(formatted.len(), 8);
        assert_eq!(formatted.as_bytes()[2], b':');
        assert_eq!(formatted.as_bytes()[5], b':');
    }
}
