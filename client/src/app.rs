//! アプリケーション状態の永続化
//!
//! クライアント設定とアドレス履歴の読み込み・保存を実装します。

use crate::ui::AppSettings;
use mood_lamp_rs_common::config::{ClientConfig, ConfigError};
use mood_lamp_rs_common::utils::path as path_util;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 履歴の最大保持数
const HISTORY_LIMIT: usize = 10;

/// アプリケーション
pub struct App {
    /// 設定
    settings: AppSettings,
    /// 設定ファイルのパス
    settings_path: PathBuf,
    /// アドレス履歴 (新しいものが先頭)
    address_history: Vec<String>,
    /// 最後に使用したアドレス
    last_address: Option<String>,
}

/// 保存される設定
#[derive(Serialize, Deserialize, Clone, Debug)]
struct SavedSettings {
    /// アプリケーション設定
    app_settings: AppSettings,
    /// アドレス履歴
    address_history: Vec<String>,
    /// 最後に使用したアドレス
    last_address: Option<String>,
}

impl App {
    /// 新しいアプリケーションを作成
    pub fn new() -> Self {
        // ユーザー編集可能な既定値を読み込み
        let config = ClientConfig::load_or_default();
        let settings_path = path_util::config_dir().join("settings.json");

        Self::load_from(settings_path, &config)
    }

    /// 指定されたパスから保存済み設定を読み込んで作成
    fn load_from(settings_path: PathBuf, config: &ClientConfig) -> Self {
        let (settings, address_history, last_address) =
            Self::load_settings(&settings_path, config);

        Self {
            settings,
            settings_path,
            address_history,
            last_address,
        }
    }

    /// 設定を読み込む
    fn load_settings(
        path: &Path,
        config: &ClientConfig,
    ) -> (AppSettings, Vec<String>, Option<String>) {
        // ファイルが存在しない場合は既定値を返す
        if !path.exists() {
            return (AppSettings::from_config(config), Vec::new(), None);
        }

        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<SavedSettings>(&content) {
                Ok(saved) => (
                    saved.app_settings,
                    saved.address_history,
                    saved.last_address,
                ),
                Err(e) => {
                    log::warn!("設定ファイルのパースに失敗しました: {}", e);
                    (AppSettings::from_config(config), Vec::new(), None)
                }
            },
            Err(e) => {
                log::warn!("設定ファイルの読み込みに失敗しました: {}", e);
                (AppSettings::from_config(config), Vec::new(), None)
            }
        }
    }

    /// 設定を保存
    pub fn save_settings(&self) {
        if let Err(e) = self.try_save() {
            log::warn!("設定ファイルの保存に失敗しました: {}", e);
        }
    }

    fn try_save(&self) -> mood_lamp_rs_common::Result<()> {
        let saved = SavedSettings {
            app_settings: self.settings.clone(),
            address_history: self.address_history.clone(),
            last_address: self.last_address.clone(),
        };

        if let Some(parent) = self.settings_path.parent() {
            path_util::ensure_dir_exists(parent)?;
        }

        let json = serde_json::to_string_pretty(&saved).map_err(ConfigError::from)?;
        fs::write(&self.settings_path, json)?;
        Ok(())
    }

    /// アドレスを履歴に追加
    pub fn add_to_history(&mut self, address: &str) {
        self.last_address = Some(address.to_string());

        if self.settings.network.save_history {
            Self::insert_history(&mut self.address_history, address.to_string());
        }

        self.save_settings();
    }

    /// 履歴へ先頭挿入する（重複は除去し、最大数を制限）
    fn insert_history(history: &mut Vec<String>, address: String) {
        history.retain(|entry| entry != &address);
        history.insert(0, address);

        if history.len() > HISTORY_LIMIT {
            history.truncate(HISTORY_LIMIT);
        }
    }

    /// アプリケーション設定を取得
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// アプリケーション設定を更新
    pub fn update_settings(&mut self, settings: AppSettings) {
        self.settings = settings;
        self.save_settings();
    }

    /// アドレス履歴を取得
    pub fn address_history(&self) -> &[String] {
        &self.address_history
    }

    /// 最後に使用したアドレスを取得
    pub fn last_address(&self) -> Option<&str> {
        self.last_address.as_deref()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_history_dedup_and_cap() {
        let mut history = Vec::new();

        App::insert_history(&mut history, "10.0.0.1".to_string());
        App::insert_history(&mut history, "10.0.0.2".to_string());
        App::insert_history(&mut history, "10.0.0.1".to_string());

        // 重複は除去され、新しいものが先頭になる
        assert_eq!(history, vec!["10.0.0.1", "10.0.0.2"]);

        // 最大数を超えた分は切り捨てられる
        for i in 0..20 {
            App::insert_history(&mut history, format!("192.168.0.{}", i));
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history[0], "192.168.0.19");
    }

    #[test]
    fn test_settings_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let config = ClientConfig::default();

        let mut app = App::load_from(path.clone(), &config);
        app.add_to_history("172.23.12.139");

        // 保存された内容を新しいインスタンスで読み直す
        let reloaded = App::load_from(path, &config);
        assert_eq!(reloaded.last_address(), Some("172.23.12.139"));
        assert_eq!(reloaded.address_history(), ["172.23.12.139"]);
    }

    #[test]
    fn test_history_disabled() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let config = ClientConfig::default();

        let mut app = App::load_from(path, &config);
        app.settings.network.save_history = false;
        app.add_to_history("172.23.12.139");

        // 履歴には残らないが、最終アドレスは記憶される
        assert!(app.address_history().is_empty());
        assert_eq!(app.last_address(), Some("172.23.12.139"));
    }
}
