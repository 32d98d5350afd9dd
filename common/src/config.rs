//! 設定管理
//!
//! クライアント設定の読み込みと保存を提供します。
//! 設定ファイルはJSONまたはTOML形式で、形式はファイル拡張子から判定されます。

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::utils::path as path_util;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    /// I/O エラー
    #[error("設定の読み書き中にI/Oエラーが発生しました: {0}")]
    Io(#[from] io::Error),

    /// JSON エラー
    #[error("JSONの解析に失敗しました: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML デシリアライズエラー
    #[error("TOMLの解析に失敗しました: {0}")]
    TomlDe(#[from] toml::de::Error),

    /// TOML シリアライズエラー
    #[error("TOMLのシリアライズに失敗しました: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// 設定ファイル形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// JSON 形式
    Json,
    /// TOML 形式
    Toml,
}

impl Default for ConfigFormat {
    fn default() -> Self {
        ConfigFormat::Json
    }
}

impl ConfigFormat {
    /// ファイル拡張子から設定形式を判定
    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| match ext.to_lowercase().as_str() {
                "json" => Some(ConfigFormat::Json),
                "toml" => Some(ConfigFormat::Toml),
                _ => None,
            })
    }

    /// ファイル名から設定形式を判定
    pub fn from_path(path: &Path) -> Option<Self> {
        Self::from_extension(path)
    }
}

/// クライアント設定
///
/// ユーザーが直接編集できる既定値の集合。アプリケーションが管理する
/// 状態 (アドレス履歴など) はクライアント側の保存設定に分離されています。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// デバイス設定
    pub device: DeviceConfig,
    /// UI設定
    pub ui: UiConfig,
}

/// デバイス設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// 既定の接続先アドレス
    pub default_address: String,
}

/// UI設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// テーマ名 ("dark" / "light" / "high-contrast")
    pub theme: String,
    /// 通常テキストのフォントサイズ
    pub font_size: f32,
    /// 画面内ログの最大行数
    pub log_limit: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            device: DeviceConfig::default(),
            ui: UiConfig::default(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            default_address: String::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: 16.0,
            log_limit: 500,
        }
    }
}

impl ClientConfig {
    /// 既定の設定ファイルパスを取得
    pub fn default_path() -> PathBuf {
        path_util::config_dir().join("config.json")
    }

    /// ファイルから設定を読み込み
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;

        match ConfigFormat::from_path(path).unwrap_or_default() {
            ConfigFormat::Json => Ok(serde_json::from_str(&content)?),
            ConfigFormat::Toml => Ok(toml::from_str(&content)?),
        }
    }

    /// ファイルへ設定を保存
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            path_util::ensure_dir_exists(parent)?;
        }

        let content = match ConfigFormat::from_path(path).unwrap_or_default() {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        fs::write(path, content)?;
        Ok(())
    }

    /// 既定パスから設定を読み込み
    ///
    /// ファイルが存在しない場合や解析に失敗した場合はデフォルト値を返します。
    pub fn load_or_default() -> Self {
        let path = Self::default_path();
        if !path.exists() {
            return Self::default();
        }

        match Self::load(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("設定ファイルの読み込みに失敗しました: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("config.TOML")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("config.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("config")), None);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert!(config.device.default_address.is_empty());
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.log_limit, 500);
    }

    #[test]
    fn test_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ClientConfig::default();
        config.device.default_address = "172.23.12.139".to_string();
        config.ui.theme = "light".to_string();

        config.save(&path).unwrap();
        let loaded = ClientConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ClientConfig::default();
        config.device.default_address = "lamp.local".to_string();
        config.ui.log_limit = 1000;

        config.save(&path).unwrap();
        let loaded = ClientConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"device": {"default_address": "10.0.0.5"}}"#).unwrap();

        let loaded = ClientConfig::load(&path).unwrap();
        assert_eq!(loaded.device.default_address, "10.0.0.5");
        // 省略されたセクションはデフォルト値
        assert_eq!(loaded.ui.theme, "dark");
    }
}
