//! 設定パネル
//!
//! アプリケーション設定のUIを実装します。

use super::Theme;
use egui::{ComboBox, Grid, Ui};
use mood_lamp_rs_common::config::ClientConfig;
use serde::{Deserialize, Serialize};

/// アプリケーション設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// ネットワーク設定
    pub network: NetworkSettings,
    /// 表示設定
    pub display: DisplaySettings,
}

/// ネットワーク設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSettings {
    /// 既定の接続先アドレス
    pub default_address: String,
    /// アドレス履歴を保存するかどうか
    pub save_history: bool,
}

/// 表示設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// テーマ名
    pub theme: String,
    /// 通常テキストのフォントサイズ
    pub font_size: f32,
    /// 画面内ログの最大行数
    pub log_limit: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            network: NetworkSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            default_address: String::new(),
            save_history: true,
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            font_size: 16.0,
            log_limit: 500,
        }
    }
}

impl AppSettings {
    /// ユーザー編集可能な既定値から初期設定を作成
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            network: NetworkSettings {
                default_address: config.device.default_address.clone(),
                ..Default::default()
            },
            display: DisplaySettings {
                theme: config.ui.theme.clone(),
                font_size: config.ui.font_size,
                log_limit: config.ui.log_limit,
            },
        }
    }
}

/// 設定パネル
pub struct SettingsPanel;

impl SettingsPanel {
    /// 新しい設定パネルを作成
    pub fn new() -> Self {
        Self
    }

    /// 設定UIを表示。変更があった場合はtrueを返す
    pub fn ui(&mut self, ui: &mut Ui, settings: &mut AppSettings) -> bool {
        let mut changed = false;

        ui.heading("ネットワーク");
        Grid::new("network_settings")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("既定のアドレス:");
                changed |= ui
                    .text_edit_singleline(&mut settings.network.default_address)
                    .changed();
                ui.end_row();

                ui.label("アドレス履歴を保存:");
                changed |= ui.checkbox(&mut settings.network.save_history, "").changed();
                ui.end_row();
            });

        ui.add_space(8.0);

        ui.heading("表示");
        Grid::new("display_settings")
            .num_columns(2)
            .spacing([12.0, 6.0])
            .show(ui, |ui| {
                ui.label("テーマ:");
                let current = Theme::from_name(&settings.display.theme);
                ComboBox::from_id_source("theme_select")
                    .selected_text(current.label())
                    .show_ui(ui, |ui| {
                        for theme in [Theme::Dark, Theme::Light, Theme::HighContrast] {
                            if ui
                                .selectable_value(
                                    &mut settings.display.theme,
                                    theme.name().to_string(),
                                    theme.label(),
                                )
                                .clicked()
                            {
                                changed = true;
                            }
                        }
                    });
                ui.end_row();

                ui.label("フォントサイズ:");
                changed |= ui
                    .add(egui::Slider::new(
                        &mut settings.display.font_size,
                        12.0..=22.0,
                    ))
                    .changed();
                ui.end_row();

                ui.label("ログの最大行数:");
                changed |= ui
                    .add(egui::DragValue::new(&mut settings.display.log_limit).clamp_range(100..=5000))
                    .changed();
                ui.end_row();
            });

        changed
    }
}

impl Default for SettingsPanel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config() {
        let mut config = ClientConfig::default();
        config.device.default_address = "172.23.12.139".to_string();
        config.ui.theme = "light".to_string();
        config.ui.log_limit = 250;

        let settings = AppSettings::from_config(&config);
        assert_eq!(settings.network.default_address, "172.23.12.139");
        assert!(settings.network.save_history);
        assert_eq!(settings.display.theme, "light");
        assert_eq!(settings.display.log_limit, 250);
    }

    #[test]
    fn test_partial_saved_settings_use_defaults() {
        // 古いバージョンで保存された部分的な設定も読める
        let settings: AppSettings =
            serde_json::from_str(r#"{"network": {"default_address": "10.0.0.5"}}"#).unwrap();

        assert_eq!(settings.network.default_address, "10.0.0.5");
        assert!(settings.network.save_history);
        assert_eq!(settings.display.theme, "dark");
    }
}
