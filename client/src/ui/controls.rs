//! 操作コントロール
//!
//! ライトごとの色ボタンと色選択ダイアログを実装します。

use super::styles::{button_text_color, color32_to_rgb, rgb_to_color32};
use super::LampState;
use egui::color_picker::{color_picker_color32, Alpha};
use egui::{Color32, Context, RichText, Ui};
use mood_lamp_rs_common::color::Rgb;
use mood_lamp_rs_common::protocol::LightId;

/// ダイアログ未確定時の初期色
const NEUTRAL_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// ライト操作ボタン
///
/// 背景色はライトの表示色、文字色は輝度に応じた黒または白になります。
pub struct LightButton {
    /// 対象ライト
    light: LightId,
}

impl LightButton {
    /// 新しいライトボタンを作成
    pub fn new(light: LightId) -> Self {
        Self { light }
    }

    /// UIに表示。クリックされた場合はtrueを返す
    pub fn ui(&self, ui: &mut Ui, color: Option<Rgb>) -> bool {
        let (fill, text_color) = match color {
            Some(rgb) => (rgb_to_color32(rgb), button_text_color(rgb)),
            None => (
                ui.visuals().widgets.inactive.bg_fill,
                ui.visuals().widgets.inactive.fg_stroke.color,
            ),
        };

        let button =
            egui::Button::new(RichText::new(self.light.to_string()).color(text_color)).fill(fill);

        ui.add(button)
            .on_hover_text(format!("{}の色を選択", self.light))
            .clicked()
    }
}

/// 色選択ダイアログ
struct ColorPickerDialog {
    /// 対象ライト
    light: LightId,
    /// 選択中の色
    color: Color32,
    /// 直前にプレビューとして通知した色
    last_preview: Option<Color32>,
}

/// 色選択ダイアログから発生するイベント
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    /// 選択中の色が変化した (確定前のプレビュー)
    Preview {
        /// 対象ライト
        light: LightId,
        /// 選択中の色
        color: Rgb,
    },

    /// 色が確定された
    Confirmed {
        /// 対象ライト
        light: LightId,
        /// 確定した色
        color: Rgb,
    },
}

/// コントロールパネル
///
/// 3つのライトボタンと、開いている色選択ダイアログを管理します。
pub struct ControlPanel {
    /// ライトボタン群
    buttons: [LightButton; 3],
    /// 開いている色選択ダイアログ
    dialog: Option<ColorPickerDialog>,
}

impl ControlPanel {
    /// 新しいコントロールパネルを作成
    pub fn new() -> Self {
        Self {
            buttons: [
                LightButton::new(LightId::One),
                LightButton::new(LightId::Two),
                LightButton::new(LightId::Three),
            ],
            dialog: None,
        }
    }

    /// ライトボタン列を表示
    ///
    /// ボタンがクリックされたライトの色選択ダイアログを開きます。
    pub fn ui(&mut self, ui: &mut Ui, state: &LampState) {
        ui.horizontal(|ui| {
            for button in &self.buttons {
                let color = state.effective_color(button.light);
                if button.ui(ui, color) {
                    self.dialog = Some(ColorPickerDialog {
                        light: button.light,
                        color: color.map(rgb_to_color32).unwrap_or(NEUTRAL_COLOR),
                        last_preview: None,
                    });
                }
            }
        });
    }

    /// 開いているダイアログを表示し、発生したイベントを返す
    pub fn dialog_ui(&mut self, ctx: &Context) -> Vec<DialogEvent> {
        let mut events = Vec::new();
        let mut close = false;

        if let Some(dialog) = &mut self.dialog {
            egui::Window::new(format!("{}の色を選択", dialog.light))
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    if color_picker_color32(ui, &mut dialog.color, Alpha::Opaque)
                        && dialog.last_preview != Some(dialog.color)
                    {
                        dialog.last_preview = Some(dialog.color);
                        events.push(DialogEvent::Preview {
                            light: dialog.light,
                            color: color32_to_rgb(dialog.color),
                        });
                    }

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("キャンセル").clicked() {
                            close = true;
                        }

                        if ui.button("設定").clicked() {
                            events.push(DialogEvent::Confirmed {
                                light: dialog.light,
                                color: color32_to_rgb(dialog.color),
                            });
                            close = true;
                        }
                    });
                });
        }

        if close {
            self.dialog = None;
        }

        events
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}
