//! スタイル設定
//!
//! UIスタイルを定義します。

use egui::{Color32, FontFamily, FontId, Rounding, Stroke};
use mood_lamp_rs_common::color::{Rgb, TextColor};

/// カラースキーム
#[derive(Debug, Clone)]
pub struct ColorScheme {
    /// 背景色
    pub background: Color32,
    /// 前景色（テキスト）
    pub foreground: Color32,
    /// 控えめなテキスト色
    pub weak: Color32,
    /// プライマリカラー
    pub primary: Color32,
    /// セカンダリカラー
    pub secondary: Color32,
    /// アクセントカラー
    pub accent: Color32,
    /// エラーカラー
    pub error: Color32,
    /// 警告カラー
    pub warning: Color32,
    /// 成功カラー
    pub success: Color32,
}

/// テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// ライトテーマ
    Light,
    /// ダークテーマ
    Dark,
    /// ハイコントラストテーマ
    HighContrast,
}

impl Theme {
    /// 設定ファイル上の名前からテーマを取得
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Theme::Light,
            "high-contrast" => Theme::HighContrast,
            _ => Theme::Dark,
        }
    }

    /// 設定ファイル上の名前を取得
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::HighContrast => "high-contrast",
        }
    }

    /// 表示名を取得
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "ライト",
            Theme::Dark => "ダーク",
            Theme::HighContrast => "ハイコントラスト",
        }
    }
}

/// スタイル設定
#[derive(Debug, Clone)]
pub struct Styles {
    /// テーマ
    pub theme: Theme,
    /// 通常テキストのフォントサイズ
    pub font_size: f32,
    /// ボタンの丸み
    pub button_rounding: Rounding,
    /// ウィンドウの丸み
    pub window_rounding: Rounding,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(30, 30, 30),
            foreground: Color32::from_rgb(240, 240, 240),
            weak: Color32::from_rgb(150, 150, 150),
            primary: Color32::from_rgb(70, 130, 180),
            secondary: Color32::from_rgb(50, 50, 50),
            accent: Color32::from_rgb(100, 150, 200),
            error: Color32::from_rgb(220, 50, 50),
            warning: Color32::from_rgb(220, 180, 50),
            success: Color32::from_rgb(50, 180, 50),
        }
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            font_size: 16.0,
            button_rounding: Rounding::same(4.0),
            window_rounding: Rounding::same(6.0),
        }
    }
}

impl Styles {
    /// テーマ名とフォントサイズからスタイルを作成
    pub fn from_settings(theme_name: &str, font_size: f32) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            font_size,
            ..Default::default()
        }
    }

    /// テーマに基づいたカラースキームを取得
    pub fn color_scheme(&self) -> ColorScheme {
        match self.theme {
            Theme::Light => ColorScheme {
                background: Color32::from_rgb(240, 240, 240),
                foreground: Color32::from_rgb(30, 30, 30),
                weak: Color32::from_rgb(110, 110, 110),
                primary: Color32::from_rgb(70, 130, 180),
                secondary: Color32::from_rgb(220, 220, 220),
                accent: Color32::from_rgb(100, 150, 200),
                error: Color32::from_rgb(200, 50, 50),
                warning: Color32::from_rgb(180, 130, 30),
                success: Color32::from_rgb(50, 150, 50),
            },
            Theme::Dark => ColorScheme::default(),
            Theme::HighContrast => ColorScheme {
                background: Color32::BLACK,
                foreground: Color32::WHITE,
                weak: Color32::from_rgb(200, 200, 200),
                primary: Color32::from_rgb(0, 174, 255),
                secondary: Color32::from_rgb(50, 50, 50),
                accent: Color32::from_rgb(255, 215, 0),
                error: Color32::from_rgb(255, 70, 70),
                warning: Color32::from_rgb(255, 215, 0),
                success: Color32::from_rgb(50, 255, 50),
            },
        }
    }

    /// テキストスタイルを取得
    pub fn text_style(&self) -> FontId {
        FontId::new(self.font_size, FontFamily::Proportional)
    }

    /// テーマをeguiのスタイルに適用
    pub fn apply_to_egui(&self, style: &mut egui::Style) {
        let colors = self.color_scheme();

        style.text_styles = [
            (
                egui::TextStyle::Heading,
                FontId::new(self.font_size * 1.25, FontFamily::Proportional),
            ),
            (egui::TextStyle::Body, self.text_style()),
            (
                egui::TextStyle::Monospace,
                FontId::new(self.font_size * 0.85, FontFamily::Monospace),
            ),
            (egui::TextStyle::Button, self.text_style()),
            (
                egui::TextStyle::Small,
                FontId::new(self.font_size * 0.75, FontFamily::Proportional),
            ),
        ]
        .into();

        style.visuals.window_rounding = self.window_rounding;
        style.visuals.window_shadow.extrusion = 8.0;

        style.visuals.widgets.noninteractive.rounding = Rounding::same(2.0);
        style.visuals.widgets.inactive.rounding = self.button_rounding;
        style.visuals.widgets.hovered.rounding = self.button_rounding;
        style.visuals.widgets.active.rounding = self.button_rounding;

        style.visuals.widgets.noninteractive.bg_fill = colors.secondary;
        style.visuals.widgets.inactive.bg_fill = colors.secondary;
        style.visuals.widgets.hovered.bg_fill = colors.primary;
        style.visuals.widgets.active.bg_fill = colors.accent;

        style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors.foreground);
        style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors.foreground);
        style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.5, Color32::WHITE);
        style.visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);

        style.visuals.selection.bg_fill = colors.accent.linear_multiply(0.5);
        style.visuals.selection.stroke = Stroke::new(1.0, colors.accent);

        // 背景色を設定
        style.visuals.extreme_bg_color = colors.background;
        style.visuals.window_fill = colors.background;
        style.visuals.panel_fill = colors.background;

        // テキスト色を設定
        style.visuals.override_text_color = Some(colors.foreground);

        // スクロールバーと余白
        style.spacing.scroll_bar_width = 8.0;
        style.spacing.window_margin = egui::vec2(12.0, 12.0).into();

        // アニメーションの持続時間
        style.animation_time = 0.15;
    }
}

/// 共通クレートのRGB色をegui色へ変換
pub fn rgb_to_color32(color: Rgb) -> Color32 {
    Color32::from_rgb(color.r, color.g, color.b)
}

/// egui色を共通クレートのRGB色へ変換
pub fn color32_to_rgb(color: Color32) -> Rgb {
    Rgb::new(color.r(), color.g(), color.b())
}

/// 背景色に応じたボタン文字色を取得
pub fn button_text_color(background: Rgb) -> Color32 {
    match background.text_color() {
        TextColor::Black => Color32::BLACK,
        TextColor::White => Color32::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_name_roundtrip() {
        for theme in [Theme::Light, Theme::Dark, Theme::HighContrast] {
            assert_eq!(Theme::from_name(theme.name()), theme);
        }

        // 不明な名前はダークにフォールバック
        assert_eq!(Theme::from_name("unknown"), Theme::Dark);
    }

    #[test]
    fn test_rgb_color32_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        let converted = color32_to_rgb(rgb_to_color32(rgb));
        assert_eq!(converted, rgb);
    }

    #[test]
    fn test_button_text_color_follows_luminance() {
        assert_eq!(button_text_color(Rgb::new(255, 255, 255)), Color32::BLACK);
        assert_eq!(button_text_color(Rgb::new(10, 20, 30)), Color32::WHITE);
    }
}
