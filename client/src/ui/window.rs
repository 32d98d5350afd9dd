//! メインウィンドウ
//!
//! アプリケーションのメインウィンドウを実装します。

use super::styles::color32_to_rgb;
use super::{ActivityLog, ControlPanel, DialogEvent, LampState, LogKind, SettingsPanel, Styles};
use crate::app::App;
use crate::network::{CommandDispatcher, DispatchEvent, HttpCommandSender};
use egui::color_picker::{color_picker_color32, Alpha};
use egui::{Color32, RichText, Ui};
use mood_lamp_rs_common::color::Rgb;
use mood_lamp_rs_common::protocol::{Command, LightId};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// 通知の表示時間
const NOTICE_DURATION: Duration = Duration::from_secs(3);

/// メインウィンドウ
pub struct MainWindow {
    /// アプリケーション (設定永続化)
    app: App,
    /// 接続先アドレス入力
    address: String,
    /// ランプ表示状態
    lamp: LampState,
    /// マスターカラーピッカーの現在色
    master_picker: Color32,
    /// ライトボタンと色選択ダイアログ
    control_panel: ControlPanel,
    /// 設定パネル
    settings_panel: SettingsPanel,
    /// スクロールバックログ
    log: ActivityLog,
    /// コマンドディスパッチャ
    dispatcher: CommandDispatcher,
    /// スタイル設定
    styles: Styles,
    /// 一時通知 (メッセージと表示開始時刻)
    notice: Option<(String, Instant)>,
    /// 設定ウィンドウの表示状態
    show_settings: bool,
}

impl MainWindow {
    /// 新しいメインウィンドウを作成
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = App::new();
        let settings = app.settings().clone();

        // 保存されたテーマを適用
        let styles = Styles::from_settings(&settings.display.theme, settings.display.font_size);
        let mut style = (*cc.egui_ctx.style()).clone();
        styles.apply_to_egui(&mut style);
        cc.egui_ctx.set_style(style);

        // 最後に使用したアドレスを復元
        let address = app
            .last_address()
            .map(str::to_string)
            .unwrap_or_else(|| settings.network.default_address.clone());

        let dispatcher = CommandDispatcher::new(Arc::new(HttpCommandSender::new()))
            .with_repaint(cc.egui_ctx.clone());

        Self {
            app,
            address,
            lamp: LampState::default(),
            master_picker: Color32::WHITE,
            control_panel: ControlPanel::new(),
            settings_panel: SettingsPanel::new(),
            log: ActivityLog::new(settings.display.log_limit),
            dispatcher,
            styles,
            notice: None,
            show_settings: false,
        }
    }

    /// コマンドを送信
    ///
    /// アドレスが空の場合は通知を表示し、リクエストは行われません。
    fn send_command(&mut self, command: Command) {
        match self.dispatcher.dispatch(&self.address, command) {
            Ok(()) => {
                let address = self.address.trim();
                if self.app.last_address() != Some(address) {
                    self.app.add_to_history(address);
                }
            }
            Err(e) => {
                self.notice = Some((e.to_string(), Instant::now()));
            }
        }
    }

    /// マスターカラーの変更を全ライトへ反映
    fn apply_master_color(&mut self, color: Rgb) {
        // 全ライトへ同じ色を送信
        for light in LightId::ALL {
            self.send_command(Command::LightColor { light, color });
        }

        // 全ライトの上書き色をマスターカラーで置き換える
        self.lamp.apply_master(color);
    }

    /// ディスパッチャからのイベントをログへ反映
    fn drain_dispatch_events(&mut self) {
        for event in self.dispatcher.drain_events() {
            match event {
                DispatchEvent::Sent { url } => {
                    self.log.push(LogKind::Sent, format!("→ {}", url));
                }
                DispatchEvent::Completed { status, body, .. } => {
                    self.log.push(LogKind::Response, format!("← {} {}", status, body));
                }
                DispatchEvent::Failed { message, .. } => {
                    self.log.push(LogKind::Error, format!("✖ {}", message));
                }
            }
        }
    }

    /// メインパネルを描画
    fn draw_main(&mut self, ui: &mut Ui) {
        let colors = self.styles.color_scheme();

        // 接続先アドレス
        ui.horizontal(|ui| {
            ui.label("接続先:");
            ui.add(
                egui::TextEdit::singleline(&mut self.address)
                    .hint_text("例: 172.23.12.139")
                    .desired_width(180.0),
            );

            // アドレス履歴
            let history: Vec<String> = self.app.address_history().to_vec();
            if !history.is_empty() {
                egui::ComboBox::from_id_source("address_history")
                    .selected_text("履歴")
                    .width(72.0)
                    .show_ui(ui, |ui| {
                        for entry in &history {
                            if ui.selectable_label(false, entry.as_str()).clicked() {
                                self.address = entry.clone();
                            }
                        }
                    });
            }
        });

        // 一時通知
        if let Some((message, _)) = &self.notice {
            ui.colored_label(colors.warning, message.as_str());
        }

        ui.add_space(4.0);
        ui.separator();

        // 基本操作
        ui.horizontal(|ui| {
            if ui.button("点灯").clicked() {
                self.send_command(Command::PowerOn);
            }

            if ui.button("消灯").clicked() {
                self.send_command(Command::PowerOff);
            }

            if ui.button("レインボー").clicked() {
                self.send_command(Command::Rainbow);
            }
        });

        ui.add_space(4.0);

        // 明るさ。ドラッグ中の中間値は送らず、離した時点の値だけを送信する
        let response = ui.add(egui::Slider::new(&mut self.lamp.brightness, 0..=255).text("明るさ"));
        if response.drag_released() {
            self.send_command(Command::Brightness {
                value: self.lamp.brightness,
            });
        }

        ui.add_space(8.0);

        // マスターカラー: 変更のたびに全ライトへ適用される
        ui.label("マスターカラー");
        if color_picker_color32(ui, &mut self.master_picker, Alpha::Opaque) {
            let color = color32_to_rgb(self.master_picker);
            self.apply_master_color(color);
        }

        ui.add_space(8.0);

        // ライトごとの色
        ui.label("ライトごとの色");
        self.control_panel.ui(ui, &self.lamp);

        ui.add_space(8.0);
        ui.separator();
        ui.label("ログ");

        self.log.ui(ui, &colors);
    }

    /// 設定ウィンドウを描画
    fn draw_settings_window(&mut self, ctx: &egui::Context) {
        let mut open = true;
        let mut settings = self.app.settings().clone();
        let mut changed = false;

        egui::Window::new("設定")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                changed = self.settings_panel.ui(ui, &mut settings);
            });

        if changed {
            // テーマとログ設定を反映して保存
            self.styles =
                Styles::from_settings(&settings.display.theme, settings.display.font_size);
            let mut style = (*ctx.style()).clone();
            self.styles.apply_to_egui(&mut style);
            ctx.set_style(style);

            self.log.set_limit(settings.display.log_limit);
            self.app.update_settings(settings);
        }

        if !open {
            self.show_settings = false;
        }
    }
}

impl eframe::App for MainWindow {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        // バックグラウンド送信の結果を取り込む
        self.drain_dispatch_events();

        // トップバー
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("ファイル", |ui| {
                    if ui.button("終了").clicked() {
                        ui.close_menu();
                        frame.close();
                    }
                });

                ui.menu_button("設定", |ui| {
                    if ui.button("環境設定...").clicked() {
                        ui.close_menu();
                        self.show_settings = true;
                    }
                });

                // 右寄せの要素
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(format!("v{}", mood_lamp_rs_common::VERSION)).small(),
                    );
                });
            });
        });

        // 設定ウィンドウ
        if self.show_settings {
            self.draw_settings_window(ctx);
        }

        // メインパネル
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_main(ui);
        });

        // 色選択ダイアログ
        for event in self.control_panel.dialog_ui(ctx) {
            match event {
                DialogEvent::Preview { light, color } => {
                    self.log.push(
                        LogKind::Info,
                        format!("{} プレビュー: {},{},{}", light, color.r, color.g, color.b),
                    );
                }
                DialogEvent::Confirmed { light, color } => {
                    self.send_command(Command::LightColor { light, color });
                    self.lamp.set_override(light, color);
                }
            }
        }

        // 通知の表示期限を処理
        if let Some((_, shown_at)) = &self.notice {
            if shown_at.elapsed() >= NOTICE_DURATION {
                self.notice = None;
            } else {
                // 期限切れを検出するために再描画を継続する
                ctx.request_repaint();
            }
        }
    }
}
