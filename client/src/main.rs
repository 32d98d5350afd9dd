//! クライアントエントリポイント
//!
//! ムードランプ操作クライアントのメインエントリポイント

use anyhow::anyhow;
use eframe::egui;
use mood_lamp_rs_client::ui::MainWindow;

fn main() -> anyhow::Result<()> {
    // ロガーを初期化
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    // パニックハンドラを設定（未処理のパニックをログに記録）
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("クライアントでパニックが発生しました: {:?}", panic_info);
    }));

    // ネイティブオプションを設定
    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(480.0, 760.0)),
        min_window_size: Some(egui::vec2(360.0, 560.0)),
        resizable: true,
        icon_data: load_icon(),
        ..Default::default()
    };

    // アプリケーションを実行
    eframe::run_native(
        "ムードランプクライアント",
        native_options,
        Box::new(|cc| Box::new(MainWindow::new(cc))),
    )
    .map_err(|e| anyhow!("アプリケーションの起動に失敗しました: {}", e))
}

/// アプリケーションアイコンを読み込む
fn load_icon() -> Option<eframe::IconData> {
    // アイコンファイルのパス
    let icon_path = std::path::Path::new("assets/app.png");

    if icon_path.exists() {
        // 画像を読み込み
        let image = image::open(icon_path).ok()?;
        let image = image.to_rgba8();

        // アイコンデータを作成
        let (width, height) = image.dimensions();
        let rgba = image.into_raw();

        Some(eframe::IconData {
            rgba,
            width,
            height,
        })
    } else {
        log::warn!("アイコンファイルが見つかりませんでした: {:?}", icon_path);
        None
    }
}
