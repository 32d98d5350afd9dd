//! ムードランプ操作クライアント
//!
//! このクレートは、ネットワーク上のムードランプをHTTP GETコマンドで
//! 操作するデスクトップクライアントを実装します。

pub mod app;
pub mod network;
pub mod ui;

// 主要コンポーネントを再エクスポート
pub use app::App;
pub use ui::MainWindow;
