//! UIモジュール
//!
//! このモジュールはムードランプ操作クライアントのユーザーインターフェースを担当します。

mod controls;
mod log_view;
mod settings;
mod state;
mod styles;
mod window;

pub use controls::{ControlPanel, DialogEvent, LightButton};
pub use log_view::{ActivityLog, LogKind, LogLine};
pub use settings::{AppSettings, DisplaySettings, NetworkSettings, SettingsPanel};
pub use state::LampState;
pub use styles::{ColorScheme, Styles, Theme};
pub use window::MainWindow;
