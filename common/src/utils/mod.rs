//! ユーティリティモジュール
//!
//! 各種ユーティリティ機能を提供します。

pub mod time;

/// パス関連のユーティリティ
pub mod path {
    use std::path::{Path, PathBuf};

    /// 設定ディレクトリを取得
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("mood-lamp-rs")
    }

    /// パスが存在するか確認し、ディレクトリなら作成
    pub fn ensure_dir_exists(path: &Path) -> std::io::Result<()> {
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        } else if !path.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                format!("Path exists but is not a directory: {:?}", path),
            ));
        }
        Ok(())
    }
}
