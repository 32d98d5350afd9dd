//! デバイスコマンド定義
//!
//! ムードランプのHTTP APIに対するコマンドと送信先を定義します。
//! デバイスはボディなしのGETリクエストのみを受け付け、
//! パスとクエリ文字列だけで操作内容を表現します。

use std::fmt;

use crate::color::Rgb;
use crate::error::{CommonError, Result};

/// ライト番号 (1〜3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightId {
    /// ライト1
    One,
    /// ライト2
    Two,
    /// ライト3
    Three,
}

impl LightId {
    /// 全ライト
    pub const ALL: [LightId; 3] = [LightId::One, LightId::Two, LightId::Three];

    /// 1始まりのライト番号を取得
    pub fn number(self) -> u8 {
        match self {
            LightId::One => 1,
            LightId::Two => 2,
            LightId::Three => 3,
        }
    }

    /// 0始まりの配列インデックスを取得
    pub fn index(self) -> usize {
        (self.number() - 1) as usize
    }

    /// 1始まりの番号からライトを取得
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(LightId::One),
            2 => Some(LightId::Two),
            3 => Some(LightId::Three),
            _ => None,
        }
    }
}

impl fmt::Display for LightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ライト{}", self.number())
    }
}

/// デバイスに送信されるコマンド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 点灯
    PowerOn,

    /// 消灯
    PowerOff,

    /// レインボーモードを開始
    Rainbow,

    /// 明るさを設定
    Brightness {
        /// 明るさ (0〜255)
        value: u8,
    },

    /// 指定ライトの色を設定
    LightColor {
        /// 対象ライト
        light: LightId,
        /// 設定する色
        color: Rgb,
    },
}

impl Command {
    /// デバイスAPIのパスとクエリ文字列へ変換
    pub fn path(&self) -> String {
        match self {
            Command::PowerOn => "on".to_string(),
            Command::PowerOff => "off".to_string(),
            Command::Rainbow => "rainbow?state=on".to_string(),
            Command::Brightness { value } => format!("brightness?value={}", value),
            Command::LightColor { light, color } => format!(
                "color{}?r={}&g={}&b={}",
                light.number(),
                color.r,
                color.g,
                color.b
            ),
        }
    }

    /// ログ表示用の名称
    pub fn label(&self) -> String {
        match self {
            Command::PowerOn => "点灯".to_string(),
            Command::PowerOff => "消灯".to_string(),
            Command::Rainbow => "レインボー".to_string(),
            Command::Brightness { value } => format!("明るさ {}", value),
            Command::LightColor { light, color } => {
                format!("{} 色 {},{},{}", light, color.r, color.g, color.b)
            }
        }
    }
}

/// 送信先デバイス
///
/// ユーザーが入力したアドレス文字列をそのままベースURLとして使用します。
/// 検証は「空でないこと」のみで、それ以外の形式チェックは行いません。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceTarget {
    /// ネットワークアドレス (IPアドレスまたはホスト名)
    address: String,
}

impl DeviceTarget {
    /// アドレス文字列から送信先を作成
    ///
    /// 前後の空白は除去されます。空の場合はエラーを返します。
    pub fn parse(address: &str) -> Result<Self> {
        let trimmed = address.trim();
        if trimmed.is_empty() {
            return Err(CommonError::MissingAddress);
        }

        Ok(Self {
            address: trimmed.to_string(),
        })
    }

    /// アドレス文字列を取得
    pub fn address(&self) -> &str {
        &self.address
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// コマンドの完全なURLを取得
    pub fn command_url(&self, command: &Command) -> String {
        format!("{}/{}", self.base_url(), command.path())
    }
}

impl fmt::Display for DeviceTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_paths() {
        // 基本操作
        assert_eq!(Command::PowerOn.path(), "on");
        assert_eq!(Command::PowerOff.path(), "off");
        assert_eq!(Command::Rainbow.path(), "rainbow?state=on");

        // 明るさ
        assert_eq!(
            Command::Brightness { value: 0 }.path(),
            "brightness?value=0"
        );
        assert_eq!(
            Command::Brightness { value: 128 }.path(),
            "brightness?value=128"
        );
        assert_eq!(
            Command::Brightness { value: 255 }.path(),
            "brightness?value=255"
        );
    }

    #[test]
    fn test_color_command_paths() {
        // 3つのライトそれぞれのパス
        let color = Rgb::new(10, 20, 30);
        let paths: Vec<String> = LightId::ALL
            .iter()
            .map(|&light| Command::LightColor { light, color }.path())
            .collect();

        assert_eq!(
            paths,
            vec![
                "color1?r=10&g=20&b=30",
                "color2?r=10&g=20&b=30",
                "color3?r=10&g=20&b=30",
            ]
        );
    }

    #[test]
    fn test_device_target_parse() {
        // 通常のアドレス
        let target = DeviceTarget::parse("172.23.12.139").unwrap();
        assert_eq!(target.address(), "172.23.12.139");
        assert_eq!(target.base_url(), "http://172.23.12.139");

        // 前後の空白は除去される
        let target = DeviceTarget::parse("  192.168.0.10 ").unwrap();
        assert_eq!(target.address(), "192.168.0.10");
    }

    #[test]
    fn test_device_target_rejects_empty_address() {
        assert!(matches!(
            DeviceTarget::parse(""),
            Err(CommonError::MissingAddress)
        ));
        assert!(matches!(
            DeviceTarget::parse("   "),
            Err(CommonError::MissingAddress)
        ));
    }

    #[test]
    fn test_command_url() {
        let target = DeviceTarget::parse("172.23.12.139").unwrap();
        assert_eq!(
            target.command_url(&Command::PowerOn),
            "http://172.23.12.139/on"
        );
        assert_eq!(
            target.command_url(&Command::LightColor {
                light: LightId::Two,
                color: Rgb::new(255, 0, 128),
            }),
            "http://172.23.12.139/color2?r=255&g=0&b=128"
        );
    }

    #[test]
    fn test_light_id_numbering() {
        assert_eq!(LightId::One.number(), 1);
        assert_eq!(LightId::Three.index(), 2);
        assert_eq!(LightId::from_number(2), Some(LightId::Two));
        assert_eq!(LightId::from_number(0), None);
        assert_eq!(LightId::from_number(4), None);
    }
}
