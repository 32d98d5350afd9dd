//! 色処理
//!
//! RGB色の表現と、背景色に対する文字色選択のための輝度計算を提供します。

/// RGB色 (各チャネル 0〜255)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// 赤
    pub r: u8,
    /// 緑
    pub g: u8,
    /// 青
    pub b: u8,
}

/// 背景色に対する文字色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextColor {
    /// 黒文字 (明るい背景向け)
    Black,
    /// 白文字 (暗い背景向け)
    White,
}

impl Rgb {
    /// 黒
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    /// 白
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    /// 新しい色を作成
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// 知覚輝度を計算 (0.0〜1.0)
    ///
    /// ITU-R BT.601の係数による加重平均。
    pub fn luminance(&self) -> f64 {
        (0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)) / 255.0
    }

    /// この色を背景としたときに読みやすい文字色を選択
    ///
    /// 輝度が0.6を超える場合は黒、それ以外は白。
    pub fn text_color(&self) -> TextColor {
        if self.luminance() > 0.6 {
            TextColor::Black
        } else {
            TextColor::White
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luminance() {
        // 黒と白
        assert_eq!(Rgb::BLACK.luminance(), 0.0);
        assert!((Rgb::WHITE.luminance() - 1.0).abs() < 1e-9);

        // グレーの輝度はチャネル値に比例する
        let gray = Rgb::new(128, 128, 128);
        assert!((gray.luminance() - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn test_text_color_for_extremes() {
        assert_eq!(Rgb::BLACK.text_color(), TextColor::White);
        assert_eq!(Rgb::WHITE.text_color(), TextColor::Black);

        // 暗い色は白文字
        assert_eq!(Rgb::new(10, 20, 30).text_color(), TextColor::White);
        // 明るい色は黒文字
        assert_eq!(Rgb::new(250, 240, 200).text_color(), TextColor::Black);
    }

    #[test]
    fn test_text_color_threshold_boundary() {
        // グレー153: 輝度 = 153/255 = 0.6 ちょうど。0.6を超えないので白文字
        assert_eq!(Rgb::new(153, 153, 153).text_color(), TextColor::White);

        // グレー154: 輝度 > 0.6 なので黒文字
        assert_eq!(Rgb::new(154, 154, 154).text_color(), TextColor::Black);
    }

    #[test]
    fn test_green_dominates_luminance() {
        // 緑は係数が最も大きいため、単色では緑が最も明るい
        let red = Rgb::new(255, 0, 0).luminance();
        let green = Rgb::new(0, 255, 0).luminance();
        let blue = Rgb::new(0, 0, 255).luminance();

        assert!(green > red);
        assert!(red > blue);
    }
}
