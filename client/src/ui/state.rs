//! ランプ表示状態
//!
//! マスターカラーとライトごとの上書き色の状態遷移を実装します。

use mood_lamp_rs_common::color::Rgb;
use mood_lamp_rs_common::protocol::LightId;

/// ランプの表示状態
///
/// 各ライトは「マスターカラーに追従」か「固定色で上書き」のどちらかの
/// 状態を持ちます。上書きは個別ピッカーの確定か、マスターピッカーの
/// 変更（全ライトへ一括適用）でのみ設定され、明示的に解除する手段は
/// ありません。
#[derive(Debug, Clone)]
pub struct LampState {
    /// マスターカラー (未選択ならNone)
    master_color: Option<Rgb>,
    /// ライトごとの上書き色 (Noneならマスターカラーに追従)
    overrides: [Option<Rgb>; 3],
    /// 明るさ (0〜255)
    pub brightness: u8,
}

impl Default for LampState {
    fn default() -> Self {
        Self {
            master_color: None,
            overrides: [None; 3],
            brightness: 128,
        }
    }
}

impl LampState {
    /// マスターカラーを取得
    pub fn master_color(&self) -> Option<Rgb> {
        self.master_color
    }

    /// 指定ライトの上書き色を取得
    pub fn override_color(&self, light: LightId) -> Option<Rgb> {
        self.overrides[light.index()]
    }

    /// 指定ライトの表示色を取得
    ///
    /// 上書き色があればそれを、なければマスターカラーを返します。
    pub fn effective_color(&self, light: LightId) -> Option<Rgb> {
        self.override_color(light).or(self.master_color)
    }

    /// マスターカラーを適用する
    ///
    /// 全ライトの上書き色がマスターカラーで置き換えられます。
    pub fn apply_master(&mut self, color: Rgb) {
        self.master_color = Some(color);
        self.overrides = [Some(color); 3];
    }

    /// 指定ライトに上書き色を設定する
    pub fn set_override(&mut self, light: LightId, color: Rgb) {
        self.overrides[light.index()] = Some(color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = LampState::default();

        assert_eq!(state.brightness, 128);
        assert_eq!(state.master_color(), None);
        for light in LightId::ALL {
            assert_eq!(state.effective_color(light), None);
        }
    }

    #[test]
    fn test_override_shadows_master() {
        let mut state = LampState::default();
        state.apply_master(Rgb::new(100, 100, 100));

        state.set_override(LightId::Two, Rgb::new(255, 0, 0));

        // 上書きしたライトだけが固定色、他はマスターカラー
        assert_eq!(
            state.effective_color(LightId::One),
            Some(Rgb::new(100, 100, 100))
        );
        assert_eq!(
            state.effective_color(LightId::Two),
            Some(Rgb::new(255, 0, 0))
        );
        assert_eq!(
            state.effective_color(LightId::Three),
            Some(Rgb::new(100, 100, 100))
        );
    }

    #[test]
    fn test_master_overwrites_all_overrides() {
        let mut state = LampState::default();
        state.set_override(LightId::One, Rgb::new(255, 0, 0));
        state.set_override(LightId::Three, Rgb::new(0, 0, 255));

        let master = Rgb::new(10, 20, 30);
        state.apply_master(master);

        // マスターカラーの適用は全ライトの上書きを置き換える
        assert_eq!(state.master_color(), Some(master));
        for light in LightId::ALL {
            assert_eq!(state.override_color(light), Some(master));
            assert_eq!(state.effective_color(light), Some(master));
        }
    }

    #[test]
    fn test_override_without_master() {
        let mut state = LampState::default();
        state.set_override(LightId::One, Rgb::new(1, 2, 3));

        // マスター未選択でも上書きは有効
        assert_eq!(state.effective_color(LightId::One), Some(Rgb::new(1, 2, 3)));
        assert_eq!(state.effective_color(LightId::Two), None);
    }

    #[test]
    fn test_override_persists_until_next_master() {
        let mut state = LampState::default();
        state.apply_master(Rgb::new(50, 50, 50));
        state.set_override(LightId::One, Rgb::new(200, 0, 0));

        // マスターカラーを読み直しても上書きは保持される
        assert_eq!(
            state.effective_color(LightId::One),
            Some(Rgb::new(200, 0, 0))
        );

        // 次のマスター適用でのみ置き換えられる
        state.apply_master(Rgb::new(0, 200, 0));
        assert_eq!(
            state.effective_color(LightId::One),
            Some(Rgb::new(0, 200, 0))
        );
    }
}
