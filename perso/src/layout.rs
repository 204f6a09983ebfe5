//! The personal layout of the Charybdis 4x6.
//!
//! The `Cp*` layers are copies of `Base` and `Lf`, they only keep the order of the layer
//! stack: `Lf` stays above `Base`, `Rf` above `Lf`, and `Mouse` above everything.

use crate::config::{BehaviorConfig, PersoConfig, PointingConfig, UnicodeConfig};
use crate::french::*;
use crate::types::action::KeyAction;
use crate::types::modifier::GUI;
use crate::{a, charybdis_layout, ck, k, mo, uc, wm};

pub const ROW: usize = 5;
pub const COL: usize = 12;
pub const NUM_LAYER: usize = 8;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    /// Left function layer: numbers, brackets and F7 ~ F12
    Lf = 1,
    CpBase1 = 2,
    /// Right function layer: navigation, accents and F1 ~ F5
    Rf = 3,
    CpLf1 = 4,
    /// Both function layers: arrows, media and other rare keys
    LfRf = 5,
    CpBase2 = 6,
    Mouse = 7,
}

impl Layer {
    pub const fn index(self) -> u8 {
        self as u8
    }
}

const BASE: [[KeyAction; COL]; ROW] = charybdis_layout!(
    [k!(WwwForward), FR_DLR, FR_DQUO, FR_QUOT, FR_COLN, FR_AMPR, FR_HASH, FR_PIPE, FR_MINS, FR_SLSH, FR_COMM, k!(F14)],
    [k!(WwwBack), FR_EXLM, FR_B, FR_P, FR_O, k!(Escape), FR_CIRC, FR_V, FR_D, FR_L, FR_Z, FR_TILD],
    [FR_QUES, FR_A, FR_U, FR_I, FR_E, k!(Tab), FR_C, FR_T, FR_S, FR_R, FR_N, FR_ASTR],
    [k!(LGui), FR_J, FR_Y, FR_X, FR_DOT, FR_K, FR_H, FR_Q, FR_G, FR_F, FR_M, FR_W],
    [k!(Backspace), k!(Space), k!(LCtrl), k!(LAlt), mo!(Layer::Rf)],
    [mo!(Layer::Lf), k!(LShift), k!(Enter)]
);

const LF: [[KeyAction; COL]; ROW] = charybdis_layout!(
    [ck!(RgbToggle), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12)],
    [a!(Transparent), a!(Transparent), FR_LBRC, FR_RBRC, a!(Transparent), a!(Transparent), a!(Transparent), FR_7, FR_8, FR_9, a!(Transparent), a!(Transparent)],
    [a!(Transparent), FR_LABK, FR_RABK, FR_LPRN, FR_RPRN, a!(Transparent), FR_CCED, FR_4, FR_5, FR_6, FR_PLUS, a!(Transparent)],
    [a!(Transparent), k!(Application), k!(LCtrl), k!(LShift), FR_LCBR, FR_RCBR, FR_0, FR_1, FR_2, FR_3, FR_EQL, FR_MINS],
    [a!(Transparent), mo!(Layer::Mouse), a!(Transparent), k!(RAlt), a!(Transparent)],
    [a!(No), a!(Transparent), a!(Transparent)]
);

const RF: [[KeyAction; COL]; ROW] = charybdis_layout!(
    [a!(Transparent), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), a!(Transparent), a!(Transparent), a!(Transparent), FR_BSLS, FR_GRV, a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), uc!(Oe), a!(Transparent), FR_PERC, a!(Transparent), k!(Up), a!(Transparent), a!(Transparent), k!(AudioMute)],
    [a!(Transparent), FR_AGRV, FR_UGRV, FR_EGRV, FR_EACU, wm!(PageUp, GUI), k!(PageUp), k!(Left), k!(Down), k!(Right), FR_PLUS, k!(MediaPlayPause)],
    [a!(Transparent), k!(Application), a!(Transparent), a!(Transparent), FR_SCLN, wm!(PageDown, GUI), k!(PageDown), FR_UNDS, k!(AudioVolDown), k!(AudioVolUp), FR_0, FR_MINS],
    [k!(Delete), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(No)]
);

const LF_RF: [[KeyAction; COL]; ROW] = charybdis_layout!(
    [k!(F6), FR_EURO, uc!(ArrowNw), uc!(ArrowN), uc!(ArrowNe), k!(PrintScreen), k!(CapsLock), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(Transparent), uc!(ArrowW), uc!(ArrowWe), uc!(ArrowE), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), FR_AT, uc!(ArrowSw), uc!(ArrowS), uc!(ArrowSe), a!(Transparent), a!(Transparent), k!(Home), a!(Transparent), k!(End), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), uc!(ThreeDots), a!(Transparent), a!(Transparent), a!(Transparent), k!(MediaNextTrack), k!(MediaPrevTrack), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(No), a!(Transparent), a!(No)]
);

const MOUSE: [[KeyAction; COL]; ROW] = charybdis_layout!(
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), k!(MouseBtn2), ck!(MouseSnipe), ck!(MouseScroll), k!(MouseBtn1), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), k!(MouseBtn3), k!(LCtrl), k!(LShift), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(Transparent), a!(No), a!(Transparent), a!(Transparent), a!(Transparent)],
    [a!(No), a!(Transparent), a!(No)]
);

/// All layers, indexed by [`Layer`]
pub const fn get_default_keymap() -> [[[KeyAction; COL]; ROW]; NUM_LAYER] {
    [BASE, LF, BASE, RF, LF, LF_RF, BASE, MOUSE]
}

/// Configuration of this layout: `Lf` + `Rf` activates `LfRf`, the trackball only moves in `Mouse`
pub fn perso_config() -> PersoConfig {
    PersoConfig {
        behavior: BehaviorConfig {
            tri_layer: Some([Layer::Lf.index(), Layer::Rf.index(), Layer::LfRf.index()]),
        },
        pointing: PointingConfig {
            mouse_layer: Some(Layer::Mouse.index()),
            ..Default::default()
        },
        unicode: UnicodeConfig {
            hex_letters: FR_HEX_LETTERS,
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::action::{Action, CustomKey, UnicodeChar};
    use crate::types::keycode::KeyCode;

    #[test]
    fn test_copies_match_their_source() {
        let keymap = get_default_keymap();
        assert_eq!(keymap[Layer::CpBase1 as usize], keymap[Layer::Base as usize]);
        assert_eq!(keymap[Layer::CpBase2 as usize], keymap[Layer::Base as usize]);
        assert_eq!(keymap[Layer::CpLf1 as usize], keymap[Layer::Lf as usize]);
    }

    #[test]
    fn test_thumb_cluster() {
        let keymap = get_default_keymap();
        let thumbs = keymap[Layer::Base as usize][4];
        assert_eq!(thumbs[0], KeyAction::No);
        assert_eq!(thumbs[1], k!(Backspace));
        assert_eq!(thumbs[4], KeyAction::Single(Action::LayerOn(1)));
        assert_eq!(thumbs[7], KeyAction::Single(Action::LayerOn(3)));
        assert_eq!(thumbs[8], k!(Enter));
        assert_eq!(keymap[Layer::Lf as usize][4][2], KeyAction::Single(Action::LayerOn(7)));
    }

    #[test]
    fn test_every_unicode_char_is_reachable() {
        let keymap = get_default_keymap();
        for c in UnicodeChar::ALL {
            let target = KeyAction::Single(Action::Custom(CustomKey::Unicode(c)));
            assert!(
                keymap.iter().flatten().flatten().any(|a| *a == target),
                "{:?} is not in the keymap",
                c
            );
        }
    }

    #[test]
    fn test_mouse_layer_keys() {
        let keymap = get_default_keymap();
        let home = keymap[Layer::Mouse as usize][2];
        assert_eq!(home[1], k!(MouseBtn2));
        assert_eq!(home[2], KeyAction::Single(Action::Custom(CustomKey::MouseSnipe)));
        assert_eq!(home[3], KeyAction::Single(Action::Custom(CustomKey::MouseScroll)));
        assert_eq!(home[4], KeyAction::Single(Action::Key(KeyCode::MouseBtn1)));
    }

    #[test]
    fn test_layout_config() {
        let config = perso_config();
        assert_eq!(config.behavior.tri_layer, Some([1, 3, 5]));
        assert_eq!(config.pointing.mouse_layer, Some(7));
        assert_eq!(config.pointing.snipe.snipe_cpi, 200);
        // `a` is typed with the US `q` key
        assert_eq!(config.unicode.hex_letters[0], KeyCode::Q);
    }
}
