//! Modifier combinations attached to a key.
use core::ops::BitOr;

use bitfield_struct::bitfield;
use heapless::Vec;
use postcard::experimental::max_size::MaxSize;
use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;

/// To represent all combinations of modifiers, at least 5 bits are needed.
/// 1 bit for Left/Right, 4 bits for modifier type. Represented in LSB format.
///
/// | bit4 | bit3 | bit2 | bit1 | bit0 |
/// | --- | --- | --- | --- | --- |
/// | L/R | GUI | ALT |SHIFT| CTRL|
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, MaxSize, Eq, PartialEq)]
pub struct ModifierCombination {
    #[bits(1)]
    pub ctrl: bool,
    #[bits(1)]
    pub shift: bool,
    #[bits(1)]
    pub alt: bool,
    #[bits(1)]
    pub gui: bool,
    #[bits(1)]
    pub right: bool,
    #[bits(3)]
    _reserved: u8,
}

impl BitOr for ModifierCombination {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

pub const CTRL: ModifierCombination = ModifierCombination::new().with_ctrl(true);
pub const SHIFT: ModifierCombination = ModifierCombination::new().with_shift(true);
pub const ALT: ModifierCombination = ModifierCombination::new().with_alt(true);
pub const GUI: ModifierCombination = ModifierCombination::new().with_gui(true);
pub const RIGHT: ModifierCombination = ModifierCombination::new().with_right(true);
/// AltGr, the third level selector of the French layout
pub const ALTGR: ModifierCombination = ModifierCombination::new().with_right(true).with_alt(true);

impl ModifierCombination {
    pub const fn new_from(right: bool, gui: bool, alt: bool, shift: bool, ctrl: bool) -> Self {
        ModifierCombination::new()
            .with_right(right)
            .with_gui(gui)
            .with_alt(alt)
            .with_shift(shift)
            .with_ctrl(ctrl)
    }

    /// The modifier keys to hold, in `Ctrl`, `Shift`, `Alt`, `Gui` order.
    ///
    /// Release them in reverse order.
    pub fn to_keycodes(self) -> Vec<KeyCode, 4> {
        let mut keycodes = Vec::new();
        let candidates = if self.right() {
            [
                (self.ctrl(), KeyCode::RCtrl),
                (self.shift(), KeyCode::RShift),
                (self.alt(), KeyCode::RAlt),
                (self.gui(), KeyCode::RGui),
            ]
        } else {
            [
                (self.ctrl(), KeyCode::LCtrl),
                (self.shift(), KeyCode::LShift),
                (self.alt(), KeyCode::LAlt),
                (self.gui(), KeyCode::LGui),
            ]
        };
        for (enabled, keycode) in candidates {
            if enabled {
                // At most 4 entries, never full
                let _ = keycodes.push(keycode);
            }
        }
        keycodes
    }
}
