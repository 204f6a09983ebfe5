//! Mouse button state.
//!
//! Bit `n` of the mask is button `n + 1`, the layout of the buttons byte of a
//! HID mouse report.
use core::ops::BitOr;

use bitfield_struct::bitfield;
use serde::{Deserialize, Serialize};

/// Mouse buttons
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Serialize, Deserialize, Eq, PartialEq)]
pub struct MouseButtons {
    #[bits(1)]
    pub button1: bool, //left
    #[bits(1)]
    pub button2: bool, //right
    #[bits(1)]
    pub button3: bool, //middle
    #[bits(1)]
    pub button4: bool,
    #[bits(1)]
    pub button5: bool,
    #[bits(1)]
    pub button6: bool,
    #[bits(1)]
    pub button7: bool,
    #[bits(1)]
    pub button8: bool,
}

impl BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.into_bits() | rhs.into_bits())
    }
}

impl MouseButtons {
    pub const BUTTON1: Self = Self::new().with_button1(true);
    pub const BUTTON2: Self = Self::new().with_button2(true);
    pub const BUTTON3: Self = Self::new().with_button3(true);
    pub const BUTTON4: Self = Self::new().with_button4(true);
    pub const BUTTON5: Self = Self::new().with_button5(true);
    pub const BUTTON6: Self = Self::new().with_button6(true);
    pub const BUTTON7: Self = Self::new().with_button7(true);
    pub const BUTTON8: Self = Self::new().with_button8(true);

    pub fn is_empty(self) -> bool {
        self.into_bits() == 0
    }
}
