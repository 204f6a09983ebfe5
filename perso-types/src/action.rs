//! Keyboard actions.
//!
//! Key types:
//! - [`KeyAction`] - What a keymap position holds
//! - [`Action`] - Single operations that the keyboard executes
//! - [`CustomKey`] - The custom behaviors of this keymap
//! - [`UnicodeChar`] - Characters typed through the host's Unicode entry sequence

use serde::{Deserialize, Serialize};

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is the action at a keyboard position, stored in keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action. Serialized as 0x0000.
    #[default]
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, such as triggering a key, or activating a layer.
    Single(Action),
}

/// A single basic action that a keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// A normal key stroke, uses for all keycodes defined in `KeyCode` enum, including mouse key, consumer/system control, etc.
    Key(KeyCode),
    /// Key stroke with modifier combination triggered.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate a layer while the key is held
    LayerOn(u8),
    /// Custom behavior, handled by the dispatcher
    Custom(CustomKey),
}

impl Action {
    /// Returns `true` if the action emits one of the emulated mouse buttons
    pub fn is_mouse_button(self) -> bool {
        match self {
            Action::Key(k) | Action::KeyWithModifier(k, _) => k.is_mouse_button(),
            _ => false,
        }
    }
}

/// The custom keys of the keymap.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKey {
    /// Toggle the RGB lighting without writing the new state to persistent storage
    RgbToggle,
    /// Turn trackball motion into scroll steps while held
    MouseScroll,
    /// Lower the trackball resolution while held
    MouseSnipe,
    /// Type a character through the Unicode entry sequence
    Unicode(UnicodeChar),
}

/// Characters typed by the Unicode custom keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UnicodeChar {
    /// `…`
    ThreeDots,
    /// `œ`
    Oe,
    /// `↑`
    ArrowN,
    /// `↗`
    ArrowNe,
    /// `→`
    ArrowE,
    /// `↘`
    ArrowSe,
    /// `↓`
    ArrowS,
    /// `↙`
    ArrowSw,
    /// `←`
    ArrowW,
    /// `↖`
    ArrowNw,
    /// `↔`
    ArrowWe,
}

impl UnicodeChar {
    pub const ALL: [UnicodeChar; 11] = [
        UnicodeChar::ThreeDots,
        UnicodeChar::Oe,
        UnicodeChar::ArrowN,
        UnicodeChar::ArrowNe,
        UnicodeChar::ArrowE,
        UnicodeChar::ArrowSe,
        UnicodeChar::ArrowS,
        UnicodeChar::ArrowSw,
        UnicodeChar::ArrowW,
        UnicodeChar::ArrowNw,
        UnicodeChar::ArrowWe,
    ];

    /// Unicode code point of the character
    pub const fn code_point(self) -> u32 {
        match self {
            UnicodeChar::ThreeDots => 0x2026,
            UnicodeChar::Oe => 0x0153,
            UnicodeChar::ArrowN => 0x2191,
            UnicodeChar::ArrowNe => 0x2197,
            UnicodeChar::ArrowE => 0x2192,
            UnicodeChar::ArrowSe => 0x2198,
            UnicodeChar::ArrowS => 0x2193,
            UnicodeChar::ArrowSw => 0x2199,
            UnicodeChar::ArrowW => 0x2190,
            UnicodeChar::ArrowNw => 0x2196,
            UnicodeChar::ArrowWe => 0x2194,
        }
    }

    pub fn as_char(self) -> Option<char> {
        char::from_u32(self.code_point())
    }
}
