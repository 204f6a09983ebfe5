//! French AZERTY aliases.
//!
//! The host uses the French AZERTY layout, these are the keys of the US HID usage table
//! which produce each French character, with `Shift` or `AltGr` when needed.

use crate::types::action::KeyAction;
use crate::types::keycode::KeyCode;
use crate::types::modifier::{ALTGR, SHIFT};
use crate::{k, wm};

// Row 1
pub const FR_AMPR: KeyAction = k!(Kc1);
/// `é`
pub const FR_EACU: KeyAction = k!(Kc2);
pub const FR_DQUO: KeyAction = k!(Kc3);
pub const FR_QUOT: KeyAction = k!(Kc4);
pub const FR_LPRN: KeyAction = k!(Kc5);
pub const FR_MINS: KeyAction = k!(Kc6);
/// `è`
pub const FR_EGRV: KeyAction = k!(Kc7);
pub const FR_UNDS: KeyAction = k!(Kc8);
/// `ç`
pub const FR_CCED: KeyAction = k!(Kc9);
/// `à`
pub const FR_AGRV: KeyAction = k!(Kc0);
pub const FR_RPRN: KeyAction = k!(Minus);
pub const FR_EQL: KeyAction = k!(Equal);

// Row 2
pub const FR_A: KeyAction = k!(Q);
pub const FR_Z: KeyAction = k!(W);
pub const FR_E: KeyAction = k!(E);
pub const FR_R: KeyAction = k!(R);
pub const FR_T: KeyAction = k!(T);
pub const FR_Y: KeyAction = k!(Y);
pub const FR_U: KeyAction = k!(U);
pub const FR_I: KeyAction = k!(I);
pub const FR_O: KeyAction = k!(O);
pub const FR_P: KeyAction = k!(P);
/// `^`, dead key
pub const FR_CIRC: KeyAction = k!(LeftBracket);
pub const FR_DLR: KeyAction = k!(RightBracket);

// Row 3
pub const FR_Q: KeyAction = k!(A);
pub const FR_S: KeyAction = k!(S);
pub const FR_D: KeyAction = k!(D);
pub const FR_F: KeyAction = k!(F);
pub const FR_G: KeyAction = k!(G);
pub const FR_H: KeyAction = k!(H);
pub const FR_J: KeyAction = k!(J);
pub const FR_K: KeyAction = k!(K);
pub const FR_L: KeyAction = k!(L);
pub const FR_M: KeyAction = k!(Semicolon);
/// `ù`
pub const FR_UGRV: KeyAction = k!(Quote);
pub const FR_ASTR: KeyAction = k!(NonusHash);

// Row 4
pub const FR_LABK: KeyAction = k!(NonusBackslash);
pub const FR_W: KeyAction = k!(Z);
pub const FR_X: KeyAction = k!(X);
pub const FR_C: KeyAction = k!(C);
pub const FR_V: KeyAction = k!(V);
pub const FR_B: KeyAction = k!(B);
pub const FR_N: KeyAction = k!(N);
pub const FR_COMM: KeyAction = k!(M);
pub const FR_SCLN: KeyAction = k!(Comma);
pub const FR_COLN: KeyAction = k!(Dot);
pub const FR_EXLM: KeyAction = k!(Slash);

// Shifted symbols
pub const FR_1: KeyAction = wm!(Kc1, SHIFT);
pub const FR_2: KeyAction = wm!(Kc2, SHIFT);
pub const FR_3: KeyAction = wm!(Kc3, SHIFT);
pub const FR_4: KeyAction = wm!(Kc4, SHIFT);
pub const FR_5: KeyAction = wm!(Kc5, SHIFT);
pub const FR_6: KeyAction = wm!(Kc6, SHIFT);
pub const FR_7: KeyAction = wm!(Kc7, SHIFT);
pub const FR_8: KeyAction = wm!(Kc8, SHIFT);
pub const FR_9: KeyAction = wm!(Kc9, SHIFT);
pub const FR_0: KeyAction = wm!(Kc0, SHIFT);
pub const FR_PLUS: KeyAction = wm!(Equal, SHIFT);
pub const FR_PERC: KeyAction = wm!(Quote, SHIFT);
pub const FR_RABK: KeyAction = wm!(NonusBackslash, SHIFT);
pub const FR_QUES: KeyAction = wm!(M, SHIFT);
pub const FR_DOT: KeyAction = wm!(Comma, SHIFT);
pub const FR_SLSH: KeyAction = wm!(Dot, SHIFT);

// AltGr symbols
/// `~`, dead key
pub const FR_TILD: KeyAction = wm!(Kc2, ALTGR);
pub const FR_HASH: KeyAction = wm!(Kc3, ALTGR);
pub const FR_LCBR: KeyAction = wm!(Kc4, ALTGR);
pub const FR_LBRC: KeyAction = wm!(Kc5, ALTGR);
pub const FR_PIPE: KeyAction = wm!(Kc6, ALTGR);
/// `` ` ``, dead key
pub const FR_GRV: KeyAction = wm!(Kc7, ALTGR);
pub const FR_BSLS: KeyAction = wm!(Kc8, ALTGR);
pub const FR_AT: KeyAction = wm!(Kc0, ALTGR);
pub const FR_RBRC: KeyAction = wm!(Minus, ALTGR);
pub const FR_RCBR: KeyAction = wm!(Equal, ALTGR);
pub const FR_EURO: KeyAction = wm!(E, ALTGR);

/// Keys typing the hexadecimal letters `a` ~ `f`
pub const FR_HEX_LETTERS: [KeyCode; 6] = [KeyCode::Q, KeyCode::B, KeyCode::C, KeyCode::D, KeyCode::E, KeyCode::F];
